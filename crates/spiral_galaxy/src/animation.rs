use bevy::math::{EulerRot, Quat};

/// Radians per second around the vertical axis.
pub const YAW_SPEED: f32 = 0.1;
/// Radians per second around the horizontal axis. Kept well below `YAW_SPEED`
/// so the disk precesses slowly instead of tumbling.
pub const PITCH_SPEED: f32 = 0.001;
/// Resting tilt around z that every attached cloud starts with.
pub const BASE_TILT: f32 = std::f32::consts::PI / 7.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinDirection {
    #[default]
    Forward,
    Reverse,
}

impl SpinDirection {
    pub fn from_spin(spin: f32) -> Self {
        if spin >= 0.0 {
            SpinDirection::Forward
        } else {
            SpinDirection::Reverse
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            SpinDirection::Forward => 1.0,
            SpinDirection::Reverse => -1.0,
        }
    }
}

/// Absolute orientation after `elapsed_secs`; recomputed each frame, never accumulated.
pub fn rotation_at(direction: SpinDirection, elapsed_secs: f32) -> Quat {
    let sign = direction.sign();
    Quat::from_euler(
        EulerRot::XYZ,
        sign * elapsed_secs * PITCH_SPEED,
        sign * elapsed_secs * YAW_SPEED,
        BASE_TILT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_follows_spin() {
        let cases = [
            (-5.0, -1.0),
            (-0.001, -1.0),
            (0.0, 1.0),
            (0.001, 1.0),
            (5.0, 1.0),
        ];
        for (spin, expected) in cases {
            assert_eq!(SpinDirection::from_spin(spin).sign(), expected, "spin = {}", spin);
        }
    }

    #[test]
    fn negative_zero_spins_forward() {
        assert_eq!(SpinDirection::from_spin(-0.0), SpinDirection::Forward);
    }

    #[test]
    fn yaw_outpaces_pitch() {
        assert!(YAW_SPEED >= PITCH_SPEED * 10.0);
    }

    #[test]
    fn reverse_mirrors_forward() {
        let (fx, fy, fz) = rotation_at(SpinDirection::Forward, 10.0).to_euler(EulerRot::XYZ);
        let (rx, ry, rz) = rotation_at(SpinDirection::Reverse, 10.0).to_euler(EulerRot::XYZ);
        assert!((fx + rx).abs() < 1e-4);
        assert!((fy + ry).abs() < 1e-4);
        assert!((fz - rz).abs() < 1e-4);
        assert!((fy - 1.0).abs() < 1e-4);
    }

    #[test]
    fn starts_at_base_tilt() {
        let rest = rotation_at(SpinDirection::Reverse, 0.0);
        assert!(rest.abs_diff_eq(Quat::from_rotation_z(BASE_TILT), 1e-6), "{:?}", rest);
    }
}
