use bevy::color::Color;

use crate::{GalaxyError, GalaxyResult};

/// Hard ceiling on `count`, well above the panel's range. Keeps the two
/// buffers allocatable and `count * 3` inside `usize` on 32-bit targets.
pub const MAX_COUNT: u32 = 1_000_000;

#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyParameters {
    pub count: u32,
    pub size: f32,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,
    pub inside_color: Color,
    pub outside_color: Color,
}

impl Default for GalaxyParameters {
    fn default() -> Self {
        Self {
            count: 50_000,
            size: 0.01,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
            randomness: 0.4,
            randomness_power: 2.0,
            inside_color: Color::srgb_u8(0xed, 0x51, 0x35),
            outside_color: Color::srgb_u8(0x39, 0x67, 0xdb),
        }
    }
}

impl GalaxyParameters {
    /// Lower editing bounds for the debug panel. Colors are unused.
    pub const MIN: Self = Self {
        count: 1_000,
        size: 0.005,
        radius: 0.01,
        branches: 2,
        spin: -5.0,
        randomness: 0.0,
        randomness_power: 1.0,
        inside_color: Color::BLACK,
        outside_color: Color::BLACK,
    };
    /// Upper editing bounds for the debug panel. Colors are unused.
    pub const MAX: Self = Self {
        count: 100_000,
        size: 0.02,
        radius: 20.0,
        branches: 20,
        spin: 5.0,
        randomness: 2.0,
        randomness_power: 10.0,
        inside_color: Color::WHITE,
        outside_color: Color::WHITE,
    };

    /// Checks the hard invariants the generator depends on.
    /// UI ranges are hints and are not enforced here.
    pub fn validate(&self) -> GalaxyResult<()> {
        let invalid = |name: &'static str, reason: &'static str| -> GalaxyResult<()> {
            Err(GalaxyError::InvalidParameter { name, reason })
        };

        if self.count == 0 {
            return invalid("count", "must be at least 1");
        }
        if self.count > MAX_COUNT {
            return invalid("count", "must be at most 1000000");
        }
        if self.branches == 0 {
            return invalid("branches", "must be at least 1");
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return invalid("radius", "must be positive and finite");
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return invalid("size", "must be positive and finite");
        }
        if !self.spin.is_finite() {
            return invalid("spin", "must be finite");
        }
        if !(self.randomness.is_finite() && self.randomness >= 0.0) {
            return invalid("randomness", "must be finite and not negative");
        }
        if !(self.randomness_power.is_finite() && self.randomness_power >= 1.0) {
            return invalid("randomnessPower", "must be finite and at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(GalaxyParameters::default().validate().is_ok());
    }

    #[test]
    fn ui_bounds_are_valid() {
        assert!(GalaxyParameters::MIN.validate().is_ok());
        assert!(GalaxyParameters::MAX.validate().is_ok());
    }

    #[test]
    fn rejects_zero_count() {
        let params = GalaxyParameters {
            count: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GalaxyError::InvalidParameter { name: "count", .. })
        ));
    }

    #[test]
    fn rejects_bad_radius() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let params = GalaxyParameters {
                radius,
                ..Default::default()
            };
            assert!(
                matches!(
                    params.validate(),
                    Err(GalaxyError::InvalidParameter { name: "radius", .. })
                ),
                "radius = {}",
                radius
            );
        }
    }

    #[test]
    fn rejects_count_above_limit() {
        for count in [MAX_COUNT + 1, u32::MAX] {
            let params = GalaxyParameters {
                count,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(GalaxyError::InvalidParameter { name: "count", .. })
            ));
        }
        let at_limit = GalaxyParameters {
            count: MAX_COUNT,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_and_out_of_range_floats() {
        let cases = [
            ("size", GalaxyParameters { size: 0.0, ..Default::default() }),
            ("size", GalaxyParameters { size: f32::NAN, ..Default::default() }),
            ("spin", GalaxyParameters { spin: f32::NAN, ..Default::default() }),
            ("spin", GalaxyParameters { spin: f32::NEG_INFINITY, ..Default::default() }),
            ("randomness", GalaxyParameters { randomness: -0.1, ..Default::default() }),
            ("randomness", GalaxyParameters { randomness: f32::NAN, ..Default::default() }),
            ("randomnessPower", GalaxyParameters { randomness_power: 0.5, ..Default::default() }),
            ("randomnessPower", GalaxyParameters { randomness_power: f32::INFINITY, ..Default::default() }),
        ];
        for (expected, params) in cases {
            match params.validate() {
                Err(GalaxyError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("{} accepted: {:?}", expected, other),
            }
        }
    }

    #[test]
    fn negative_spin_is_valid() {
        let params = GalaxyParameters {
            spin: -5.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn single_branch_is_allowed() {
        // the UI never goes below two, but one arm is still well defined
        let params = GalaxyParameters {
            branches: 1,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }
}
