use bevy::{
    input::mouse::{AccumulatedMouseMotion, MouseScrollUnit, MouseWheel},
    prelude::*,
    transform::TransformSystem,
};
use bevy_egui::EguiContexts;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(
                PostUpdate,
                camera_control_system.before(TransformSystem::TransformPropagate),
            );
    }
}

const ROTATE_SPEED: f32 = 0.005;
const DAMPING: f32 = 0.05;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 60.0;

fn spawn_camera(mut commands: Commands, mut clearcolor: ResMut<ClearColor>) {
    *clearcolor = ClearColor(Color::BLACK);
    let camera_main = CameraMain::default();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 75f32.to_radians(),
            near: 0.1,
            far: 100.0,
            ..default()
        }),
        Transform::from_translation(camera_main.translation())
            .looking_at(camera_main.target_pos, Vec3::Y),
        camera_main,
    ));
}

/// Orbit state around `target_pos`. Drag input feeds the velocities, which
/// decay each frame so the view glides to a stop.
#[derive(Component, Clone)]
pub struct CameraMain {
    target_pos: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    smooth_zoom_buffer: f32,
}

impl Default for CameraMain {
    fn default() -> Self {
        // looking at the origin from (0, 1, 4)
        let start = Vec3::new(0.0, 1.0, 4.0);
        Self {
            target_pos: Vec3::ZERO,
            yaw: 0.0,
            pitch: (start.y / start.xz().length()).atan(),
            distance: start.length(),
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            smooth_zoom_buffer: 0.0,
        }
    }
}

impl CameraMain {
    fn translation(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.target_pos + offset * self.distance
    }
}

pub fn camera_control_system(
    mut query: Query<(&mut Transform, &mut CameraMain)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut scroll_evr: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
) {
    let Ok((mut transform, mut camera_main)) = query.single_mut() else {
        return;
    };

    let ctx = contexts.ctx_mut();
    let ui_has_pointer = ctx.wants_pointer_input() || ctx.is_pointer_over_area();

    if mouse_buttons.pressed(MouseButton::Left) && !ui_has_pointer {
        camera_main.yaw_velocity -= mouse_motion.delta.x * ROTATE_SPEED;
        camera_main.pitch_velocity += mouse_motion.delta.y * ROTATE_SPEED;
    }

    // scroll delta is cached to a buffer
    // buffer is converted to actual zoom over time for a smooth zooming effect
    for ev in scroll_evr.read() {
        if ui_has_pointer {
            continue;
        }
        match ev.unit {
            MouseScrollUnit::Line => {
                camera_main.smooth_zoom_buffer += ev.y * 0.1;
            }
            MouseScrollUnit::Pixel => {
                camera_main.smooth_zoom_buffer += ev.y * 0.005;
            }
        }
    }

    let smooth_zoom_min = 0.001f32;
    let smooth_zoom_factor = 0.2f32;

    let smooth_zoom_amount = if camera_main.smooth_zoom_buffer < 0.0 {
        f32::min(
            camera_main.smooth_zoom_buffer * smooth_zoom_factor,
            (-smooth_zoom_min).max(camera_main.smooth_zoom_buffer),
        )
    } else {
        f32::max(
            camera_main.smooth_zoom_buffer * smooth_zoom_factor,
            smooth_zoom_min.min(camera_main.smooth_zoom_buffer),
        )
    };
    camera_main.smooth_zoom_buffer -= smooth_zoom_amount;
    camera_main.distance =
        (camera_main.distance * (1.0 - smooth_zoom_amount)).clamp(MIN_DISTANCE, MAX_DISTANCE);

    camera_main.yaw += camera_main.yaw_velocity * DAMPING;
    camera_main.pitch = (camera_main.pitch + camera_main.pitch_velocity * DAMPING).clamp(-1.5, 1.5);
    camera_main.yaw_velocity *= 1.0 - DAMPING;
    camera_main.pitch_velocity *= 1.0 - DAMPING;

    transform.translation = camera_main.translation();
    transform.look_at(camera_main.target_pos, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orbit_starts_above_the_disk() {
        let camera_main = CameraMain::default();
        let pos = camera_main.translation();
        assert!((pos - Vec3::new(0.0, 1.0, 4.0)).length() < 1e-5, "{:?}", pos);
    }

    #[test]
    fn orbit_keeps_distance() {
        let camera_main = CameraMain {
            yaw: 2.0,
            pitch: -0.7,
            ..default()
        };
        let d = (camera_main.translation() - camera_main.target_pos).length();
        assert!((d - camera_main.distance).abs() < 1e-5);
    }
}
