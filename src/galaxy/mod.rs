use bevy::prelude::*;

mod galaxy_config;
mod galaxy_scene;
mod point_mesh;
mod spawn_points;

pub use galaxy_config::{GalaxyConfig, GalaxyConfigPlugin, GalaxyConfigUi, ParamCommitted};
pub use galaxy_scene::{BevyGalaxyScene, CurrentGalaxy, GalaxyPoints};
pub use spawn_points::SpawnPointsPlugin;

/// Runs after the panel has raised its commits for the frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GalaxyUpdateSet;

pub struct GalaxyPlugin;

impl Plugin for GalaxyPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((GalaxyConfigPlugin, SpawnPointsPlugin));
    }
}
