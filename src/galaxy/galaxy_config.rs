use bevy::prelude::*;
use spiral_galaxy::{GalaxyParameters, ParamChange};

/// The parameters the attached galaxy was built from.
#[derive(Resource, Clone, PartialEq, Default)]
pub struct GalaxyConfig {
    pub params: GalaxyParameters,
    pub generation: u32,
}

/// Panel-side copy of the parameters. Edits land here while a slider is
/// dragged and only reach `GalaxyConfig` through a `ParamCommitted` event.
#[derive(Resource, Clone, Default)]
pub struct GalaxyConfigUi {
    pub draft: GalaxyParameters,
    pub rejection: Option<String>,
}

/// A finished edit of one parameter (slider released, color picked).
#[derive(Event, Clone, Copy, Debug)]
pub struct ParamCommitted(pub ParamChange);

pub struct GalaxyConfigPlugin;

impl Plugin for GalaxyConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GalaxyConfig::default())
            .insert_resource(GalaxyConfigUi::default())
            .add_event::<ParamCommitted>();
    }
}
