//! Spiral galaxy point clouds: parameters, generation, and the
//! regenerate/tick lifecycle over an abstract scene.
mod animation;
mod commit;
mod error;
mod generator;
mod lifecycle;
mod params;
pub mod prelude;

pub use animation::{BASE_TILT, PITCH_SPEED, SpinDirection, YAW_SPEED, rotation_at};
pub use commit::{ParamChange, ParamName};
pub use error::{GalaxyError, GalaxyResult};
pub use generator::{GalaxyPointCloud, generate, generate_with_rng};
pub use lifecycle::{GalaxyScene, GalaxyState};
pub use params::{GalaxyParameters, MAX_COUNT};
