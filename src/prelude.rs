pub use crate::galaxy::{GalaxyConfig, GalaxyConfigUi, ParamCommitted};
pub use spiral_galaxy::prelude::*;
