pub use crate::{
    GalaxyError, GalaxyParameters, GalaxyPointCloud, GalaxyResult, GalaxyScene, GalaxyState,
    ParamChange, ParamName, SpinDirection,
};
