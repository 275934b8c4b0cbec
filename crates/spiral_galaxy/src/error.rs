use thiserror::Error;

pub type GalaxyResult<T> = Result<T, GalaxyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GalaxyError {
    /// Rejected before any buffer is touched; the previous cloud stays attached.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// Releasing a replaced cloud's assets failed. Leaks at worst, never fatal.
    #[error("failed to release galaxy resources: {0}")]
    ResourceRelease(String),
}
