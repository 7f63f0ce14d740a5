use thiserror::Error;

/// Errors raised when interpreting stored record values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// volume type string is not one of the documented values
    #[error("unknown volume type {0:?}, expected one of: standard, io1, gp2")]
    UnknownVolumeType(String),
}
