use super::FlatError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a machine needs at least one word of memory")]
    ZeroCapacity,
}

impl FlatError for ConfigError {}

pub type ConfigResult<O = ()> = Result<O, ConfigError>;
