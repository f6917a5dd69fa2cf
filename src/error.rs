pub mod config;
pub mod program;
pub mod runtime;

use thiserror::Error;

/// Implemented by every error this crate can hand back to a caller.
pub trait FlatError: std::error::Error {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("ConfigError: {0}")]
    Config(#[from] config::ConfigError),
    #[error("ProgramError: {0}")]
    Program(#[from] program::ProgramError),
    #[error("RuntimeError: {0}")]
    Runtime(#[from] runtime::RuntimeError),
}

impl FlatError for Error {}
