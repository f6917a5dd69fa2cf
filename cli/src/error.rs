use flatvm::{ConfigError, ProgramError, RuntimeError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CLIError {
	#[error("unknown argument `{0}`")]
	UnkownArgument(String),
	#[error("not enough arguments, try `flatvm help`")]
	InsufficientArguments,
	#[error("no demo named `{0}`, try `flatvm list`")]
	NotFound(String),
	#[error("capacity must be a whole number, got `{0}`")]
	BadCapacity(String),
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error(transparent)]
	Program(#[from] ProgramError),
	#[error("run aborted: {0}")]
	Aborted(#[from] RuntimeError),
}

pub type CLIResult<O=()> = Result<O, CLIError>;
