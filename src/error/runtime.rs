use super::FlatError;
use crate::{Identifier, Word};
use thiserror::Error;

/// Failures raised while a program is executing. Whatever the program wrote
/// before the failure stays in memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("cannot declare more than {capacity} variables")]
    CapacityExceeded { capacity: usize },
    #[error("variable `{0}` was never declared")]
    UnknownIdentifier(Identifier),
    #[error("address {index} is outside memory of {capacity} words")]
    OutOfRange { index: Word, capacity: usize },
}

impl FlatError for RuntimeError {}

pub type RuntimeResult<T = ()> = Result<T, RuntimeError>;
