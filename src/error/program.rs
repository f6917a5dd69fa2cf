use super::FlatError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier is {len} bytes long, the limit is {}", crate::identifier::MAX_LEN)]
    TooLong { len: usize },
}

impl FlatError for ProgramError {}
impl FlatError for IdentifierError {}

pub type ProgramResult<O = ()> = Result<O, ProgramError>;
