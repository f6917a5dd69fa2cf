use crate::error::program::IdentifierError;
use std::{fmt, str::FromStr};

/// Longest accepted variable name, in bytes.
pub const MAX_LEN: usize = 10;

/// A variable name. Names are compared byte for byte, so `a` and `A` are
/// different variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: &str) -> Result<Self, IdentifierError> {
        match name.len() {
            0 => Err(IdentifierError::Empty),
            len if len > MAX_LEN => Err(IdentifierError::TooLong { len }),
            _ => Ok(Self(name.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = IdentifierError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_to_ten_bytes() {
        assert!(Identifier::new("a").is_ok());
        assert!(Identifier::new("abcdefghij").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Identifier::new(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn rejects_eleven_bytes() {
        assert_eq!(
            Identifier::new("abcdefghijk"),
            Err(IdentifierError::TooLong { len: 11 })
        );
    }

    #[test]
    fn length_is_counted_in_bytes() {
        // four two-byte characters plus three ascii ones
        assert!(Identifier::new("ąęść123").is_err());
        assert!(Identifier::new("ąęśa").is_ok());
    }

    #[test]
    fn case_sensitive() {
        assert_ne!(Identifier::new("a"), Identifier::new("A"));
    }
}
