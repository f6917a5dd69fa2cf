use crate::{error::runtime::*, memory::as_word, Identifier, Memory, Word};
use std::fmt;

/// Anything an instruction can read a word from. Resolution is deferred until
/// the instruction runs, so names only have to exist by then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A literal word
    Immediate(Word),
    /// The slot a variable was first declared in
    AddressOf(Identifier),
    /// The contents of a cell
    Indirect(Location),
}

/// A writable cell, addressed by the word its inner operand resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(Box<Operand>);

impl Operand {
    pub fn value(&self, memory: &Memory) -> RuntimeResult<Word> {
        match self {
            Self::Immediate(value) => Ok(*value),
            Self::AddressOf(name) => memory.slot_of(name).map(as_word),
            Self::Indirect(location) => location.value(memory),
        }
    }
}

impl Location {
    pub fn new(address: Operand) -> Self {
        Self(Box::new(address))
    }

    pub fn address(&self) -> &Operand {
        &self.0
    }

    /// Index of the cell this location names.
    pub fn resolve(&self, memory: &Memory) -> RuntimeResult<usize> {
        memory.address(self.0.value(memory)?)
    }

    pub fn value(&self, memory: &Memory) -> RuntimeResult<Word> {
        memory.read(self.resolve(memory)?)
    }

    pub fn reference<'m>(&self, memory: &'m mut Memory) -> RuntimeResult<&'m mut Word> {
        let index = self.resolve(memory)?;
        memory.cell_mut(index)
    }
}

impl From<Location> for Operand {
    fn from(location: Location) -> Self {
        Self::Indirect(location)
    }
}

impl From<Word> for Operand {
    fn from(value: Word) -> Self {
        Self::Immediate(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(value) => write!(f, "num({})", value),
            Self::AddressOf(name) => write!(f, "lea({:?})", name.as_str()),
            Self::Indirect(location) => fmt::Display::fmt(location, f),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mem({})", self.0)
    }
}
