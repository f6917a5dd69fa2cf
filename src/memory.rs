/*
    # Memory
    A fixed number of signed words, a table binding names to slots and the two
    condition flags. Every declaration takes the next free slot, even when the
    name is already bound; only the first slot of a name is reachable by name.
*/

use crate::{error::runtime::*, Identifier};
use indexmap::IndexMap;
use num_traits::Zero;
use std::fmt;
use tracing::warn;

pub type Word = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// ZF: the last arithmetic result was zero
    pub zero: bool,
    /// SF: the last arithmetic result was negative
    pub sign: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Memory {
    cells: Vec<Word>,
    names: IndexMap<Identifier, usize>,
    flags: Flags,
    next_slot: usize,
}

impl Memory {
    pub fn new(capacity: usize) -> Self {
        let mut memory = Self::default();
        memory.setup(capacity);
        memory
    }

    /// Zero every cell and forget all names and flags.
    pub fn setup(&mut self, capacity: usize) {
        self.cells = vec![0; capacity];
        self.names.clear();
        self.flags = Flags::default();
        self.next_slot = 0;
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn next_slot(&self) -> usize {
        self.next_slot
    }

    pub fn cells(&self) -> &[Word] {
        &self.cells
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Name table in declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = (&Identifier, usize)> + '_ {
        self.names.iter().map(|(name, slot)| (name, *slot))
    }

    /// Take the next free slot for `name`.
    pub fn allocate(&mut self, name: &Identifier) -> RuntimeResult<usize> {
        if self.next_slot == self.capacity() {
            return Err(RuntimeError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let slot = self.next_slot;
        if let Some(&first) = self.names.get(name) {
            warn!(%name, first, slot, "redeclared variable, new slot is only reachable by address");
        } else {
            self.names.insert(name.clone(), slot);
        }
        self.next_slot += 1;
        Ok(slot)
    }

    pub fn slot_of(&self, name: &Identifier) -> RuntimeResult<usize> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownIdentifier(name.clone()))
    }

    /// Turn a computed word into a cell index.
    pub fn address(&self, word: Word) -> RuntimeResult<usize> {
        usize::try_from(word)
            .ok()
            .filter(|index| *index < self.capacity())
            .ok_or(RuntimeError::OutOfRange {
                index: word,
                capacity: self.capacity(),
            })
    }

    pub fn read(&self, index: usize) -> RuntimeResult<Word> {
        self.cells
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn write(&mut self, index: usize, value: Word) -> RuntimeResult {
        *self.cell_mut(index)? = value;
        Ok(())
    }

    pub fn cell_mut(&mut self, index: usize) -> RuntimeResult<&mut Word> {
        let err = self.out_of_range(index);
        self.cells.get_mut(index).ok_or(err)
    }

    pub fn update_flags(&mut self, value: Word) {
        self.flags = Flags {
            zero: value.is_zero(),
            sign: value.is_negative(),
        };
    }

    fn out_of_range(&self, index: usize) -> RuntimeError {
        RuntimeError::OutOfRange {
            index: as_word(index),
            capacity: self.capacity(),
        }
    }
}

/// Slots always fit a word; anything larger is reported as the largest word.
pub(crate) fn as_word(index: usize) -> Word {
    Word::try_from(index).unwrap_or(Word::MAX)
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{} ", cell)?;
        }
        Ok(())
    }
}
