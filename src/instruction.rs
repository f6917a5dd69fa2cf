/*
    ooasm instruction set
    (dst: writable cell, src: any operand)

    data(name, n)   declare `name` in the next free slot, store n
    mov(dst, src)   dst = src
    add(dst, src)   dst += src       sets ZF SF
    sub(dst, src)   dst -= src       sets ZF SF
    inc(dst)        dst += 1         sets ZF SF
    dec(dst)        dst -= 1         sets ZF SF
    one(dst)        dst = 1
    ones(dst)       dst = 1 if SF
    onez(dst)       dst = 1 if ZF
*/

use crate::{error::runtime::*, Identifier, Location, Memory, Operand, Word};
use num_traits::{WrappingAdd, WrappingSub};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Define { name: Identifier, value: Word },
    Move { dst: Location, src: Operand },
    Add { dst: Location, src: Operand },
    Sub { dst: Location, src: Operand },
    Inc { dst: Location },
    Dec { dst: Location },
    Set { condition: Condition, dst: Location },
}

/// When a `Set` instruction stores its one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    Sign,
    Zero,
}

macro_rules! arithmetic {
    ($memory:ident, $dst:expr, $rhs:expr, $op:path) => {{
        let index = $dst.resolve($memory)?;
        let rhs: Word = $rhs;
        let cell = $memory.cell_mut(index)?;
        *cell = $op(&*cell, &rhs);
        let result = *cell;
        $memory.update_flags(result);
        Ok(())
    }};
}

impl Instruction {
    /// Declarations all run before any other instruction.
    pub fn is_declaration(&self) -> bool {
        matches!(self, Self::Define { .. })
    }

    pub fn execute(&self, memory: &mut Memory) -> RuntimeResult {
        match self {
            Self::Define { name, value } => {
                let slot = memory.allocate(name)?;
                memory.write(slot, *value)
            }
            Self::Move { dst, src } => {
                let value = src.value(memory)?;
                let index = dst.resolve(memory)?;
                memory.write(index, value)
            }
            Self::Add { dst, src } => {
                arithmetic!(memory, dst, src.value(memory)?, WrappingAdd::wrapping_add)
            }
            Self::Sub { dst, src } => {
                arithmetic!(memory, dst, src.value(memory)?, WrappingSub::wrapping_sub)
            }
            Self::Inc { dst } => arithmetic!(memory, dst, 1, WrappingAdd::wrapping_add),
            Self::Dec { dst } => arithmetic!(memory, dst, 1, WrappingSub::wrapping_sub),
            Self::Set { condition, dst } => {
                if condition.holds(memory) {
                    *dst.reference(memory)? = 1;
                }
                Ok(())
            }
        }
    }
}

impl Condition {
    pub fn holds(&self, memory: &Memory) -> bool {
        let flags = memory.flags();
        match self {
            Self::Always => true,
            Self::Sign => flags.sign,
            Self::Zero => flags.zero,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Always => "one",
            Self::Sign => "ones",
            Self::Zero => "onez",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Define { name, value } => write!(f, "data({:?}, num({}))", name.as_str(), value),
            Self::Move { dst, src } => write!(f, "mov({}, {})", dst, src),
            Self::Add { dst, src } => write!(f, "add({}, {})", dst, src),
            Self::Sub { dst, src } => write!(f, "sub({}, {})", dst, src),
            Self::Inc { dst } => write!(f, "inc({})", dst),
            Self::Dec { dst } => write!(f, "dec({})", dst),
            Self::Set { condition, dst } => write!(f, "{}({})", condition.mnemonic(), dst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Flags;

    fn cell(index: Word) -> Location {
        Location::new(Operand::Immediate(index))
    }

    #[test]
    fn only_define_is_a_declaration() {
        let define = Instruction::Define { name: Identifier::new("a").unwrap(), value: 1 };
        assert!(define.is_declaration());
        assert!(!Instruction::Inc { dst: cell(0) }.is_declaration());
        assert!(!Instruction::Set { condition: Condition::Always, dst: cell(0) }.is_declaration());
    }

    #[test]
    fn sub_sets_sign() {
        let mut memory = Memory::new(2);
        memory.write(0, 3).unwrap();
        Instruction::Sub { dst: cell(0), src: Operand::Immediate(5) }
            .execute(&mut memory)
            .unwrap();
        assert_eq!(memory.cells(), &[-2, 0]);
        assert_eq!(memory.flags(), Flags { zero: false, sign: true });
    }

    #[test]
    fn move_leaves_flags() {
        let mut memory = Memory::new(1);
        Instruction::Dec { dst: cell(0) }.execute(&mut memory).unwrap();
        Instruction::Move { dst: cell(0), src: Operand::Immediate(0) }
            .execute(&mut memory)
            .unwrap();
        assert_eq!(memory.flags(), Flags { zero: false, sign: true });
    }

    #[test]
    fn conditional_set() {
        let mut memory = Memory::new(3);
        Instruction::Inc { dst: cell(2) }.execute(&mut memory).unwrap();
        Instruction::Dec { dst: cell(2) }.execute(&mut memory).unwrap();
        for (condition, index) in [(Condition::Sign, 0), (Condition::Zero, 1)] {
            Instruction::Set { condition, dst: cell(index) }
                .execute(&mut memory)
                .unwrap();
        }
        assert_eq!(memory.cells(), &[0, 1, 0]);
    }

    #[test]
    fn wraps_on_overflow() {
        let mut memory = Memory::new(1);
        memory.write(0, Word::MAX).unwrap();
        Instruction::Inc { dst: cell(0) }.execute(&mut memory).unwrap();
        assert_eq!(memory.cells(), &[Word::MIN]);
        assert!(memory.flags().sign);
    }

    #[test]
    fn failed_write_has_no_effect() {
        let mut memory = Memory::new(2);
        let err = Instruction::Add { dst: cell(2), src: Operand::Immediate(1) }.execute(&mut memory);
        assert_eq!(err, Err(RuntimeError::OutOfRange { index: 2, capacity: 2 }));
        assert_eq!(memory.cells(), &[0, 0]);
        assert_eq!(memory.flags(), Flags::default());
    }

    #[test]
    fn move_reads_source_before_destination() {
        let mut memory = Memory::new(11);
        let ghost = Identifier::new("ghost").unwrap();
        let err = Instruction::Move {
            dst: cell(100),
            src: Operand::Indirect(Location::new(Operand::AddressOf(ghost.clone()))),
        }
        .execute(&mut memory);
        assert_eq!(err, Err(RuntimeError::UnknownIdentifier(ghost)));
    }

    #[test]
    fn add_resolves_destination_first() {
        let mut memory = Memory::new(11);
        let err = Instruction::Add {
            dst: cell(100),
            src: Operand::AddressOf(Identifier::new("ghost").unwrap()),
        }
        .execute(&mut memory);
        assert_eq!(err, Err(RuntimeError::OutOfRange { index: 100, capacity: 11 }));
    }

    #[test]
    fn display() {
        let set = Instruction::Set { condition: Condition::Zero, dst: cell(4) };
        assert_eq!(set.to_string(), "onez(mem(num(4)))");
        let define = Instruction::Define { name: Identifier::new("a").unwrap(), value: -1 };
        assert_eq!(define.to_string(), r#"data("a", num(-1))"#);
    }
}
