use crate::{error::program::*, Condition, Identifier, Instruction, Location, Operand, Word};
use std::{fmt, slice::Iter};

/// An ordered list of instructions, fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn iter(&self) -> Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn declarations(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.iter().filter(|i| i.is_declaration())
    }

    pub fn operations(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.iter().filter(|i| !i.is_declaration())
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'p> IntoIterator for &'p Program {
    type Item = &'p Instruction;
    type IntoIter = Iter<'p, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

/// Build a [Program] from instruction expressions, in order.
#[macro_export]
macro_rules! program {
    ($($instruction:expr),* $(,)?) => {
        $crate::Program::new(vec![$($instruction),*])
    };
}

// Constructors mirroring the assembler's call syntax. None of them touch memory;
// the ones taking a name fail early if it is not a valid identifier.

pub fn num(value: Word) -> Operand {
    Operand::Immediate(value)
}

pub fn lea(name: &str) -> ProgramResult<Operand> {
    Ok(Operand::AddressOf(Identifier::new(name)?))
}

pub fn mem(address: impl Into<Operand>) -> Location {
    Location::new(address.into())
}

pub fn data(name: &str, value: Word) -> ProgramResult<Instruction> {
    Ok(Instruction::Define {
        name: Identifier::new(name)?,
        value,
    })
}

pub fn mov(dst: Location, src: impl Into<Operand>) -> Instruction {
    Instruction::Move { dst, src: src.into() }
}

pub fn add(dst: Location, src: impl Into<Operand>) -> Instruction {
    Instruction::Add { dst, src: src.into() }
}

pub fn sub(dst: Location, src: impl Into<Operand>) -> Instruction {
    Instruction::Sub { dst, src: src.into() }
}

pub fn inc(dst: Location) -> Instruction {
    Instruction::Inc { dst }
}

pub fn dec(dst: Location) -> Instruction {
    Instruction::Dec { dst }
}

pub fn one(dst: Location) -> Instruction {
    Instruction::Set { condition: Condition::Always, dst }
}

pub fn ones(dst: Location) -> Instruction {
    Instruction::Set { condition: Condition::Sign, dst }
}

pub fn onez(dst: Location) -> Instruction {
    Instruction::Set { condition: Condition::Zero, dst }
}
