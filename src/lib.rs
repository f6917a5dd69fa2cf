mod config;
pub mod error;
mod identifier;
mod instruction;
mod memory;
pub mod program;
mod runtime;
mod value;

#[cfg(test)]
mod property_tests;

pub use config::MachineConfig;
pub use error::{
    config::{ConfigError, ConfigResult},
    program::{IdentifierError, ProgramError, ProgramResult},
    runtime::{RuntimeError, RuntimeResult},
    FlatError,
};
pub use identifier::{Identifier, MAX_LEN as MAX_IDENTIFIER_LEN};
pub use instruction::{Condition, Instruction};
pub use memory::{Flags, Memory, Word};
pub use program::Program;
pub use runtime::{Machine, Phase};
pub use value::{Location, Operand};

/// Boot `program` on a new machine of `capacity` words and return its dump.
pub fn run(capacity: usize, program: &Program) -> Result<String, error::Error> {
    let mut machine = Machine::new(capacity)?;
    machine.boot(program)?;
    Ok(machine.dump())
}
