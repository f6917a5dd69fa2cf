/*
    # Machine
    A program runs in two linear passes over the same instruction list. The first
    pass executes only declarations, the second everything else, each in program
    order. The first failure aborts the run; cells written before it keep their
    values and stay visible in the dump.
*/

use crate::{
    error::{config::ConfigResult, runtime::*},
    Instruction, MachineConfig, Memory, Program,
};
use std::fmt;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Declaration,
    Operation,
}

impl Phase {
    pub fn admits(&self, instruction: &Instruction) -> bool {
        match self {
            Self::Declaration => instruction.is_declaration(),
            Self::Operation => !instruction.is_declaration(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration => f.write_str("declaration"),
            Self::Operation => f.write_str("operation"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Machine {
    config: MachineConfig,
    memory: Memory,
}

impl Machine {
    pub fn new(capacity: usize) -> ConfigResult<Self> {
        Ok(Self::with_config(MachineConfig::new(capacity)?))
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            memory: Memory::new(config.capacity()),
            config,
        }
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Run `program` on freshly zeroed memory.
    pub fn boot(&mut self, program: &Program) -> RuntimeResult {
        self.memory.setup(self.config.capacity());
        for phase in [Phase::Declaration, Phase::Operation] {
            self.run_phase(phase, program)?;
        }
        info!(
            instructions = program.len(),
            declared = self.memory.next_slot(),
            "program finished"
        );
        Ok(())
    }

    fn run_phase(&mut self, phase: Phase, program: &Program) -> RuntimeResult {
        info!(%phase, "phase started");
        for (position, instruction) in program.iter().enumerate() {
            if !phase.admits(instruction) {
                continue;
            }
            debug!(%phase, position, %instruction, "execute");
            if let Err(e) = instruction.execute(&mut self.memory) {
                error!(%phase, position, %instruction, error = %e, "run aborted");
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn memory_dump(&self, out: &mut impl fmt::Write) -> fmt::Result {
        write!(out, "{}", self.memory)
    }

    pub fn dump(&self) -> String {
        self.memory.to_string()
    }
}
