use crate::error::config::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    capacity: usize,
}

impl MachineConfig {
    pub fn new(capacity: usize) -> ConfigResult<Self> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self { capacity })
    }

    /// Number of words in the machine's memory.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
