use std::env;

use crate::error::ConfigError;

pub const CAPACITY_VAR: &str = "HASH_TABLE_CAPACITY";
const DEFAULT_CAPACITY: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub capacity: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl DriverConfig {
    /// Defaults, with the capacity overridden by `HASH_TABLE_CAPACITY` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_capacity_var(env::var(CAPACITY_VAR).ok())
    }

    fn from_capacity_var(value: Option<String>) -> Result<Self, ConfigError> {
        let Some(value) = value else {
            return Ok(Self::default());
        };

        match value.trim().parse::<usize>() {
            Ok(capacity) if capacity > 0 => Ok(Self { capacity }),
            _ => Err(ConfigError::InvalidCapacity {
                var: CAPACITY_VAR,
                value,
            }),
        }
    }
}
