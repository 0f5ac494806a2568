use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::PersonError;

/// A first and last name, used as the gradebook key.
///
/// Two people are equal when both names match. The hash is deliberately weak:
/// it is only the first UTF-16 code unit of the last name, so everyone
/// sharing a last initial collides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, PersonError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if last_name.is_empty() {
            return Err(PersonError::EmptyLastName { first_name });
        }
        Ok(Self {
            first_name,
            last_name,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    fn initial(&self) -> u32 {
        // last_name is non-empty, checked in new
        self.last_name.encode_utf16().next().map_or(0, u32::from)
    }
}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.initial());
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
