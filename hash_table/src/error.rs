use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Capacity must be positive, got {0}")]
    InvalidCapacity(usize),
    #[error("Table is full ({capacity} slots occupied)")]
    CapacityExceeded { capacity: usize },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PersonError {
    #[error("Last name of {first_name:?} is empty, it has no initial to hash")]
    EmptyLastName { first_name: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidCapacity { var: &'static str, value: String },
}
