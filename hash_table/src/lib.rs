pub mod config;
pub mod error;
pub mod fixed_hash_table;
pub mod identity_hasher;
pub mod logger;
pub mod person;

pub use error::{ConfigError, PersonError, TableError};
pub use fixed_hash_table::FixedHashTable;
pub use identity_hasher::IdentityState;
pub use person::Person;
