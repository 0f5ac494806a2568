use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;

use hash_table::config::DriverConfig;
use hash_table::logger::initialize_logger;
use hash_table::{FixedHashTable, IdentityState, Person};

const GRADES: [(&str, &str, &str); 5] = [
    ("Christian", "Yelich", "B"),
    ("Hernan", "Perez", "A-"),
    ("Lorenzo", "Cain", "C-"),
    ("Mike", "Moustakas", "B+"),
    ("Ryan", "Braun", "A+"),
];

fn main() -> Result<()> {
    initialize_logger();

    let config = DriverConfig::from_env()?;
    info!("building gradebook with {} slots", config.capacity);

    let mut gradebook = FixedHashTable::with_hasher(config.capacity, IdentityState)?;
    for (first_name, last_name, grade) in GRADES {
        let person = Person::new(first_name, last_name)?;
        gradebook
            .put(person, grade)
            .with_context(|| format!("adding {} {}", first_name, last_name))?;
    }

    let mut stdout = io::stdout().lock();
    gradebook
        .print_contents(&mut stdout)
        .context("printing gradebook")?;
    writeln!(stdout)?;

    Ok(())
}
