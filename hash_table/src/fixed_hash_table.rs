use std::collections::hash_map::DefaultHasher;
use std::fmt::Display;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::io::{self, Write};
use std::mem;

use log::{debug, trace, warn};

use crate::error::TableError;

const EMPTY_SLOT: &str = "<empty>";

enum Slot<K, V> {
    Empty,
    Occupied(K, V),
    Deleted,
}

impl<K, V> Slot<K, V> {
    fn value(&self) -> Option<&V> {
        match self {
            Slot::Occupied(_, value) => Some(value),
            Slot::Empty | Slot::Deleted => None,
        }
    }

    fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Slot::Occupied(_, value) => Some(value),
            Slot::Empty | Slot::Deleted => None,
        }
    }

    /// Turns an occupied slot into a deleted one and hands back its value.
    /// Any other slot is left as it is.
    fn vacate(&mut self) -> Option<V> {
        match mem::replace(self, Slot::Deleted) {
            Slot::Occupied(_, value) => Some(value),
            Slot::Empty => {
                *self = Slot::Empty;
                None
            }
            Slot::Deleted => None,
        }
    }
}

/// Open-address hash table whose capacity is fixed at construction.
///
/// Collisions are resolved by linear probing. A removed entry leaves a
/// `Deleted` slot behind: lookups walk past it, insertions may reuse it.
/// The table never grows, and deleted slots are never turned back into
/// probe-stoppers, so heavy churn makes lookups walk further.
pub struct FixedHashTable<K, V, S = BuildHasherDefault<DefaultHasher>> {
    table: Vec<Slot<K, V>>,
    hash_builder: S,
    count: usize,
}

impl<K: Eq + Hash, V> FixedHashTable<K, V> {
    pub fn new(size: usize) -> Result<Self, TableError> {
        Self::with_hasher(size, BuildHasherDefault::default())
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> FixedHashTable<K, V, S> {
    /// Creates an empty table of `size` slots that hashes keys with `hash_builder`.
    ///
    /// Fails with [`TableError::InvalidCapacity`] when `size` is zero.
    pub fn with_hasher(size: usize, hash_builder: S) -> Result<Self, TableError> {
        if size == 0 {
            return Err(TableError::InvalidCapacity(size));
        }

        let mut table = Vec::with_capacity(size);
        for _ in 0..size {
            table.push(Slot::Empty)
        }
        Ok(Self {
            table,
            hash_builder,
            count: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    fn hash(&self, key: &K) -> usize {
        (self.hash_builder.hash_one(key) % self.capacity() as u64) as usize
    }

    fn next_index(&self, index: usize) -> usize {
        if index + 1 == self.capacity() {
            0
        } else {
            index + 1
        }
    }

    /// Index of the slot holding `key`, if any.
    ///
    /// The walk stops at the first never-used slot or after visiting every slot.
    fn probe(&self, key: &K) -> Option<usize> {
        let mut index = self.hash(key);
        for _ in 0..self.capacity() {
            match &self.table[index] {
                Slot::Occupied(existing_key, _) if existing_key == key => return Some(index),
                Slot::Empty => return None,
                _ => {
                    trace!("probe skipped slot {}", index);
                    index = self.next_index(index);
                }
            }
        }

        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.probe(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.table[self.probe(key)?].value()
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.probe(key)?;
        self.table[index].value_mut()
    }

    /// Associates `value` with `key`.
    ///
    /// Returns the replaced value when `key` was already present; this succeeds
    /// even on a full table. A new key is written to the first free or deleted
    /// slot on its probe sequence. A new key on a full table is rejected with
    /// [`TableError::CapacityExceeded`] and the table is left as it was.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        if let Some(index) = self.probe(&key) {
            if let Some(existing) = self.table[index].value_mut() {
                debug!("replaced value in slot {}", index);
                return Ok(Some(mem::replace(existing, value)));
            }
        }

        if self.count >= self.capacity() {
            warn!("rejected insert, all {} slots occupied", self.capacity());
            return Err(TableError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        // count < capacity, so a non-occupied slot exists on the sequence
        let mut index = self.hash(&key);
        while matches!(self.table[index], Slot::Occupied(..)) {
            trace!("slot {} taken, probing on", index);
            index = self.next_index(index);
        }

        self.table[index] = Slot::Occupied(key, value);
        self.count += 1;
        debug!("inserted into slot {} ({}/{})", index, self.count, self.capacity());
        Ok(None)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.probe(key)?;
        let value = self.table[index].vacate()?;
        self.count -= 1;
        debug!("vacated slot {}", index);
        Some(value)
    }
}

impl<K: Display, V: Display, S> FixedHashTable<K, V, S> {
    /// Writes every slot in array order as `| key : value | ...`, with
    /// `<empty>` standing in for both halves of an unoccupied slot, then
    /// flushes `out`.
    pub fn print_contents<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"| ")?;
        for slot in &self.table {
            match slot {
                Slot::Occupied(key, value) => write!(out, "{} : {} | ", key, value)?,
                Slot::Empty | Slot::Deleted => write!(out, "{0} : {0} | ", EMPTY_SLOT)?,
            }
        }
        out.flush()
    }
}
