use std::hash::{BuildHasher, Hasher};

/// Hasher that hands back the integer a key writes instead of mixing it.
///
/// A key whose `Hash` impl writes a single integer hashes to that integer, so
/// the table's start slot is exactly `hash(key) mod capacity`. Further writes,
/// integer or byte, are folded in with a multiply-add.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasher(u64);

impl IdentityHasher {
    fn fold(&mut self, word: u64) {
        self.0 = self.0.wrapping_mul(31).wrapping_add(word);
    }
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.fold(u64::from(byte));
        }
    }

    fn write_u32(&mut self, i: u32) {
        self.fold(u64::from(i));
    }

    fn write_u64(&mut self, i: u64) {
        self.fold(i);
    }

    fn write_usize(&mut self, i: usize) {
        self.fold(i as u64);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityState;

impl BuildHasher for IdentityState {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> IdentityHasher {
        IdentityHasher::default()
    }
}
