//! Per-name exclusivity
//!
//! A fixed table of mutexes indexed by a hash of the name. Commands on the
//! same name always land on the same stripe and therefore serialize; commands
//! on different names usually proceed in parallel. Two names sharing a stripe
//! only costs throughput, never correctness.

use parking_lot::{Mutex, MutexGuard};
use shared_types::sha256;

pub struct NameLocks {
    stripes: Vec<Mutex<()>>,
}

impl NameLocks {
    /// `stripes` is clamped to at least one.
    pub fn new(stripes: usize) -> Self {
        Self {
            stripes: (0..stripes.max(1)).map(|_| Mutex::new(())).collect(),
        }
    }

    pub fn stripe_count(&self) -> usize {
        self.stripes.len()
    }

    pub fn stripe_of(&self, name: &str) -> usize {
        let digest = sha256(name.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        (u64::from_be_bytes(prefix) % self.stripes.len() as u64) as usize
    }

    /// Hold the returned guard for the whole transition.
    pub fn lock(&self, name: &str) -> MutexGuard<'_, ()> {
        self.stripes[self.stripe_of(name)].lock()
    }
}
