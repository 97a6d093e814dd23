//! Option identifier sources
//!
//! Ids only need to be unique within a round; `UniqueIds` makes them unique
//! for the process so presentation can reconcile options across rounds.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Process-wide counter shared by every `UniqueIds`
static OPTION_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

const SUFFIX_LEN: usize = 5;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hands out option identifiers
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Monotonic process-wide counter plus a random base-36 suffix (`opt_12_k3f9a`)
#[derive(Debug, Clone)]
pub struct UniqueIds {
    rng: Pcg32,
}

impl UniqueIds {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Default for UniqueIds {
    fn default() -> Self {
        Self::new(rand::random())
    }
}

impl IdSource for UniqueIds {
    fn next_id(&mut self) -> String {
        let n = OPTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[self.rng.random_range(0..BASE36.len())] as char)
            .collect();
        format!("opt_{}_{}", n, suffix)
    }
}

/// Deterministic per-instance ids (`opt_1`, `opt_2`, ...), for tests and replays
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("opt_{}", self.next)
    }
}

impl<T: IdSource + ?Sized> IdSource for &mut T {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}
