use crate::constants::{FIXED_CONTENT_BYTE, POOL_SEED, SELECTION_SEED, SELECTION_STREAM};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies the payload bytes for each logical message.
pub trait ContentSource: Send {
    fn next_payload(&mut self) -> &[u8];
}

/// Repeats one run of [`FIXED_CONTENT_BYTE`] for every message.
#[derive(Debug, Clone)]
pub struct FixedContent {
    payload: Vec<u8>,
}

impl FixedContent {
    pub fn new(unit_size: usize) -> Self {
        Self {
            payload: vec![FIXED_CONTENT_BYTE; unit_size],
        }
    }
}

impl ContentSource for FixedContent {
    #[inline]
    fn next_payload(&mut self) -> &[u8] {
        &self.payload
    }
}

/// A precomputed pool of random byte strings, sampled with replacement.
///
/// Pool generation and per-message selection run on two independent seeded
/// sequences. Building a new pool reseeds both, so every run that uses the
/// same `unit_size` and `pool_size` produces the same payload sequence.
#[derive(Debug, Clone)]
pub struct RandomMessagePool {
    pool: Vec<Vec<u8>>,
    selection_rng: ChaCha8Rng,
}

impl RandomMessagePool {
    pub fn new(unit_size: usize, pool_size: usize) -> Self {
        let mut pool_rng = ChaCha8Rng::seed_from_u64(POOL_SEED);

        let pool = (0..pool_size.max(1))
            .map(|_| {
                let mut message = vec![0u8; unit_size];
                pool_rng.fill_bytes(&mut message);
                message
            })
            .collect();

        let mut selection_rng = ChaCha8Rng::seed_from_u64(SELECTION_SEED);
        selection_rng.set_stream(SELECTION_STREAM);

        Self {
            pool,
            selection_rng,
        }
    }

    /// The pool entries, in generation order.
    pub fn messages(&self) -> &[Vec<u8>] {
        &self.pool
    }
}

impl ContentSource for RandomMessagePool {
    #[inline]
    fn next_payload(&mut self) -> &[u8] {
        let index = self.selection_rng.random_range(0..self.pool.len());
        &self.pool[index]
    }
}
