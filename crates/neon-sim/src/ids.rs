//! Pluggable identifier sources.
//!
//! Managers and the scheduler never mint ids themselves; they draw from an
//! `IdSource` so tests can swap in a reproducible sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use neon_core::enums::IdMode;
use neon_core::types::EntityId;

/// Produces entity identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> EntityId;
}

/// Monotonic counter starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Random 64-bit ids from a ChaCha stream.
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: ChaCha8Rng,
}

impl RandomIds {
    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self) -> EntityId {
        EntityId(self.rng.gen())
    }
}

/// Build the id source selected by configuration. `stream` separates the
/// random streams of different consumers sharing one seed.
pub fn from_mode(mode: IdMode, seed: u64, stream: u64) -> Box<dyn IdSource> {
    match mode {
        IdMode::Sequential => Box::new(SequentialIds::new()),
        IdMode::Random => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(stream);
            Box::new(RandomIds { rng })
        }
    }
}
