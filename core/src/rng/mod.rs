//! Deterministic random number generation
//!
//! Implements the MT19937 Mersenne Twister together with the distribution
//! layer built on its word stream, and checkpointing of complete generator
//! state. CRITICAL: all randomness in an embedding simulation MUST go
//! through [`RngManager`] so that a single seed reproduces the entire run.

mod manager;
mod mersenne;
mod snapshot;

pub use manager::RngManager;
pub use mersenne::DEFAULT_SEED;
pub use snapshot::RngSnapshot;

use thiserror::Error;

/// Errors reported by generator construction and the distribution layer.
///
/// Every failure is a precondition violation or an unavailable entropy
/// source, reported synchronously at the offending call. A failed
/// operation never leaves a generator half-mutated: preconditions are
/// validated before any state is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RngError {
    /// Array-based seeding requires at least one key word.
    #[error("seed key must contain at least one word")]
    EmptySeedKey,

    /// Ranged integer generation requires `min <= max`.
    #[error("invalid range: min {min} exceeds max {max}")]
    InvalidRange { min: i32, max: i32 },

    /// Byte filling must not request more bytes than the buffer holds.
    #[error("requested {requested} random bytes but buffer holds {capacity}")]
    BufferOverrun { requested: usize, capacity: usize },

    /// The OS entropy source could not produce a default seed.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// A checkpoint failed structural validation on restore.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
