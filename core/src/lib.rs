//! Deterministic RNG Core - Rust Engine
//!
//! Simulation-grade pseudo-random number generation with deterministic
//! execution: the MT19937 Mersenne Twister plus the distribution layer
//! built on its word stream.
//!
//! # Architecture
//!
//! - **rng**: generator state machine (seeding, twist, temper), the
//!   distribution layer (ranged integers, unit-interval floats, 53-bit
//!   doubles, coin flips, byte filling, Gaussian deviates), and
//!   checkpoint/restore of complete generator state
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same sequence, bit-for-bit, on every platform
//! 2. A cloned or restored generator advances independently of its source
//! 3. Failed operations never leave a generator half-mutated
//! 4. Not cryptographically secure: 624 consecutive outputs recover the
//!    full state, so never use this for security-sensitive randomness

pub mod rng;

// Re-exports for convenience
pub use rng::{RngError, RngManager, RngSnapshot, DEFAULT_SEED};
