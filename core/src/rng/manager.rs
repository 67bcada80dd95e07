//! Distribution layer over the Mersenne Twister word stream
//!
//! [`RngManager`] maps raw 32-bit words onto integers in arbitrary ranges,
//! floats in the canonical unit intervals, 53-bit doubles, coin flips, byte
//! buffers, and Gaussian deviates. Each method documents its output range
//! and any known bias.
//!
//! # Determinism
//!
//! Same seed → same sequence for every method here, `next_bool` included.
//! CRITICAL: all randomness consumed by an embedding simulation must go
//! through this type so a single logged seed reproduces the entire run.

use super::mersenne::{MersenneState, DEFAULT_SEED};
use super::RngError;

/// Deterministic random number generator: an MT19937 state machine plus
/// the derived-distribution methods built on its word stream.
///
/// A generator is single-threaded by design. Callers needing parallel
/// streams should hand one generator to each task (clones advance
/// independently) or synchronize access externally.
///
/// # Example
/// ```
/// use deterministic_rng_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let word = rng.next_u32();
/// let roll = rng.int_in_range(1, 6).unwrap();
/// assert!(roll >= 1 && roll <= 6);
/// ```
#[derive(Debug, Clone)]
pub struct RngManager {
    /// The 624-word generator state, held inline by value.
    state: MersenneState,
    /// Pending second Box-Muller sample. At most one is held; it is
    /// consumed (and cleared) before a new pair is generated, and any
    /// reseed discards it since it was derived from pre-reseed state.
    cached_gaussian: Option<f32>,
}

impl RngManager {
    /// Create a generator from an explicit seed.
    ///
    /// The generator is fully initialized on return; the same seed always
    /// reproduces the same sequence.
    ///
    /// # Example
    /// ```
    /// use deterministic_rng_core_rs::RngManager;
    ///
    /// let mut a = RngManager::new(42);
    /// let mut b = RngManager::new(42);
    /// assert_eq!(a.next_u32(), b.next_u32());
    /// ```
    pub fn new(seed: u32) -> Self {
        Self {
            state: MersenneState::new(seed),
            cached_gaussian: None,
        }
    }

    /// Create a generator seeded from the OS entropy source.
    ///
    /// Reads exactly one `u32` of entropy to pick the seed; steady-state
    /// generation never touches the entropy source again. The seed remains
    /// readable through [`initial_seed`](Self::initial_seed) so a run can
    /// still be replayed.
    ///
    /// # Returns
    /// - `Ok(RngManager)` - seeded from OS entropy
    /// - `Err(RngError::EntropyUnavailable)` - the entropy source failed
    ///
    /// # Example
    /// ```
    /// use deterministic_rng_core_rs::RngManager;
    ///
    /// match RngManager::from_entropy() {
    ///     Ok(mut rng) => {
    ///         let _ = rng.next_u32();
    ///     }
    ///     Err(e) => eprintln!("entropy unavailable: {}", e),
    /// }
    /// ```
    pub fn from_entropy() -> Result<Self, RngError> {
        let mut raw = [0u8; 4];
        getrandom::getrandom(&mut raw)
            .map_err(|e| RngError::EntropyUnavailable(e.to_string()))?;
        Ok(Self::new(u32::from_le_bytes(raw)))
    }

    /// Create a generator from a key array, for callers holding more than
    /// 32 bits of seed material.
    ///
    /// # Returns
    /// - `Ok(RngManager)` - seeded from the key
    /// - `Err(RngError::EmptySeedKey)` - the key was empty
    ///
    /// # Example
    /// ```
    /// use deterministic_rng_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::from_key(&[0x123, 0x234, 0x345, 0x456]).unwrap();
    /// let _ = rng.next_u32();
    /// ```
    pub fn from_key(key: &[u32]) -> Result<Self, RngError> {
        Ok(Self {
            state: MersenneState::from_key(key)?,
            cached_gaussian: None,
        })
    }

    /// Re-initialize this generator from a scalar seed.
    ///
    /// Also discards any cached Gaussian sample: it was derived from the
    /// pre-reseed state and must not leak into the new stream.
    pub fn reseed(&mut self, seed: u32) {
        self.state.reseed(seed);
        self.cached_gaussian = None;
    }

    /// Re-initialize this generator from a key array.
    ///
    /// On error the generator is left exactly as it was, cached Gaussian
    /// sample included.
    pub fn reseed_with_key(&mut self, key: &[u32]) -> Result<(), RngError> {
        self.state.reseed_with_key(key)?;
        self.cached_gaussian = None;
        Ok(())
    }

    /// The scalar seed this generator was constructed or last reseeded
    /// with. Retained for diagnostics and run reproducibility; after
    /// key-array seeding this reports the fixed baseline seed.
    pub fn initial_seed(&self) -> u32 {
        self.state.seed()
    }

    // ========================================================================
    // Uniform integers
    // ========================================================================

    /// Next raw tempered word, uniform over the full 32-bit range.
    ///
    /// # Example
    /// ```
    /// use deterministic_rng_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let a = rng.next_u32();
    /// let b = rng.next_u32();
    /// assert_ne!((a, b), (0, 0));
    /// ```
    pub fn next_u32(&mut self) -> u32 {
        self.state.next_word()
    }

    /// Non-negative integer, uniform over `[0, 2^31 - 1]`.
    pub fn next_i32(&mut self) -> i32 {
        (self.next_u32() >> 1) as i32
    }

    /// Integer uniform over `[min, max]`, both ends inclusive.
    ///
    /// Computed as `min + next_i32() mod (max - min + 1)`. Known bias: the
    /// modulo reduction slightly favors low values whenever the span does
    /// not evenly divide `2^31`. Accepted limitation, kept for sequence
    /// compatibility rather than silently fixed.
    ///
    /// # Returns
    /// - `Ok(value)` - a value in `[min, max]`
    /// - `Err(RngError::InvalidRange)` - `max` was below `min`
    ///
    /// # Example
    /// ```
    /// use deterministic_rng_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let v = rng.int_in_range(-5, 5).unwrap();
    /// assert!(v >= -5 && v <= 5);
    /// ```
    pub fn int_in_range(&mut self, min: i32, max: i32) -> Result<i32, RngError> {
        if max < min {
            return Err(RngError::InvalidRange { min, max });
        }

        // Span can reach 2^32, so the arithmetic runs in i64.
        let span = (max as i64 - min as i64) + 1;
        Ok((min as i64 + (self.next_i32() as i64 % span)) as i32)
    }

    /// Integer uniform over `[0, max]`. Shorthand for
    /// `int_in_range(0, max)`, same bias characteristics.
    pub fn int_up_to(&mut self, max: i32) -> Result<i32, RngError> {
        self.int_in_range(0, max)
    }

    // ========================================================================
    // Uniform floats
    // ========================================================================

    /// Float on the closed interval `[0, 1]`: `next_u32() / (2^32 - 1)`.
    ///
    /// An f32 carries 24 mantissa bits, so adjacent raw words can map to
    /// the same float.
    pub fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 * (1.0 / 4_294_967_295.0)
    }

    /// Float on the half-open interval `[0, 1)`: `next_u32() / 2^32`.
    pub fn next_f32_half_open(&mut self) -> f32 {
        self.next_u32() as f32 * (1.0 / 4_294_967_296.0)
    }

    /// Float on the open interval `(0, 1)`: `(next_u32() + 0.5) / 2^32`.
    pub fn next_f32_open(&mut self) -> f32 {
        (self.next_u32() as f32 + 0.5) * (1.0 / 4_294_967_296.0)
    }

    /// Double in `[0, 1)` with 53-bit resolution, built from two draws.
    ///
    /// The first word contributes its top 27 bits, the second its top 26:
    /// `(a * 2^26 + b) / 2^53`. Two 32-bit words per value, so consecutive
    /// doubles consume the stream twice as fast as the f32 methods.
    ///
    /// # Example
    /// ```
    /// use deterministic_rng_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let v = rng.next_f64();
    /// assert!(v >= 0.0 && v < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let a = (self.next_u32() >> 5) as f64;
        let b = (self.next_u32() >> 6) as f64;
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }

    // ========================================================================
    // Booleans and bytes
    // ========================================================================

    /// Uniform coin flip: the lowest bit of the next word.
    ///
    /// Drawn from this generator's own stream, so coin flips replay with
    /// the rest of the sequence.
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }

    /// Fill the first `count` bytes of `buf` with random bytes.
    ///
    /// Whole words are split low byte first (little-endian); a trailing
    /// 1-3 byte tail takes only the low bytes of one extra draw. A `count`
    /// that is a multiple of four therefore consumes exactly `count / 4`
    /// words.
    ///
    /// # Returns
    /// - `Ok(())` - bytes written
    /// - `Err(RngError::BufferOverrun)` - `count` exceeds `buf.len()`;
    ///   checked before any draw, the buffer and generator are untouched
    ///
    /// # Example
    /// ```
    /// use deterministic_rng_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let mut buf = [0u8; 16];
    /// rng.fill_bytes(&mut buf, 7).unwrap();
    /// ```
    pub fn fill_bytes(&mut self, buf: &mut [u8], count: usize) -> Result<(), RngError> {
        if count > buf.len() {
            return Err(RngError::BufferOverrun {
                requested: count,
                capacity: buf.len(),
            });
        }

        let mut chunks = buf[..count].chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }

        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let extra = self.next_u32().to_le_bytes();
            tail.copy_from_slice(&extra[..tail.len()]);
        }

        Ok(())
    }

    // ========================================================================
    // Gaussian deviates
    // ========================================================================

    /// Standard normal deviate (mean 0, standard deviation 1).
    ///
    /// Polar Box-Muller: rejection-samples a point strictly inside the
    /// unit disk (origin excluded), which yields two independent deviates
    /// per accepted pair. The first is returned, the second cached; the
    /// next call consumes the cached sample without touching the word
    /// stream.
    ///
    /// # Example
    /// ```
    /// use deterministic_rng_core_rs::RngManager;
    ///
    /// let mut a = RngManager::new(42);
    /// let mut b = RngManager::new(42);
    /// assert_eq!(a.next_gaussian(), b.next_gaussian());
    /// ```
    pub fn next_gaussian(&mut self) -> f32 {
        if let Some(cached) = self.cached_gaussian.take() {
            return cached;
        }

        let (v1, v2, s) = loop {
            let v1 = 2.0 * self.next_f32() - 1.0;
            let v2 = 2.0 * self.next_f32() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s > 0.0 && s < 1.0 {
                break (v1, v2, s);
            }
        };

        let multiplier = (-2.0 * s.ln() / s).sqrt();
        self.cached_gaussian = Some(v2 * multiplier);
        v1 * multiplier
    }

    /// Normal deviate with the given standard deviation and mean.
    pub fn next_gaussian_with(&mut self, std_dev: f32, mean: f32) -> f32 {
        self.next_gaussian() * std_dev + mean
    }

    /// Normal deviate with the given standard deviation and mean, clamped
    /// into `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max` (the clamp contract).
    pub fn next_gaussian_clamped(&mut self, std_dev: f32, mean: f32, min: f32, max: f32) -> f32 {
        (self.next_gaussian() * std_dev + mean).clamp(min, max)
    }

    // ========================================================================
    // Checkpoint plumbing
    // ========================================================================

    pub(super) fn state(&self) -> &MersenneState {
        &self.state
    }

    pub(super) fn cached_gaussian(&self) -> Option<f32> {
        self.cached_gaussian
    }

    pub(super) fn from_parts(state: MersenneState, cached_gaussian: Option<f32>) -> Self {
        Self {
            state,
            cached_gaussian,
        }
    }
}

/// Seeds with the reference algorithm's default, 5489.
impl Default for RngManager {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
