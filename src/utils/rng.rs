//! Seeded generator plumbing.
//!
//! Every space owns one generator stream; this module defines the stream
//! type and the uniform draw primitives spaces delegate to:
//! - `rng_from_seed` / `rng_from_entropy`: construct a stream
//! - `draw_one` / `draw_many`: uniform draws over `[0, bound)`

use rand::Rng;
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand_chacha::ChaCha8Rng;

/// Type alias for the reproducible RNG stream used across the crate.
pub type RngStream = ChaCha8Rng;

/// Create a deterministic stream: the same seed yields the same output
/// sequence, on every platform.
pub fn rng_from_seed(seed: u64) -> RngStream {
    RngStream::seed_from_u64(seed)
}

/// Create a stream from process entropy. Two such streams are not
/// reproducible with respect to each other.
pub fn rng_from_entropy() -> RngStream {
    RngStream::from_entropy()
}

/// Draw one integer uniformly from `[0, bound)`, advancing the stream.
///
/// A single-value range needs no randomness and consumes no stream state.
/// Panics when `bound == 0`.
pub fn draw_one<R: Rng + ?Sized>(rng: &mut R, bound: usize) -> usize {
    assert!(bound > 0, "cannot draw from an empty range");
    if bound == 1 {
        return 0;
    }
    let dist = Uniform::from(0..bound);
    dist.sample(rng)
}

/// Draw `count` integers uniformly from `[0, bound)`, in draw order,
/// advancing the stream once per value.
///
/// A zero count returns an empty vector without touching the stream.
/// Panics when `bound == 0` and `count > 0`.
pub fn draw_many<R: Rng + ?Sized>(rng: &mut R, bound: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    assert!(bound > 0, "cannot draw from an empty range");
    if bound == 1 {
        return vec![0; count];
    }
    let dist = Uniform::from(0..bound);
    dist.sample_iter(&mut *rng).take(count).collect()
}
