// Common trait for sampling spaces.

use crate::core::{Candidate, IntoCount, Result};

/// A trait implemented by all spaces.
///
/// `Element` is the value type that lives in the space (e.g. `isize` for
/// `Discrete`). Conformance is structural: implementing these operations is
/// the whole contract, there is no shared base behavior.
pub trait Space {
    type Element;

    /// Draw one value according to the space's distribution.
    ///
    /// Takes `&mut self` because every space owns its generator stream and
    /// each draw advances it.
    fn sample(&mut self) -> Self::Element;

    /// Draw `count` independent values, returned in draw order.
    ///
    /// `count` must convert to a non-negative integer; a batch that fails
    /// validation consumes no generator state.
    fn sample_batch(&mut self, count: impl IntoCount) -> Result<Vec<Self::Element>>;

    /// Decide whether `value` belongs to the space.
    ///
    /// Total over candidate kinds: values the space cannot compare against
    /// its elements are reported as absent, never as errors.
    fn contains<'a>(&self, value: impl Into<Candidate<'a>>) -> bool;

    /// Reseed the generator stream in place. The future sample sequence
    /// becomes the one a fresh instance built with `seed` would produce.
    fn seed(&mut self, seed: u64);
}
