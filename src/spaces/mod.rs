/// Space implementations.

pub mod space;

use std::fmt;

use crate::core::{Candidate, IntoCount, Result, SpaceError};
use crate::utils::rng::{self, RngStream, rng_from_entropy, rng_from_seed};

pub use space::Space;

/// A discrete space of integers in `[start, start + n)`.
///
/// `start` is an additive offset and `n` is the element count; `n == 0` is
/// a valid, empty, never-satisfiable domain. Each instance exclusively owns
/// a generator stream, so two instances built with equal parameters and the
/// same seed produce identical sample sequences.
#[derive(Clone)]
pub struct Discrete {
    n: usize,
    start: isize,
    rng: RngStream,
}

impl Discrete {
    /// Create the space `[0, n)`, seeded from process entropy.
    ///
    /// Fails when `n` is negative or not an integer kind.
    pub fn new(n: impl IntoCount) -> Result<Self> {
        let n = n.into_count()?;
        Ok(Self {
            n,
            start: 0,
            rng: rng_from_entropy(),
        })
    }

    /// Create the space `[start, start + n)`, seeded from process entropy.
    pub fn with_start(start: isize, n: impl IntoCount) -> Result<Self> {
        let n = n.into_count()?;
        Ok(Self {
            n,
            start,
            rng: rng_from_entropy(),
        })
    }

    /// Create the space `[start, end)`, seeded from process entropy.
    ///
    /// Fails when `end <= start`.
    pub fn from_range(start: isize, end: isize) -> Result<Self> {
        if end <= start {
            return Err(SpaceError::DegenerateBounds { start, upper: end });
        }
        // Exact for any start < end, including ranges wider than isize::MAX.
        let n = end.wrapping_sub(start) as usize;
        Ok(Self {
            n,
            start,
            rng: rng_from_entropy(),
        })
    }

    /// Replace the generator with a deterministic stream for `seed`.
    ///
    /// ```
    /// use spatial::{Discrete, Space};
    ///
    /// let mut a = Discrete::new(10)?.with_rng_seed(123);
    /// let mut b = Discrete::new(10)?.with_rng_seed(123);
    /// assert_eq!(a.sample(), b.sample());
    /// # Ok::<(), spatial::SpaceError>(())
    /// ```
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.seed(seed);
        self
    }

    /// Number of distinct values in the domain.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Offset added to every sampled or tested value.
    pub fn start(&self) -> isize {
        self.start
    }

    /// Whether the domain has no elements.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

impl Space for Discrete {
    type Element = isize;

    /// Panics when the domain is empty (`n == 0`).
    fn sample(&mut self) -> isize {
        let raw = rng::draw_one(&mut self.rng, self.n);
        // Exact: the sum lies in [start, start + n), always representable.
        self.start.wrapping_add(raw as isize)
    }

    /// Panics when the domain is empty (`n == 0`) and `count > 0`.
    fn sample_batch(&mut self, count: impl IntoCount) -> Result<Vec<isize>> {
        let count = count.into_count()?;
        let raw = rng::draw_many(&mut self.rng, self.n, count);
        Ok(raw
            .into_iter()
            .map(|v| self.start.wrapping_add(v as isize))
            .collect())
    }

    fn contains<'a>(&self, value: impl Into<Candidate<'a>>) -> bool {
        let v = match value.into() {
            Candidate::Int(v) => v,
            Candidate::Float(f) => {
                // Whole-number floats compare as their integer value;
                // everything else is outside any integer domain.
                if !f.is_finite() || f.trunc() != f {
                    return false;
                }
                if f < isize::MIN as f64 || f > isize::MAX as f64 {
                    return false;
                }
                f as isize
            }
            Candidate::Text(_) => return false,
        };
        // Widened so extreme start/value pairs cannot wrap into range.
        let shifted = v as i128 - self.start as i128;
        shifted >= 0 && (shifted as u128) < self.n as u128
    }

    fn seed(&mut self, seed: u64) {
        self.rng = rng_from_seed(seed);
    }
}

impl fmt::Debug for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == 0 {
            write!(f, "Discrete({})", self.n)
        } else {
            write!(f, "Discrete(start={}, n={})", self.start, self.n)
        }
    }
}

impl fmt::Display for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
