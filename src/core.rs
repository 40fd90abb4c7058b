// Core argument and error types shared by all spaces.

/// Recoverable errors from space construction and sampling APIs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A count/size argument was negative.
    #[error("cannot interpret negative value as a count: {0}")]
    NegativeCount(i64),
    /// A range-form constructor received an empty or inverted range.
    #[error("upper bound {upper} must be greater than start {start}")]
    DegenerateBounds { start: isize, upper: isize },
    /// An argument of the named kind was supplied where an integer count
    /// is required.
    #[error("a {0} value cannot be interpreted as an integer")]
    NotAnInteger(&'static str),
}

/// Convenience alias for results using SpaceError.
pub type Result<T> = std::result::Result<T, SpaceError>;

/// A loosely-typed candidate for membership tests.
///
/// Membership is total over candidates: a space reports values it cannot
/// compare against its elements as absent rather than failing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Candidate<'a> {
    Int(isize),
    Float(f64),
    Text(&'a str),
}

impl From<isize> for Candidate<'_> {
    fn from(v: isize) -> Self {
        Candidate::Int(v)
    }
}
impl From<i32> for Candidate<'_> {
    fn from(v: i32) -> Self {
        Candidate::Int(v as isize)
    }
}
impl From<f64> for Candidate<'_> {
    fn from(v: f64) -> Self {
        Candidate::Float(v)
    }
}
impl From<f32> for Candidate<'_> {
    fn from(v: f32) -> Self {
        Candidate::Float(v as f64)
    }
}
impl<'a> From<&'a str> for Candidate<'a> {
    fn from(v: &'a str) -> Self {
        Candidate::Text(v)
    }
}

/// Conversion for count/size arguments (domain sizes, batch lengths).
///
/// Counts arrive as whatever type the caller has on hand; only non-negative
/// integers are accepted. Floats and text are never counts, so their
/// conversions fail unconditionally.
pub trait IntoCount {
    fn into_count(self) -> Result<usize>;
}

impl IntoCount for usize {
    fn into_count(self) -> Result<usize> {
        Ok(self)
    }
}

impl IntoCount for u32 {
    fn into_count(self) -> Result<usize> {
        Ok(self as usize)
    }
}

impl IntoCount for isize {
    fn into_count(self) -> Result<usize> {
        if self < 0 {
            return Err(SpaceError::NegativeCount(self as i64));
        }
        Ok(self as usize)
    }
}

impl IntoCount for i32 {
    fn into_count(self) -> Result<usize> {
        (self as isize).into_count()
    }
}

impl IntoCount for i64 {
    fn into_count(self) -> Result<usize> {
        if self < 0 {
            return Err(SpaceError::NegativeCount(self));
        }
        Ok(self as usize)
    }
}

impl IntoCount for f64 {
    fn into_count(self) -> Result<usize> {
        Err(SpaceError::NotAnInteger("float"))
    }
}

impl IntoCount for f32 {
    fn into_count(self) -> Result<usize> {
        Err(SpaceError::NotAnInteger("float"))
    }
}

impl IntoCount for &str {
    fn into_count(self) -> Result<usize> {
        Err(SpaceError::NotAnInteger("string"))
    }
}

impl IntoCount for String {
    fn into_count(self) -> Result<usize> {
        Err(SpaceError::NotAnInteger("string"))
    }
}
