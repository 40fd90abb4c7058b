pub mod core;
pub mod spaces;
pub mod utils;

pub use crate::core::{Candidate, IntoCount, Result, SpaceError};
pub use crate::spaces::{Discrete, Space};
pub use crate::utils::rng::{RngStream, rng_from_entropy, rng_from_seed};
