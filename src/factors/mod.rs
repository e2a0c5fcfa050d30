//! Externally supplied adjustment factors.
//!
//! Factors are monthly multiplicative coefficients or additive amounts,
//! matched to series by normalized label and applied in their given order
//! after the trend forecast has been reseasonalized.

mod compose;
mod record;

pub use compose::{compose, compose_with, Composition};
pub use record::{
    associate_factors, load_factor_records, normalize_label, FactorKind, FactorRecord, RawFactor,
};
