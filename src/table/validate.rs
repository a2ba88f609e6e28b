//! Input validation for table construction
//!
//! Every check runs before any matrix is allocated.

use thiserror::Error;
use tracing::warn;

/// Default slack allowed above 1.0 when summing probabilities
pub const DEFAULT_MASS_TOLERANCE: f64 = 1e-9;

/// Missing mass (1 - Σp) above which a warning is logged
const SPARSE_MASS_WARNING: f64 = 0.01;

/// Reasons a key set / probability vector pair is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// No keys were supplied
    #[error("key set is empty")]
    Empty,

    /// Keys and probabilities differ in length
    #[error("{keys} keys but {probabilities} probabilities")]
    LengthMismatch {
        /// Number of keys
        keys: usize,
        /// Number of probabilities
        probabilities: usize,
    },

    /// A probability below zero
    #[error("probability {value} for key {index} is negative")]
    NegativeProbability {
        /// 1-based key index
        index: usize,
        /// Offending value
        value: f64,
    },

    /// NaN or infinite probability
    #[error("probability for key {index} is not finite")]
    NonFiniteProbability {
        /// 1-based key index
        index: usize,
    },

    /// Probabilities sum past 1.0 (beyond tolerance)
    #[error("probabilities sum to {total}, which exceeds 1.0")]
    ProbabilityMassExceeded {
        /// Observed sum
        total: f64,
    },

    /// Keys are not strictly ascending
    #[error("key {index} is not strictly greater than its predecessor")]
    UnsortedKeys {
        /// 1-based index of the first out-of-order key
        index: usize,
    },
}

/// Check keys and probabilities, returning the total probability mass
pub fn validate_input<K: Ord>(
    keys: &[K],
    probabilities: &[f64],
    mass_tolerance: f64,
) -> Result<f64, InputError> {
    if keys.len() != probabilities.len() {
        return Err(InputError::LengthMismatch {
            keys: keys.len(),
            probabilities: probabilities.len(),
        });
    }
    if keys.is_empty() {
        return Err(InputError::Empty);
    }

    for (offset, &value) in probabilities.iter().enumerate() {
        if !value.is_finite() {
            return Err(InputError::NonFiniteProbability { index: offset + 1 });
        }
        if value < 0.0 {
            return Err(InputError::NegativeProbability {
                index: offset + 1,
                value,
            });
        }
    }

    if let Some(offset) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
        return Err(InputError::UnsortedKeys { index: offset + 2 });
    }

    let total: f64 = probabilities.iter().sum();
    if total > 1.0 + mass_tolerance {
        return Err(InputError::ProbabilityMassExceeded { total });
    }
    if 1.0 - total > SPARSE_MASS_WARNING {
        warn!(total, "probabilities sum below 1.0; costs are not a full expectation");
    }

    Ok(total)
}
