//! Error types for rule construction.
//!
//! Rule parameters are validated once, when the rule is built. A rule that
//! exists is always valid, so the evolution loop has no fallible paths.

use std::error::Error;
use std::fmt;

/// Errors from building a transition rule with invalid parameters.
///
/// Out-of-range values are rejected outright; nothing is clamped.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleError {
    /// An elementary rule code outside `0..=255`.
    RuleCodeOutOfRange {
        /// The rejected code.
        code: u32,
    },
    /// A probability parameter that is NaN, infinite, or outside `[0, 1]`.
    ProbabilityOutOfRange {
        /// Which parameter was rejected (e.g. `"tree_density"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A majority window side that is zero or even.
    InvalidWindow {
        /// The rejected side length.
        side: u32,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleCodeOutOfRange { code } => {
                write!(f, "rule code {code} is outside 0..=255")
            }
            Self::ProbabilityOutOfRange { name, value } => {
                write!(f, "{name} must be a probability in [0, 1], got {value}")
            }
            Self::InvalidWindow { side } => {
                write!(f, "window side must be odd and at least 1, got {side}")
            }
        }
    }
}

impl Error for RuleError {}
