//! Error types for layer construction.
//!
//! Sampling and stepping never fail; the only errors in the layer model
//! are construction-time parameter contracts, rejected up front.

use std::error::Error;
use std::fmt;

/// Errors arising from invalid layer construction parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerError {
    /// A banded layer was given `left > right`.
    InvalidBand {
        /// The requested left bound.
        left: i32,
        /// The requested right bound.
        right: i32,
    },
    /// A layer was given `min > max`.
    InvalidRange {
        /// The requested minimum.
        min: i32,
        /// The requested maximum.
        max: i32,
    },
    /// A periodic layer was given a zero period.
    ZeroPeriod {
        /// Name of the layer kind that rejected the period.
        layer: &'static str,
    },
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBand { left, right } => {
                write!(f, "band left bound {left} must not exceed right bound {right}")
            }
            Self::InvalidRange { min, max } => {
                write!(f, "min {min} exceeds max {max}")
            }
            Self::ZeroPeriod { layer } => write!(f, "{layer}: period must be at least 1"),
        }
    }
}

impl Error for LayerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_bounds() {
        let msg = LayerError::InvalidBand { left: 5, right: 2 }.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('2'));
        let msg = LayerError::ZeroPeriod { layer: "alternating_flow" }.to_string();
        assert!(msg.starts_with("alternating_flow"));
    }
}
