//! Error type shared by every public entry point.
//!
//! All algorithms are pure and deterministic, so the only failures are
//! precondition violations on the caller's input. They are reported eagerly,
//! before any work is done, instead of producing a malformed staircase.

use thiserror::Error;

/// Precondition violations detected by the frontier algorithms.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParetoError {
    /// A coordinate is NaN and cannot be ordered.
    #[error("point {index} has a non-numeric coordinate ({x}, {y})")]
    NonNumericCoordinate { index: usize, x: f64, y: f64 },
    /// The presorted sweep was handed input out of canonical order.
    #[error("input is not in ascending x order: point {index} sorts before its predecessor")]
    UnsortedInput { index: usize },
    /// A staircase passed to the merge is not strictly monotone.
    #[error("{side} staircase is not monotone at position {index}")]
    NotAStaircase { side: &'static str, index: usize },
    /// The left staircase reaches past the start of the right one.
    #[error("left staircase ends at x = {left_x}, after the right staircase starts at x = {right_x}")]
    OverlappingStaircases { left_x: f64, right_x: f64 },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ParetoError>;

#[cfg(test)]
mod tests {
    use super::ParetoError;

    #[test]
    fn messages_name_the_offending_position() {
        let err = ParetoError::UnsortedInput { index: 4 };
        assert_eq!(
            err.to_string(),
            "input is not in ascending x order: point 4 sorts before its predecessor"
        );

        let err = ParetoError::NotAStaircase {
            side: "right",
            index: 2,
        };
        assert_eq!(err.to_string(), "right staircase is not monotone at position 2");
    }

    #[test]
    fn non_numeric_message_includes_coordinates() {
        let err = ParetoError::NonNumericCoordinate {
            index: 0,
            x: f64::NAN,
            y: 1.5,
        };
        assert_eq!(err.to_string(), "point 0 has a non-numeric coordinate (NaN, 1.5)");
    }
}
