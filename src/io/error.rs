//! Error types for engine operations
//!
//! The engine never panics the host: every failure condition is a value. A
//! missing path is not an error at all; it is an empty search result. The
//! variants here cover genuine contract violations and exhausted resources.

use std::fmt;

/// Main error type for all engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Requested maze dimensions leave no interior to carve
    DegenerateGrid {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Search endpoint is out of bounds or not a path cell
    InvalidEndpoint {
        /// Which endpoint failed ("start" or "end")
        which: &'static str,
        /// Endpoint row
        row: usize,
        /// Endpoint column
        col: usize,
        /// Grid dimensions the endpoint was checked against
        grid_dimensions: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical or bookkeeping computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// No free cell remains for food placement
    FoodExhausted {
        /// Arena height
        rows: usize,
        /// Arena width
        cols: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGrid { rows, cols } => {
                write!(
                    f,
                    "Grid {rows}x{cols} is too small to carve; both dimensions must be at least 3"
                )
            }
            Self::InvalidEndpoint {
                which,
                row,
                col,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Invalid {which} endpoint ({row}, {col}): not a path cell of the {}x{} grid",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::FoodExhausted { rows, cols } => {
                write!(f, "No free cell remains on the {rows}x{cols} arena for food")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> EngineError {
    EngineError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failing_endpoint() {
        let err = EngineError::InvalidEndpoint {
            which: "start",
            row: 0,
            col: 7,
            grid_dimensions: (5, 5),
        };
        let message = err.to_string();
        assert!(message.contains("start"));
        assert!(message.contains("(0, 7)"));
    }

    #[test]
    fn test_invalid_parameter_helper_carries_context() {
        let err = invalid_parameter("loop_factor", &2.5, &"must lie within [0, 1]");
        match err {
            EngineError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "loop_factor");
                assert_eq!(value, "2.5");
            }
            _ => unreachable!("Expected InvalidParameter error type"),
        }
    }
}
