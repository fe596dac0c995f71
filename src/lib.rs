//! Roman Numeral Arithmetic
//!
//! Conversion between Roman numeral text and integers, syntactic validation of
//! numeral strings, and addition/subtraction performed directly on the symbols
//! of a numeral rather than on its integer value.

pub mod arithmetic;
pub mod converter;
pub mod logger;
pub mod repl;
pub mod table;
pub mod validator;

// Re-export core types for convenience
pub use crate::error::{Result, RomanError};
pub use arithmetic::{add, diff, fixpoint, try_fixpoint};
pub use converter::{int_to_numeral, numeral_to_int};
pub use table::Symbol;
pub use validator::{is_valid_numeral, validate};

/// Core error handling types for the numeral engine
pub mod error {
    use crate::table::Symbol;
    use std::fmt;

    /// Result type for numeral operations
    pub type Result<T> = std::result::Result<T, RomanError>;

    /// Every way a numeral operation or shell command can fail
    #[derive(Debug, Clone, PartialEq)]
    pub enum RomanError {
        // Lexical errors
        UnknownSymbol(char),

        // Validation errors
        OutOfOrder {
            position: usize,
            symbol: Symbol,
            next: Symbol,
        },
        TooManyRepeats {
            symbol: Symbol,
            count: usize,
            limit: usize,
        },

        // Arithmetic errors
        PreconditionViolation { remaining: String },

        // Shell errors
        SyntaxError { message: String },
    }

    impl fmt::Display for RomanError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                RomanError::UnknownSymbol(c) => write!(f, "Unknown symbol: {:?}", c),
                RomanError::OutOfOrder {
                    position,
                    symbol,
                    next,
                } => write!(
                    f,
                    "Symbol {} at position {} is followed by larger symbol {}",
                    symbol, position, next
                ),
                RomanError::TooManyRepeats {
                    symbol,
                    count,
                    limit,
                } => write!(
                    f,
                    "Symbol {} appears {} times (at most {} allowed)",
                    symbol, count, limit
                ),
                RomanError::PreconditionViolation { remaining } => write!(
                    f,
                    "Cannot subtract: nothing left to borrow from while removing {}",
                    remaining
                ),
                RomanError::SyntaxError { message } => write!(f, "Syntax error: {}", message),
            }
        }
    }

    impl std::error::Error for RomanError {}
}
