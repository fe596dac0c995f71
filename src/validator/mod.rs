//! Numeral validation
//!
//! A numeral is valid when it uses only the seven legal symbols, never places
//! a symbol before a strictly larger one, and respects the per-symbol
//! repetition caps. The ordering rule is stricter than classical usage:
//! subtractive pairs such as `CM` or `IV` are rejected.

use crate::error::{Result, RomanError};
use crate::table::{parse_symbols, Symbol};

/// Check `text` against all three rules, reporting the first one broken
pub fn validate(text: &str) -> Result<()> {
    let symbols = parse_symbols(text)?;

    for (position, pair) in symbols.windows(2).enumerate() {
        let (symbol, next) = (pair[0], pair[1]);
        if symbol.value() < next.value() {
            return Err(RomanError::OutOfOrder {
                position,
                symbol,
                next,
            });
        }
    }

    for symbol in Symbol::ALL {
        if let Some(limit) = symbol.repeat_limit() {
            let count = symbols.iter().filter(|&&s| s == symbol).count();
            if count > limit {
                return Err(RomanError::TooManyRepeats {
                    symbol,
                    count,
                    limit,
                });
            }
        }
    }

    Ok(())
}

/// Whether `text` is a syntactically legal numeral
pub fn is_valid_numeral(text: &str) -> bool {
    validate(text).is_ok()
}
