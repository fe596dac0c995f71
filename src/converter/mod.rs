//! Conversion between numeral text and integers
//!
//! Both directions work on the additive tally reading of a numeral: every
//! symbol contributes its own value, and integers are written without
//! subtractive pairs (4 is `IIII`, 900 is `DCCCC`).

use crate::error::Result;
use crate::table::{parse_symbols, Symbol};

// Decimal digit places below the thousands: (place value, unit, mid)
const DIGIT_PLACES: &[(u32, Symbol, Symbol)] = &[
    (100, Symbol::C, Symbol::D),
    (10, Symbol::X, Symbol::L),
    (1, Symbol::I, Symbol::V),
];

/// Sum the value of every symbol in `text`.
///
/// Ordering is ignored, so `IV` reads as 6. The empty string is 0.
pub fn numeral_to_int(text: &str) -> Result<u64> {
    let symbols = parse_symbols(text)?;
    Ok(symbols.iter().map(|symbol| symbol.value()).sum())
}

/// Write `value` as a numeral in tally form.
///
/// Thousands are written as a run of `M`, so values above 3999 still render.
/// Zero renders as the empty string.
pub fn int_to_numeral(value: u32) -> String {
    let mut numeral = Symbol::M.to_string().repeat((value / 1000) as usize);

    for &(place, unit, mid) in DIGIT_PLACES {
        let digit = (value / place % 10) as usize;
        numeral.push_str(&mid.to_string().repeat(digit / 5));
        numeral.push_str(&unit.to_string().repeat(digit % 5));
    }

    numeral
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RomanError;
    use crate::validator::is_valid_numeral;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_numeral_to_int() {
        assert_eq!(numeral_to_int("MMXXVII"), Ok(2027));
        assert_eq!(numeral_to_int("MVIIII"), Ok(1009));
        assert_eq!(numeral_to_int(""), Ok(0));
    }

    #[test]
    fn test_numeral_to_int_is_additive() {
        // Subtractive pairs are summed, not subtracted
        assert_eq!(numeral_to_int("IV"), Ok(6));
        assert_eq!(numeral_to_int("CM"), Ok(1100));
    }

    #[test]
    fn test_numeral_to_int_unknown_symbol() {
        assert_eq!(numeral_to_int("MXQ"), Err(RomanError::UnknownSymbol('Q')));
    }

    #[test]
    fn test_int_to_numeral() {
        assert_eq!(int_to_numeral(0), "");
        assert_eq!(int_to_numeral(4), "IIII");
        assert_eq!(int_to_numeral(9), "VIIII");
        assert_eq!(int_to_numeral(1009), "MVIIII");
        assert_eq!(int_to_numeral(2027), "MMXXVII");
        assert_eq!(int_to_numeral(3999), "MMMDCCCCLXXXXVIIII");
    }

    #[test]
    fn test_int_to_numeral_above_conventional_range() {
        assert_eq!(int_to_numeral(5001), "MMMMMI");
    }

    #[test]
    fn test_round_trip_curated() {
        for n in [1, 3, 5, 8, 15, 27, 160, 555, 1111, 2368, 3888] {
            assert_eq!(numeral_to_int(&int_to_numeral(n)), Ok(n as u64));
        }
    }

    // Property-Based Tests

    #[quickcheck]
    fn prop_round_trip(value: u16) -> bool {
        numeral_to_int(&int_to_numeral(value as u32)) == Ok(value as u64)
    }

    #[quickcheck]
    fn prop_rendered_numerals_are_valid(value: u16) -> bool {
        is_valid_numeral(&int_to_numeral(value as u32))
    }
}
