//! Numeral table
//!
//! Static data for the seven Roman symbols: their values, their ordering by
//! rank, and the "pop" expansion each symbol breaks into when one unit is
//! borrowed down to the next smaller rank.

use crate::error::{Result, RomanError};
use std::fmt;

/// One of the seven legal Roman symbols, declared in ascending rank order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

// Symbol table: (symbol, character, value), ascending by rank
const SYMBOLS: &[(Symbol, char, u64)] = &[
    (Symbol::I, 'I', 1),
    (Symbol::V, 'V', 5),
    (Symbol::X, 'X', 10),
    (Symbol::L, 'L', 50),
    (Symbol::C, 'C', 100),
    (Symbol::D, 'D', 500),
    (Symbol::M, 'M', 1000),
];

// Pop table: what one unit of a symbol expands to one rank down
const POP_TABLE: &[(Symbol, &[Symbol])] = &[
    (Symbol::V, &[Symbol::I; 5]),
    (Symbol::X, &[Symbol::V; 2]),
    (Symbol::L, &[Symbol::X; 5]),
    (Symbol::C, &[Symbol::L; 2]),
    (Symbol::D, &[Symbol::C; 5]),
    (Symbol::M, &[Symbol::D; 2]),
];

impl Symbol {
    /// All symbols, ordered by rank
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// Look up the symbol written as `c`
    pub fn from_char(c: char) -> Result<Symbol> {
        SYMBOLS
            .iter()
            .find(|&&(_, ch, _)| ch == c)
            .map(|&(symbol, _, _)| symbol)
            .ok_or(RomanError::UnknownSymbol(c))
    }

    /// The character this symbol is written as
    pub fn as_char(self) -> char {
        SYMBOLS[self.rank()].1
    }

    /// Numeric value of a single occurrence
    pub fn value(self) -> u64 {
        SYMBOLS[self.rank()].2
    }

    /// Position in the ascending ordering, 0 (`I`) through 6 (`M`)
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Expansion of one unit into the next smaller rank, `None` for `I`
    pub fn pop(self) -> Option<&'static [Symbol]> {
        POP_TABLE
            .iter()
            .find(|&&(symbol, _)| symbol == self)
            .map(|&(_, expansion)| expansion)
    }

    /// The symbol one rank up, `None` for `M`
    pub fn next_up(self) -> Option<Symbol> {
        Symbol::ALL.get(self.rank() + 1).copied()
    }

    /// How many of this symbol regroup into one of `next_up`, `None` for `M`
    pub fn radix(self) -> Option<u64> {
        self.next_up().map(|next| next.value() / self.value())
    }

    /// Maximum occurrences allowed in a valid numeral, `None` if unbounded
    pub fn repeat_limit(self) -> Option<usize> {
        match self {
            Symbol::I | Symbol::X | Symbol::C => Some(4),
            Symbol::V | Symbol::L | Symbol::D => Some(1),
            Symbol::M => None,
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = RomanError;

    fn try_from(c: char) -> Result<Self> {
        Symbol::from_char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse numeral text into symbols, failing on the first illegal character
pub fn parse_symbols(text: &str) -> Result<Vec<Symbol>> {
    text.chars().map(Symbol::from_char).collect()
}

/// Write symbols back out as numeral text
pub fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|symbol| symbol.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_values() {
        let values: Vec<u64> = Symbol::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![1, 5, 10, 50, 100, 500, 1000]);
    }

    #[test]
    fn test_symbol_ranks() {
        assert_eq!(Symbol::I.rank(), 0);
        assert_eq!(Symbol::L.rank(), 3);
        assert_eq!(Symbol::M.rank(), 6);
        assert!(Symbol::C > Symbol::X);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Symbol::from_char('D'), Ok(Symbol::D));
        assert_eq!(Symbol::try_from('X'), Ok(Symbol::X));
        assert_eq!(Symbol::from_char('Z'), Err(RomanError::UnknownSymbol('Z')));
        // Lowercase is not a legal symbol
        assert_eq!(Symbol::from_char('i'), Err(RomanError::UnknownSymbol('i')));
    }

    #[test]
    fn test_pop_table() {
        assert_eq!(Symbol::I.pop(), None);
        assert_eq!(render(Symbol::M.pop().unwrap()), "DD");
        assert_eq!(render(Symbol::D.pop().unwrap()), "CCCCC");
        assert_eq!(render(Symbol::X.pop().unwrap()), "VV");
        assert_eq!(render(Symbol::V.pop().unwrap()), "IIIII");
    }

    #[test]
    fn test_pop_preserves_value() {
        for symbol in Symbol::ALL.iter().skip(1) {
            let expansion = symbol.pop().unwrap();
            let total: u64 = expansion.iter().map(|s| s.value()).sum();
            assert_eq!(total, symbol.value(), "pop of {}", symbol);
            assert!(expansion.iter().all(|s| s.rank() + 1 == symbol.rank()));
        }
    }

    #[test]
    fn test_radix() {
        assert_eq!(Symbol::I.radix(), Some(5));
        assert_eq!(Symbol::V.radix(), Some(2));
        assert_eq!(Symbol::C.radix(), Some(5));
        assert_eq!(Symbol::D.radix(), Some(2));
        assert_eq!(Symbol::M.radix(), None);
        assert_eq!(Symbol::M.next_up(), None);
    }

    #[test]
    fn test_parse_and_render() {
        let symbols = parse_symbols("MCXI").unwrap();
        assert_eq!(symbols, vec![Symbol::M, Symbol::C, Symbol::X, Symbol::I]);
        assert_eq!(render(&symbols), "MCXI");
        assert_eq!(parse_symbols(""), Ok(vec![]));
        assert_eq!(parse_symbols("MX7"), Err(RomanError::UnknownSymbol('7')));
    }
}
