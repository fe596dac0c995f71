//! Arithmetic on numeral text
//!
//! Addition and subtraction work on the symbols themselves. `add` pools the
//! symbols of both operands and regroups them rank by rank (five `I` make a
//! `V`, two `V` make an `X`, and so on). `diff` cancels equal symbols one for
//! one and, when the symbol to remove is missing, breaks a larger symbol down
//! through the pop table until it appears.

use crate::error::{Result, RomanError};
use crate::table::{parse_symbols, render, Symbol};
use std::convert::Infallible;
use tracing::{debug, trace};

/// Apply `step` to a state until the state stops changing
pub fn fixpoint<T, F>(initial: T, mut step: F) -> T
where
    T: PartialEq,
    F: FnMut(&T) -> T,
{
    match try_fixpoint(initial, |state| Ok::<T, Infallible>(step(state))) {
        Ok(state) => state,
        Err(never) => match never {},
    }
}

/// Like [`fixpoint`], but stops at the first error `step` returns
pub fn try_fixpoint<T, E, F>(initial: T, mut step: F) -> std::result::Result<T, E>
where
    T: PartialEq,
    F: FnMut(&T) -> std::result::Result<T, E>,
{
    let mut state = initial;
    loop {
        let next = step(&state)?;
        if next == state {
            return Ok(state);
        }
        state = next;
    }
}

/// Add two numerals, returning the sum in tally form (`M` down to `I`).
///
/// Both operands are checked for illegal symbols before anything is counted.
pub fn add(left: &str, right: &str) -> Result<String> {
    let mut counts = [0u64; Symbol::ALL.len()];
    for symbol in parse_symbols(left)?.into_iter().chain(parse_symbols(right)?) {
        counts[symbol.rank()] += 1;
    }

    let mut carry = 0;
    for symbol in Symbol::ALL {
        let total = counts[symbol.rank()] + carry;
        match symbol.radix() {
            Some(radix) => {
                counts[symbol.rank()] = total % radix;
                carry = total / radix;
            }
            None => {
                counts[symbol.rank()] = total;
                carry = 0;
            }
        }
        trace!(%symbol, total, carry, "regrouped rank");
    }

    let sum: String = Symbol::ALL
        .iter()
        .rev()
        .map(|symbol| symbol.to_string().repeat(counts[symbol.rank()] as usize))
        .collect();
    debug!(left, right, %sum, "added numerals");
    Ok(sum)
}

/// Subtract `remove` from `bigger` without converting either to an integer.
///
/// The caller must ensure `bigger` is worth at least as much as `remove`;
/// otherwise the borrow search runs out of symbols and this returns
/// [`RomanError::PreconditionViolation`].
pub fn diff(bigger: &str, remove: &str) -> Result<String> {
    let initial = Subtraction {
        bigger: parse_symbols(bigger)?,
        remove: parse_symbols(remove)?,
    };
    let result = try_fixpoint(initial, Subtraction::step)?;
    let difference = render(&result.bigger);
    debug!(bigger, remove, %difference, "subtracted numerals");
    Ok(difference)
}

/// Intermediate state of a subtraction: what is left, and what is still owed
#[derive(Debug, Clone, PartialEq)]
struct Subtraction {
    bigger: Vec<Symbol>,
    remove: Vec<Symbol>,
}

impl Subtraction {
    /// One cancellation or one borrow. A finished subtraction maps to itself.
    fn step(&self) -> Result<Subtraction> {
        let Some(&target) = self.remove.last() else {
            return Ok(self.clone());
        };
        let mut next = self.clone();

        if let Some(index) = self.bigger.iter().rposition(|&symbol| symbol == target) {
            next.bigger.remove(index);
            next.remove.pop();
            trace!(%target, index, "cancelled symbol");
            return Ok(next);
        }

        let index = self
            .bigger
            .iter()
            .rposition(|&symbol| symbol > target)
            .ok_or_else(|| RomanError::PreconditionViolation {
                remaining: render(&self.remove),
            })?;
        let borrowed = self.bigger[index];
        // Anything larger than the target is above I, so it always has an expansion
        let expansion = borrowed.pop().unwrap_or_default();
        next.bigger.splice(index..=index, expansion.iter().copied());
        debug!(%borrowed, %target, index, "borrowed from larger symbol");
        Ok(next)
    }
}
