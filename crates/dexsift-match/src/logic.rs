/*! Boolean combinators.
 *
 * Each combinator wraps its operands in a new matcher; operands are never
 * flattened or rewritten, so deeply nested compositions evaluate exactly as
 * written. `and`/`or` short-circuit left to right; `xor` always evaluates
 * both sides. Operator sugar (`!p`, `p0 & p1`, `p0 | p1`, `p0 ^ p1`) maps
 * onto the same functions.
 */

use crate::matcher::Matcher;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// True iff `p` is false.
pub fn not<T: 'static>(p: Matcher<T>) -> Matcher<T> {
    Matcher::new(move |t| !p.matches(t))
}

/// True iff both operands are true; `p1` is not evaluated when `p0` fails.
pub fn and<T: 'static>(p0: Matcher<T>, p1: Matcher<T>) -> Matcher<T> {
    Matcher::new(move |t| p0.matches(t) && p1.matches(t))
}

/// True iff either operand is true; `p1` is not evaluated when `p0` holds.
pub fn or<T: 'static>(p0: Matcher<T>, p1: Matcher<T>) -> Matcher<T> {
    Matcher::new(move |t| p0.matches(t) || p1.matches(t))
}

/// True iff exactly one operand is true. Both sides are always evaluated.
pub fn xor<T: 'static>(p0: Matcher<T>, p1: Matcher<T>) -> Matcher<T> {
    Matcher::new(move |t| p0.matches(t) ^ p1.matches(t))
}

impl<T: 'static> Not for Matcher<T> {
    type Output = Matcher<T>;

    fn not(self) -> Matcher<T> {
        crate::logic::not(self)
    }
}

impl<T: 'static> BitAnd for Matcher<T> {
    type Output = Matcher<T>;

    fn bitand(self, rhs: Matcher<T>) -> Matcher<T> {
        and(self, rhs)
    }
}

impl<T: 'static> BitOr for Matcher<T> {
    type Output = Matcher<T>;

    fn bitor(self, rhs: Matcher<T>) -> Matcher<T> {
        or(self, rhs)
    }
}

impl<T: 'static> BitXor for Matcher<T> {
    type Output = Matcher<T>;

    fn bitxor(self, rhs: Matcher<T>) -> Matcher<T> {
        xor(self, rhs)
    }
}
