/*! Collection quantifiers.
 *
 * Each factory lifts a member-level matcher to a class-level one over a
 * named sub-collection. Counting semantics:
 *
 * - `any`: at least one member matches; stops at the first match, false on
 *   an empty collection.
 * - `all`: every member matches; stops at the first non-match, vacuously
 *   true on an empty collection.
 * - `at_least_n`: match count >= n; stops once n is reached, so n = 0 is
 *   constant-true.
 * - `at_most_n`: match count <= n; stops (false) once the count exceeds n.
 * - `exactly_n`: match count == n; must scan the entire collection.
 *
 * Counts are `usize`, so out-of-domain negative counts cannot be expressed.
 */

use crate::matcher::Matcher;
use dexsift_model::{Annotated, ClassDef};

fn any_in<C: ClassDef, E: 'static>(members: fn(&C) -> &[E], p: Matcher<E>) -> Matcher<C> {
    Matcher::new(move |c| members(c).iter().any(|e| p.matches(e)))
}

fn all_in<C: ClassDef, E: 'static>(members: fn(&C) -> &[E], p: Matcher<E>) -> Matcher<C> {
    Matcher::new(move |c| members(c).iter().all(|e| p.matches(e)))
}

fn at_least_in<C: ClassDef, E: 'static>(
    n: usize,
    members: fn(&C) -> &[E],
    p: Matcher<E>,
) -> Matcher<C> {
    Matcher::new(move |c| {
        if n == 0 {
            return true;
        }
        let mut seen = 0;
        for e in members(c) {
            if p.matches(e) {
                seen += 1;
                if seen >= n {
                    return true;
                }
            }
        }
        false
    })
}

fn at_most_in<C: ClassDef, E: 'static>(
    n: usize,
    members: fn(&C) -> &[E],
    p: Matcher<E>,
) -> Matcher<C> {
    Matcher::new(move |c| {
        let mut seen = 0;
        for e in members(c) {
            if p.matches(e) {
                seen += 1;
                if seen > n {
                    return false;
                }
            }
        }
        true
    })
}

fn exactly_in<C: ClassDef, E: 'static>(
    n: usize,
    members: fn(&C) -> &[E],
    p: Matcher<E>,
) -> Matcher<C> {
    Matcher::new(move |c| members(c).iter().filter(|e| p.matches(e)).count() == n)
}

/// Some virtual method matches `p`.
pub fn any_vmethods<C: ClassDef>(p: Matcher<C::Method>) -> Matcher<C> {
    any_in(C::vmethods, p)
}

/// Every virtual method matches `p`.
pub fn all_vmethods<C: ClassDef>(p: Matcher<C::Method>) -> Matcher<C> {
    all_in(C::vmethods, p)
}

/// At least `n` virtual methods match `p`.
pub fn at_least_n_vmethods<C: ClassDef>(n: usize, p: Matcher<C::Method>) -> Matcher<C> {
    at_least_in(n, C::vmethods, p)
}

/// At most `n` virtual methods match `p`.
pub fn at_most_n_vmethods<C: ClassDef>(n: usize, p: Matcher<C::Method>) -> Matcher<C> {
    at_most_in(n, C::vmethods, p)
}

/// Exactly `n` virtual methods match `p`.
pub fn exactly_n_vmethods<C: ClassDef>(n: usize, p: Matcher<C::Method>) -> Matcher<C> {
    exactly_in(n, C::vmethods, p)
}

/// Some direct method matches `p`.
pub fn any_dmethods<C: ClassDef>(p: Matcher<C::Method>) -> Matcher<C> {
    any_in(C::dmethods, p)
}

/// Every direct method matches `p`.
pub fn all_dmethods<C: ClassDef>(p: Matcher<C::Method>) -> Matcher<C> {
    all_in(C::dmethods, p)
}

/// At least `n` direct methods match `p`.
pub fn at_least_n_dmethods<C: ClassDef>(n: usize, p: Matcher<C::Method>) -> Matcher<C> {
    at_least_in(n, C::dmethods, p)
}

/// At most `n` direct methods match `p`.
pub fn at_most_n_dmethods<C: ClassDef>(n: usize, p: Matcher<C::Method>) -> Matcher<C> {
    at_most_in(n, C::dmethods, p)
}

/// Exactly `n` direct methods match `p`.
pub fn exactly_n_dmethods<C: ClassDef>(n: usize, p: Matcher<C::Method>) -> Matcher<C> {
    exactly_in(n, C::dmethods, p)
}

/// Some instance field matches `p`.
pub fn any_ifields<C: ClassDef>(p: Matcher<C::Field>) -> Matcher<C> {
    any_in(C::ifields, p)
}

/// Every instance field matches `p`.
pub fn all_ifields<C: ClassDef>(p: Matcher<C::Field>) -> Matcher<C> {
    all_in(C::ifields, p)
}

/// At least `n` instance fields match `p`.
pub fn at_least_n_ifields<C: ClassDef>(n: usize, p: Matcher<C::Field>) -> Matcher<C> {
    at_least_in(n, C::ifields, p)
}

/// At most `n` instance fields match `p`.
pub fn at_most_n_ifields<C: ClassDef>(n: usize, p: Matcher<C::Field>) -> Matcher<C> {
    at_most_in(n, C::ifields, p)
}

/// Exactly `n` instance fields match `p`.
pub fn exactly_n_ifields<C: ClassDef>(n: usize, p: Matcher<C::Field>) -> Matcher<C> {
    exactly_in(n, C::ifields, p)
}

/// Some static field matches `p`.
pub fn any_sfields<C: ClassDef>(p: Matcher<C::Field>) -> Matcher<C> {
    any_in(C::sfields, p)
}

/// Every static field matches `p`.
pub fn all_sfields<C: ClassDef>(p: Matcher<C::Field>) -> Matcher<C> {
    all_in(C::sfields, p)
}

/// At least `n` static fields match `p`.
pub fn at_least_n_sfields<C: ClassDef>(n: usize, p: Matcher<C::Field>) -> Matcher<C> {
    at_least_in(n, C::sfields, p)
}

/// At most `n` static fields match `p`.
pub fn at_most_n_sfields<C: ClassDef>(n: usize, p: Matcher<C::Field>) -> Matcher<C> {
    at_most_in(n, C::sfields, p)
}

/// Exactly `n` static fields match `p`.
pub fn exactly_n_sfields<C: ClassDef>(n: usize, p: Matcher<C::Field>) -> Matcher<C> {
    exactly_in(n, C::sfields, p)
}

/// Some annotation on the element matches `p`. False when the element
/// carries no annotation set at all.
pub fn any_annos<T: Annotated + 'static>(p: Matcher<T::Anno>) -> Matcher<T> {
    Matcher::new(move |t: &T| match t.annotations() {
        Some(set) => set.iter().any(|a| p.matches(a)),
        None => false,
    })
}
