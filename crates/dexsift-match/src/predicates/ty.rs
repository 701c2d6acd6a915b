use crate::matcher::Matcher;
use dexsift_model::TypeRef;

/// The subject type is `supertype` or one of its transitive subtypes, per
/// the hierarchy oracle.
pub fn is_assignable_to<T: TypeRef>(supertype: T) -> Matcher<T> {
    Matcher::new(move |t: &T| t.is_assignable_to(&supertype))
}

/// Project the type to its class definition and apply `p`. Types without a
/// resolvable class definition (primitive, array, external) never match.
pub fn as_class<T: TypeRef>(p: Matcher<T::Class>) -> Matcher<T> {
    Matcher::new(move |t: &T| t.class_def().map_or(false, |c| p.matches(&c)))
}
