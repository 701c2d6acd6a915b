use crate::matcher::Matcher;
use dexsift_model::{
    AccessFlags, HasAccessFlags, MaybeExternal, Member, MemberLookup, Named, Retention, Typed,
};

/// The element's name equals `name` exactly.
pub fn named<T: Named + 'static>(name: impl Into<String>) -> Matcher<T> {
    let name = name.into();
    Matcher::new(move |t: &T| t.name() == name)
}

/// The member's declaring class has exactly this fully-qualified name.
pub fn on_class<T: Member + 'static>(name: impl Into<String>) -> Matcher<T> {
    let name = name.into();
    Matcher::new(move |t: &T| t.owner().name() == name)
}

/// The subject is found in `container` via its membership lookup.
pub fn member_of<T, C>(container: C) -> Matcher<T>
where
    T: 'static,
    C: MemberLookup<T> + Send + Sync + 'static,
{
    Matcher::new(move |t: &T| container.contains(t))
}

/// Project the element to its declared type and apply `p`.
pub fn as_type<T: Typed + 'static>(p: Matcher<T::Type>) -> Matcher<T> {
    Matcher::new(move |t: &T| p.matches(&t.ty()))
}

/// The element originates outside the program being optimized.
pub fn is_external<T: MaybeExternal + 'static>() -> Matcher<T> {
    Matcher::new(|t: &T| t.is_external())
}

/// The final bit is set.
pub fn is_final<T: HasAccessFlags + 'static>() -> Matcher<T> {
    Matcher::new(|t: &T| t.access().contains(AccessFlags::FINAL))
}

/// The static bit is set.
pub fn is_static<T: HasAccessFlags + 'static>() -> Matcher<T> {
    Matcher::new(|t: &T| t.access().contains(AccessFlags::STATIC))
}

/// The abstract bit is set.
pub fn is_abstract<T: HasAccessFlags + 'static>() -> Matcher<T> {
    Matcher::new(|t: &T| t.access().contains(AccessFlags::ABSTRACT))
}

/// The deletion oracle permits removing this member.
pub fn can_delete<T: Retention + 'static>() -> Matcher<T> {
    Matcher::new(|t: &T| t.can_delete())
}

/// The rename oracle permits renaming this member.
pub fn can_rename<T: Retention + 'static>() -> Matcher<T> {
    Matcher::new(|t: &T| t.can_rename())
}

/// The member is explicitly marked to be kept.
pub fn keep<T: Retention + 'static>() -> Matcher<T> {
    Matcher::new(|t: &T| t.is_kept())
}

/// The member is a reachability seed.
pub fn is_seed<T: Retention + 'static>() -> Matcher<T> {
    Matcher::new(|t: &T| t.is_seed())
}
