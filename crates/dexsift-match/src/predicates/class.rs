use crate::matcher::Matcher;
use dexsift_model::{AccessFlags, ClassDef};

/// The class declares itself an interface.
pub fn is_interface<C: ClassDef>() -> Matcher<C> {
    Matcher::new(|c: &C| c.access().contains(AccessFlags::INTERFACE))
}

/// The class declares itself an enum.
pub fn is_enum<C: ClassDef>() -> Matcher<C> {
    Matcher::new(|c: &C| c.access().contains(AccessFlags::ENUM))
}

/// The class carries a class-body data item.
pub fn has_class_data<C: ClassDef>() -> Matcher<C> {
    Matcher::new(|c: &C| c.has_class_data())
}
