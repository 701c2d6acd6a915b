use crate::matcher::Matcher;
use dexsift_model::{InsnRef, Opcode};

/// Any new-instance instruction.
pub fn new_instance<I: InsnRef>() -> Matcher<I> {
    Matcher::new(|i: &I| i.opcode().base() == Opcode::NewInstance)
}

/// A new-instance instruction additionally satisfying `p`. Instructions
/// outside the family fail without `p` being evaluated.
pub fn new_instance_where<I: InsnRef>(p: Matcher<I>) -> Matcher<I> {
    Matcher::new(move |i: &I| i.opcode().base() == Opcode::NewInstance && p.matches(i))
}

/// Any invoke-direct flavor, base or /range encoding.
pub fn invoke_direct<I: InsnRef>() -> Matcher<I> {
    Matcher::new(|i: &I| i.opcode().base() == Opcode::InvokeDirect)
}

/// An invoke-direct flavor additionally satisfying `p`.
pub fn invoke_direct_where<I: InsnRef>(p: Matcher<I>) -> Matcher<I> {
    Matcher::new(move |i: &I| i.opcode().base() == Opcode::InvokeDirect && p.matches(i))
}

/// Any invoke-static flavor, base or /range encoding.
pub fn invoke_static<I: InsnRef>() -> Matcher<I> {
    Matcher::new(|i: &I| i.opcode().base() == Opcode::InvokeStatic)
}

/// An invoke-static flavor additionally satisfying `p`.
pub fn invoke_static_where<I: InsnRef>(p: Matcher<I>) -> Matcher<I> {
    Matcher::new(move |i: &I| i.opcode().base() == Opcode::InvokeStatic && p.matches(i))
}

/// An invoke of any kind.
pub fn invoke<I: InsnRef>() -> Matcher<I> {
    Matcher::new(|i: &I| i.opcode().is_invoke())
}

/// An invoke of any kind additionally satisfying `p`.
pub fn invoke_where<I: InsnRef>(p: Matcher<I>) -> Matcher<I> {
    Matcher::new(move |i: &I| i.opcode().is_invoke() && p.matches(i))
}

/// Exact opcode identity; /range encodings are distinct opcodes here.
pub fn is_opcode<I: InsnRef>(op: Opcode) -> Matcher<I> {
    Matcher::new(move |i: &I| i.opcode() == op)
}

/// return-void.
pub fn return_void<I: InsnRef>() -> Matcher<I> {
    Matcher::new(|i: &I| i.opcode() == Opcode::ReturnVoid)
}

/// const-string flavors, including /jumbo.
pub fn const_string<I: InsnRef>() -> Matcher<I> {
    Matcher::new(|i: &I| i.opcode().base() == Opcode::ConstString)
}

/// throw.
pub fn throwex<I: InsnRef>() -> Matcher<I> {
    Matcher::new(|i: &I| i.opcode() == Opcode::Throw)
}

/// Any instruction carrying a type operand.
pub fn has_type<I: InsnRef>() -> Matcher<I> {
    Matcher::new(|i: &I| i.opcode().carries_type_ref())
}

/// An invoke whose argument-register count equals `n`, counted identically
/// across base and /range encodings. Non-invoke instructions never match.
pub fn has_n_args<I: InsnRef>(n: usize) -> Matcher<I> {
    Matcher::new(move |i: &I| i.opcode().is_invoke() && i.invoke_arg_count() == n)
}

/// Project the referenced method operand and apply `p` to it.
///
/// Applying this to an instruction without a method operand is a caller
/// error and aborts: compose with [`invoke`] or a sibling family matcher
/// first.
pub fn opcode_method<I: InsnRef>(p: Matcher<I::Method>) -> Matcher<I> {
    Matcher::new(move |i: &I| {
        let target = i.method_ref().unwrap_or_else(|| {
            panic!(
                "{} carries no method operand; guard with an invoke-family matcher",
                i.opcode()
            )
        });
        p.matches(&target)
    })
}

/// Project the referenced type operand and apply `p` to it.
///
/// Applying this to an instruction without a type operand is a caller error
/// and aborts: compose with [`new_instance`], [`has_type`], or a sibling
/// family matcher first.
pub fn opcode_type<I: InsnRef>(p: Matcher<I::Type>) -> Matcher<I> {
    Matcher::new(move |i: &I| {
        let target = i.type_ref().unwrap_or_else(|| {
            panic!(
                "{} carries no type operand; guard with a type-bearing family matcher",
                i.opcode()
            )
        });
        p.matches(&target)
    })
}
