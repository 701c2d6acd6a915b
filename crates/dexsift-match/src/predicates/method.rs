use crate::matcher::Matcher;
use crate::predicates::insn;
use crate::sequence::Pattern;
use dexsift_model::{AccessFlags, MethodDef};

/// The method carries the construction marker.
///
/// Does not distinguish instance initializers from static class
/// initializers; `<clinit>` matches too.
pub fn is_constructor<M: MethodDef>() -> Matcher<M> {
    Matcher::new(|m: &M| m.access().contains(AccessFlags::CONSTRUCTOR))
}

/// An instance constructor whose entire body is the trivial
/// superclass-constructor call followed by return-void, with no declared
/// parameters.
pub fn is_default_constructor<M: MethodDef>() -> Matcher<M> {
    let body: Pattern<M::Insn> = Pattern::new(vec![
        insn::invoke_direct_where(insn::opcode_method(is_constructor())),
        insn::return_void(),
    ]);
    Matcher::new(move |m: &M| {
        if m.access().contains(AccessFlags::STATIC)
            || !m.access().contains(AccessFlags::CONSTRUCTOR)
            || !m.param_types().is_empty()
        {
            return false;
        }
        match m.code() {
            Some(insns) => insns.len() == body.len() && body.matches(insns),
            None => false,
        }
    })
}

/// The method declares no parameters.
pub fn has_no_args<M: MethodDef>() -> Matcher<M> {
    Matcher::new(|m: &M| m.param_types().is_empty())
}

/// The method declares exactly `n` parameters.
pub fn has_n_args<M: MethodDef>(n: usize) -> Matcher<M> {
    Matcher::new(move |m: &M| m.param_types().len() == n)
}

/// The method has a non-empty code body. Native and abstract methods do
/// not.
pub fn has_code<M: MethodDef>() -> Matcher<M> {
    Matcher::new(|m: &M| m.code().map_or(false, |insns| !insns.is_empty()))
}

/// The method's instruction stream contains a contiguous window satisfying
/// `pattern`. False for methods without a code body.
pub fn has_opcodes<M: MethodDef>(pattern: Pattern<M::Insn>) -> Matcher<M> {
    Matcher::new(move |m: &M| m.code().map_or(false, |insns| pattern.matches(insns)))
}
