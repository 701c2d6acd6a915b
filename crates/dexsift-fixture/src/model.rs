use dexsift_model::{
    AccessFlags, AnnoDef, Annotated, ClassDef, FieldDef, HasAccessFlags, InsnRef, MaybeExternal,
    Member, MethodDef, Named, Opcode, Retention, TypeRef, Typed,
};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock, Weak};

/// Retention knobs attached to each element; defaults allow everything.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Verdicts {
    pub(crate) can_delete: bool,
    pub(crate) can_rename: bool,
    pub(crate) keep: bool,
    pub(crate) seed: bool,
}

impl Default for Verdicts {
    fn default() -> Self {
        Self {
            can_delete: true,
            can_rename: true,
            keep: false,
            seed: false,
        }
    }
}

/// A reference to a type. Interned per [`crate::DexBuilder`], so two handles
/// with the same descriptor share one allocation.
#[derive(Clone)]
pub struct Ty(pub(crate) Arc<TyData>);

pub(crate) struct TyData {
    pub(crate) descriptor: String,
    pub(crate) supertype: OnceLock<Ty>,
    pub(crate) class: OnceLock<Weak<ClassData>>,
}

impl Ty {
    pub fn descriptor(&self) -> &str {
        &self.0.descriptor
    }
}

impl fmt::Debug for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ty({})", self.0.descriptor)
    }
}

impl PartialEq for Ty {
    fn eq(&self, other: &Self) -> bool {
        self.0.descriptor == other.0.descriptor
    }
}

impl Eq for Ty {}

impl Hash for Ty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.descriptor.hash(state);
    }
}

impl Named for Ty {
    fn name(&self) -> &str {
        &self.0.descriptor
    }
}

impl TypeRef for Ty {
    type Class = Class;

    fn is_assignable_to(&self, supertype: &Ty) -> bool {
        let mut cur = Some(self.clone());
        while let Some(t) = cur {
            if t == *supertype {
                return true;
            }
            cur = t.0.supertype.get().cloned();
        }
        false
    }

    fn class_def(&self) -> Option<Class> {
        self.0.class.get().and_then(Weak::upgrade).map(Class)
    }
}

/// A class definition handle.
#[derive(Clone)]
pub struct Class(pub(crate) Arc<ClassData>);

pub(crate) struct ClassData {
    pub(crate) ty: Ty,
    pub(crate) access: AccessFlags,
    pub(crate) external: bool,
    pub(crate) has_class_data: bool,
    pub(crate) vmethods: Vec<Method>,
    pub(crate) dmethods: Vec<Method>,
    pub(crate) ifields: Vec<Field>,
    pub(crate) sfields: Vec<Field>,
    pub(crate) annotations: Option<Vec<Anno>>,
    pub(crate) verdicts: Verdicts,
}

impl Class {
    pub fn descriptor(&self) -> &str {
        self.0.ty.descriptor()
    }

    /// First virtual method with this name.
    pub fn vmethod(&self, name: &str) -> Option<Method> {
        self.0.vmethods.iter().find(|m| m.name() == name).cloned()
    }

    /// First direct method with this name.
    pub fn dmethod(&self, name: &str) -> Option<Method> {
        self.0.dmethods.iter().find(|m| m.name() == name).cloned()
    }

    pub fn ifield(&self, name: &str) -> Option<Field> {
        self.0.ifields.iter().find(|f| f.name() == name).cloned()
    }

    pub fn sfield(&self, name: &str) -> Option<Field> {
        self.0.sfields.iter().find(|f| f.name() == name).cloned()
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.descriptor())
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl Hash for Class {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl HasAccessFlags for Class {
    fn access(&self) -> AccessFlags {
        self.0.access
    }
}

impl Named for Class {
    fn name(&self) -> &str {
        self.0.ty.descriptor()
    }
}

impl Typed for Class {
    type Type = Ty;

    fn ty(&self) -> Ty {
        self.0.ty.clone()
    }
}

impl Annotated for Class {
    type Anno = Anno;

    fn annotations(&self) -> Option<&[Anno]> {
        self.0.annotations.as_deref()
    }
}

impl MaybeExternal for Class {
    fn is_external(&self) -> bool {
        self.0.external
    }
}

impl Retention for Class {
    fn can_delete(&self) -> bool {
        self.0.verdicts.can_delete
    }

    fn can_rename(&self) -> bool {
        self.0.verdicts.can_rename
    }

    fn is_kept(&self) -> bool {
        self.0.verdicts.keep
    }

    fn is_seed(&self) -> bool {
        self.0.verdicts.seed
    }
}

impl ClassDef for Class {
    type Method = Method;
    type Field = Field;

    fn vmethods(&self) -> &[Method] {
        &self.0.vmethods
    }

    fn dmethods(&self) -> &[Method] {
        &self.0.dmethods
    }

    fn ifields(&self) -> &[Field] {
        &self.0.ifields
    }

    fn sfields(&self) -> &[Field] {
        &self.0.sfields
    }

    fn has_class_data(&self) -> bool {
        self.0.has_class_data
    }
}

/// A method definition handle.
#[derive(Clone)]
pub struct Method(pub(crate) Arc<MethodData>);

pub(crate) struct MethodData {
    pub(crate) name: String,
    pub(crate) access: AccessFlags,
    pub(crate) owner: Ty,
    pub(crate) params: Vec<Ty>,
    pub(crate) code: Option<Vec<Insn>>,
    pub(crate) annotations: Option<Vec<Anno>>,
    pub(crate) verdicts: Verdicts,
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method({}.{})", self.0.owner.descriptor(), self.0.name)
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Method {}

impl Hash for Method {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl HasAccessFlags for Method {
    fn access(&self) -> AccessFlags {
        self.0.access
    }
}

impl Named for Method {
    fn name(&self) -> &str {
        &self.0.name
    }
}

impl Member for Method {
    type Type = Ty;

    fn owner(&self) -> Ty {
        self.0.owner.clone()
    }
}

impl Annotated for Method {
    type Anno = Anno;

    fn annotations(&self) -> Option<&[Anno]> {
        self.0.annotations.as_deref()
    }
}

impl Retention for Method {
    fn can_delete(&self) -> bool {
        self.0.verdicts.can_delete
    }

    fn can_rename(&self) -> bool {
        self.0.verdicts.can_rename
    }

    fn is_kept(&self) -> bool {
        self.0.verdicts.keep
    }

    fn is_seed(&self) -> bool {
        self.0.verdicts.seed
    }
}

impl MethodDef for Method {
    type Type = Ty;
    type Insn = Insn;

    fn param_types(&self) -> &[Ty] {
        &self.0.params
    }

    fn code(&self) -> Option<&[Insn]> {
        self.0.code.as_deref()
    }
}

/// A field definition handle.
#[derive(Clone)]
pub struct Field(pub(crate) Arc<FieldData>);

pub(crate) struct FieldData {
    pub(crate) name: String,
    pub(crate) access: AccessFlags,
    pub(crate) owner: Ty,
    pub(crate) ty: Ty,
    pub(crate) annotations: Option<Vec<Anno>>,
    pub(crate) verdicts: Verdicts,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({}.{})", self.0.owner.descriptor(), self.0.name)
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl HasAccessFlags for Field {
    fn access(&self) -> AccessFlags {
        self.0.access
    }
}

impl Named for Field {
    fn name(&self) -> &str {
        &self.0.name
    }
}

impl Member for Field {
    type Type = Ty;

    fn owner(&self) -> Ty {
        self.0.owner.clone()
    }
}

impl Typed for Field {
    type Type = Ty;

    fn ty(&self) -> Ty {
        self.0.ty.clone()
    }
}

impl Annotated for Field {
    type Anno = Anno;

    fn annotations(&self) -> Option<&[Anno]> {
        self.0.annotations.as_deref()
    }
}

impl Retention for Field {
    fn can_delete(&self) -> bool {
        self.0.verdicts.can_delete
    }

    fn can_rename(&self) -> bool {
        self.0.verdicts.can_rename
    }

    fn is_kept(&self) -> bool {
        self.0.verdicts.keep
    }

    fn is_seed(&self) -> bool {
        self.0.verdicts.seed
    }
}

impl FieldDef for Field {}

/// One executable instruction.
#[derive(Clone)]
pub struct Insn(Arc<InsnData>);

struct InsnData {
    opcode: Opcode,
    args: usize,
    method: Option<Method>,
    ty: Option<Ty>,
}

impl Insn {
    /// An instruction with no method or type operand.
    ///
    /// # Panics
    ///
    /// Panics when the opcode requires an operand.
    pub fn simple(opcode: Opcode) -> Insn {
        assert!(
            !opcode.carries_method_ref() && !opcode.carries_type_ref(),
            "{} requires an operand",
            opcode
        );
        Insn(Arc::new(InsnData {
            opcode,
            args: 0,
            method: None,
            ty: None,
        }))
    }

    /// An invoke with its target and argument-register count. The count is
    /// already normalized; base and /range encodings report it identically.
    ///
    /// # Panics
    ///
    /// Panics when the opcode does not reference a method.
    pub fn invoke(opcode: Opcode, target: &Method, args: usize) -> Insn {
        assert!(
            opcode.carries_method_ref(),
            "{} does not reference a method",
            opcode
        );
        Insn(Arc::new(InsnData {
            opcode,
            args,
            method: Some(target.clone()),
            ty: None,
        }))
    }

    /// A type-bearing instruction with its type operand.
    ///
    /// # Panics
    ///
    /// Panics when the opcode does not reference a type.
    pub fn with_type(opcode: Opcode, ty: &Ty) -> Insn {
        assert!(
            opcode.carries_type_ref(),
            "{} does not reference a type",
            opcode
        );
        Insn(Arc::new(InsnData {
            opcode,
            args: 0,
            method: None,
            ty: Some(ty.clone()),
        }))
    }
}

impl fmt::Debug for Insn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Insn({})", self.0.opcode)
    }
}

impl InsnRef for Insn {
    type Method = Method;
    type Type = Ty;

    fn opcode(&self) -> Opcode {
        self.0.opcode
    }

    fn invoke_arg_count(&self) -> usize {
        self.0.args
    }

    fn method_ref(&self) -> Option<Method> {
        self.0.method.clone()
    }

    fn type_ref(&self) -> Option<Ty> {
        self.0.ty.clone()
    }
}

/// An annotation instance.
#[derive(Clone)]
pub struct Anno(Arc<AnnoData>);

struct AnnoData {
    ty: Ty,
}

impl Anno {
    pub fn new(ty: &Ty) -> Anno {
        Anno(Arc::new(AnnoData { ty: ty.clone() }))
    }
}

impl fmt::Debug for Anno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Anno({})", self.0.ty.descriptor())
    }
}

impl Typed for Anno {
    type Type = Ty;

    fn ty(&self) -> Ty {
        self.0.ty.clone()
    }
}

impl AnnoDef for Anno {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DexBuilder;

    #[test]
    fn test_assignability_walks_the_super_chain() {
        let mut dex = DexBuilder::new();
        dex.class("Ljava/lang/Object;").external().build().unwrap();
        dex.class("La/Base;")
            .extends("Ljava/lang/Object;")
            .build()
            .unwrap();
        dex.class("La/Derived;").extends("La/Base;").build().unwrap();

        let object = dex.ty("Ljava/lang/Object;");
        let base = dex.ty("La/Base;");
        let derived = dex.ty("La/Derived;");
        let stranger = dex.ty("Lb/Stranger;");

        assert!(derived.is_assignable_to(&derived));
        assert!(derived.is_assignable_to(&base));
        assert!(derived.is_assignable_to(&object));
        assert!(base.is_assignable_to(&object));
        assert!(!base.is_assignable_to(&derived));
        assert!(!stranger.is_assignable_to(&object));
    }

    #[test]
    fn test_type_resolves_to_its_class() {
        let mut dex = DexBuilder::new();
        let built = dex.class("La/Thing;").build().unwrap();
        let ty = dex.ty("La/Thing;");
        let resolved = ty.class_def().unwrap();
        assert_eq!(resolved, built);

        let unresolved = dex.ty("La/Phantom;");
        assert!(unresolved.class_def().is_none());
    }

    #[test]
    fn test_handles_compare_by_identity() {
        let mut dex = DexBuilder::new();
        let cls = dex
            .class("La/Pair;")
            .dmethod(crate::builder::MethodBuilder::new("one"))
            .dmethod(crate::builder::MethodBuilder::new("two"))
            .build()
            .unwrap();

        let one = cls.dmethod("one").unwrap();
        let two = cls.dmethod("two").unwrap();
        assert_eq!(one, cls.dmethod("one").unwrap());
        assert_ne!(one, two);
    }
}
