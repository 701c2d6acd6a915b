/*! Accessor contracts, one per program-element kind.
 *
 * Each kind exposes its own accessor set rather than funneling through a
 * shared element interface; the capability traits at the top cover the
 * accessors that genuinely recur across kinds. Everything here is read-only,
 * and the `Send + Sync` bounds encode the requirement that element handles
 * tolerate concurrent read access from parallel pass workers.
 */

use crate::access::AccessFlags;
use crate::opcode::Opcode;

/// Kinds carrying a modifier bitmask.
pub trait HasAccessFlags {
    fn access(&self) -> AccessFlags;
}

/// Kinds with a stable, unqualified name.
pub trait Named {
    fn name(&self) -> &str;
}

/// Members declared on a class.
pub trait Member {
    type Type: TypeRef;

    /// The type of the declaring class.
    fn owner(&self) -> Self::Type;
}

/// Kinds with a declared type of their own (fields, annotations, classes).
pub trait Typed {
    type Type: TypeRef;

    fn ty(&self) -> Self::Type;
}

/// Kinds that may carry an annotation set.
pub trait Annotated {
    type Anno: AnnoDef;

    /// `None` when the element carries no annotation set at all, which is
    /// distinct from carrying an empty one.
    fn annotations(&self) -> Option<&[Self::Anno]>;
}

/// Kinds that may originate outside the program being optimized.
pub trait MaybeExternal {
    fn is_external(&self) -> bool;
}

/// A class definition.
pub trait ClassDef: HasAccessFlags + Clone + Send + Sync + 'static {
    type Method: MethodDef;
    type Field: FieldDef;

    /// Virtual methods, in declaration order.
    fn vmethods(&self) -> &[Self::Method];

    /// Direct (static, private, constructor) methods, in declaration order.
    fn dmethods(&self) -> &[Self::Method];

    /// Instance fields, in declaration order.
    fn ifields(&self) -> &[Self::Field];

    /// Static fields, in declaration order.
    fn sfields(&self) -> &[Self::Field];

    /// Whether the class carries a class-body data item.
    fn has_class_data(&self) -> bool;
}

/// A method definition.
pub trait MethodDef: HasAccessFlags + Named + Clone + Send + Sync + 'static {
    type Type: TypeRef;
    type Insn: InsnRef;

    /// Declared parameter types, in order. The receiver is not included.
    fn param_types(&self) -> &[Self::Type];

    /// The linearized list of executable instructions, pseudo-instructions
    /// already filtered out. `None` for methods without a body (native,
    /// abstract).
    fn code(&self) -> Option<&[Self::Insn]>;
}

/// A field definition. Field-specific accessors are covered entirely by the
/// capability traits ([`Typed`] for the declared type, [`Member`] for the
/// declaring class).
pub trait FieldDef: HasAccessFlags + Named + Clone + Send + Sync + 'static {}

/// One executable instruction in a method body.
pub trait InsnRef: Clone + Send + Sync + 'static {
    type Method: MethodDef;
    type Type: TypeRef;

    fn opcode(&self) -> Opcode;

    /// Argument-register count for invoke-family instructions, normalized so
    /// the base and `/range` encodings report the same number. Unspecified
    /// for other opcodes.
    fn invoke_arg_count(&self) -> usize;

    /// The referenced method operand, for opcodes where
    /// [`Opcode::carries_method_ref`] holds.
    fn method_ref(&self) -> Option<Self::Method>;

    /// The referenced type operand, for opcodes where
    /// [`Opcode::carries_type_ref`] holds.
    fn type_ref(&self) -> Option<Self::Type>;
}

/// A reference to a type, with access to the hierarchy oracle.
pub trait TypeRef: Named + Clone + Send + Sync + 'static {
    type Class: ClassDef;

    /// True iff `self` is `supertype` or one of its transitive subtypes.
    /// Reachability is owned by the hierarchy collaborator, not computed
    /// here.
    fn is_assignable_to(&self, supertype: &Self) -> bool;

    /// The class definition behind this type, when one is resolvable.
    /// `None` for primitive, array, and external types.
    fn class_def(&self) -> Option<Self::Class>;
}

/// An annotation instance, identified by its annotation type.
pub trait AnnoDef: Typed + Clone + Send + Sync + 'static {}
