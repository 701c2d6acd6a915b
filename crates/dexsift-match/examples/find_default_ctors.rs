//! Builds a small program and queries it the way a pass would: which
//! classes can be dropped, which constructors are trivial, which bodies
//! allocate.

use dexsift_fixture::{DexBuilder, FieldBuilder, Insn, MethodBuilder};
use dexsift_match::{and, insn, member, method, not, Matcher, Pattern};
use dexsift_model::{AccessFlags, ClassDef, Named, Opcode};

fn main() {
    let mut dex = DexBuilder::new();

    let object = dex
        .class("Ljava/lang/Object;")
        .external()
        .dmethod(
            MethodBuilder::new("<init>").access(AccessFlags::PUBLIC | AccessFlags::CONSTRUCTOR),
        )
        .build()
        .expect("object");
    let object_init = object.dmethod("<init>").expect("object ctor");

    let point = dex
        .class("La/Point;")
        .extends("Ljava/lang/Object;")
        .ifield(FieldBuilder::new("x", "I").access(AccessFlags::PRIVATE | AccessFlags::FINAL))
        .ifield(FieldBuilder::new("y", "I").access(AccessFlags::PRIVATE | AccessFlags::FINAL))
        .dmethod(
            MethodBuilder::new("<init>")
                .access(AccessFlags::PUBLIC | AccessFlags::CONSTRUCTOR)
                .code(vec![
                    Insn::invoke(Opcode::InvokeDirect, &object_init, 1),
                    Insn::simple(Opcode::ReturnVoid),
                ]),
        )
        .build()
        .expect("point");
    let point_init = point.dmethod("<init>").expect("point ctor");
    let point_ty = dex.ty("La/Point;");

    dex.class("La/Origin;")
        .extends("Ljava/lang/Object;")
        .keep()
        .dmethod(
            MethodBuilder::new("make")
                .access(AccessFlags::PUBLIC | AccessFlags::STATIC)
                .code(vec![
                    Insn::with_type(Opcode::NewInstance, &point_ty),
                    Insn::invoke(Opcode::InvokeDirect, &point_init, 1),
                    Insn::simple(Opcode::ReturnVoid),
                ]),
        )
        .build()
        .expect("origin");

    let default_ctor = method::is_default_constructor();
    let allocates = method::has_opcodes(Pattern::new(vec![
        insn::new_instance(),
        insn::invoke_direct_where(insn::opcode_method(method::is_constructor())),
    ]));
    let removable: Matcher<dexsift_fixture::Class> = and(member::can_delete(), not(member::keep()));

    for class in dex.classes() {
        println!(
            "{}: removable={}",
            class.name(),
            removable.matches(class)
        );
        for m in class
            .vmethods()
            .iter()
            .chain(class.dmethods().iter())
        {
            if default_ctor.matches(m) {
                println!("  {} is a default constructor", m.name());
            }
            if allocates.matches(m) {
                println!("  {} news up an instance", m.name());
            }
        }
    }
}
