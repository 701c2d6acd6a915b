use dexsift_fixture::{Class, DexBuilder, Field, FieldBuilder, MethodBuilder};
use dexsift_match::{
    all_dmethods, all_ifields, all_sfields, all_vmethods, always, any_annos, any_dmethods,
    any_ifields, any_sfields, any_vmethods, at_least_n_dmethods, at_least_n_ifields,
    at_least_n_sfields, at_least_n_vmethods, at_most_n_dmethods, at_most_n_ifields,
    at_most_n_sfields, at_most_n_vmethods, exactly_n_dmethods, exactly_n_ifields,
    exactly_n_sfields, exactly_n_vmethods, member, not, ty, Matcher,
};
use dexsift_model::AccessFlags;

/// Two final instance fields, one non-final, a mix of virtual methods.
fn widget(dex: &mut DexBuilder) -> Class {
    dex.class("La/Widget;")
        .vmethod(MethodBuilder::new("draw").access(AccessFlags::PUBLIC | AccessFlags::FINAL))
        .vmethod(MethodBuilder::new("resize"))
        .dmethod(
            MethodBuilder::new("create").access(AccessFlags::PUBLIC | AccessFlags::STATIC),
        )
        .ifield(FieldBuilder::new("width", "I").access(AccessFlags::PRIVATE | AccessFlags::FINAL))
        .ifield(FieldBuilder::new("height", "I").access(AccessFlags::PRIVATE | AccessFlags::FINAL))
        .ifield(FieldBuilder::new("dirty", "Z").access(AccessFlags::PRIVATE))
        .sfield(
            FieldBuilder::new("COUNT", "I")
                .access(AccessFlags::PUBLIC | AccessFlags::STATIC | AccessFlags::FINAL),
        )
        .build()
        .unwrap()
}

fn empty_class(dex: &mut DexBuilder) -> Class {
    dex.class("La/Hollow;").build().unwrap()
}

#[test]
fn test_any_requires_a_witness() {
    let mut dex = DexBuilder::new();
    let widget = widget(&mut dex);
    let hollow = empty_class(&mut dex);

    let any_final: Matcher<Class> = any_vmethods(member::is_final());
    assert!(any_final.matches(&widget));

    let any_static: Matcher<Class> = any_vmethods(member::is_static());
    assert!(!any_static.matches(&widget));

    // `any` has no vacuous case
    let any_at_all: Matcher<Class> = any_vmethods(always());
    assert!(!any_at_all.matches(&hollow));
}

#[test]
fn test_all_is_vacuously_true_on_empty() {
    let mut dex = DexBuilder::new();
    let widget = widget(&mut dex);
    let hollow = empty_class(&mut dex);

    let all_reject: Matcher<Class> = all_vmethods(not(always()));
    assert!(all_reject.matches(&hollow));
    assert!(!all_reject.matches(&widget));

    let all_accept: Matcher<Class> = all_vmethods(always());
    assert!(all_accept.matches(&widget));

    let all_final: Matcher<Class> = all_vmethods(member::is_final());
    assert!(!all_final.matches(&widget));
}

#[test]
fn test_at_least_zero_is_always_true() {
    let mut dex = DexBuilder::new();
    let widget = widget(&mut dex);
    let hollow = empty_class(&mut dex);

    let zero: Matcher<Class> = at_least_n_ifields(0, not(always()));
    assert!(zero.matches(&widget));
    assert!(zero.matches(&hollow));
}

#[test]
fn test_at_least_counts_matches() {
    let mut dex = DexBuilder::new();
    let widget = widget(&mut dex);

    let two_final: Matcher<Class> = at_least_n_ifields(2, member::is_final());
    assert!(two_final.matches(&widget));

    let three_final: Matcher<Class> = at_least_n_ifields(3, member::is_final());
    assert!(!three_final.matches(&widget));

    let one_vmethod: Matcher<Class> = at_least_n_vmethods(1, always());
    assert!(one_vmethod.matches(&widget));
}

#[test]
fn test_at_most_bounds_the_match_count() {
    let mut dex = DexBuilder::new();
    let widget = widget(&mut dex);

    // two final instance fields exceed a bound of one
    let bound_one: Matcher<Class> = at_most_n_ifields(1, member::is_final());
    assert!(!bound_one.matches(&widget));

    let bound_two: Matcher<Class> = at_most_n_ifields(2, member::is_final());
    assert!(bound_two.matches(&widget));

    // non-final fields do not count against the bound
    let mut other = DexBuilder::new();
    let one_final = other
        .class("La/Single;")
        .ifield(FieldBuilder::new("id", "J").access(AccessFlags::PRIVATE | AccessFlags::FINAL))
        .ifield(FieldBuilder::new("a", "I"))
        .ifield(FieldBuilder::new("b", "I"))
        .build()
        .unwrap();
    let bound_one: Matcher<Class> = at_most_n_ifields(1, member::is_final());
    assert!(bound_one.matches(&one_final));

    let none_allowed: Matcher<Class> = at_most_n_vmethods(0, always());
    assert!(!none_allowed.matches(&widget));
}

#[test]
fn test_exactly_scans_the_whole_collection() {
    let mut dex = DexBuilder::new();
    let widget = widget(&mut dex);
    let hollow = empty_class(&mut dex);

    let no_static_dmethods: Matcher<Class> = exactly_n_dmethods(0, member::is_static());
    assert!(!no_static_dmethods.matches(&widget));
    assert!(no_static_dmethods.matches(&hollow));

    let one_static: Matcher<Class> = exactly_n_dmethods(1, member::is_static());
    assert!(one_static.matches(&widget));

    let one_sfield: Matcher<Class> = exactly_n_sfields(1, always());
    assert!(one_sfield.matches(&widget));
    assert!(!one_sfield.matches(&hollow));
}

#[test]
fn test_field_and_dmethod_existence() {
    let mut dex = DexBuilder::new();
    let widget = widget(&mut dex);

    let has_ifield: Matcher<Class> = any_ifields(always());
    let has_sfield: Matcher<Class> = any_sfields(always());
    let has_factory: Matcher<Class> = any_dmethods(member::named("create"));
    let all_dmethods_static: Matcher<Class> = all_dmethods(member::is_static());

    assert!(has_ifield.matches(&widget));
    assert!(has_sfield.matches(&widget));
    assert!(has_factory.matches(&widget));
    assert!(all_dmethods_static.matches(&widget));
}

#[test]
fn test_every_collection_is_quantifiable() {
    let mut dex = DexBuilder::new();
    let widget = widget(&mut dex);

    let m: Matcher<Class> = exactly_n_vmethods(2, always());
    assert!(m.matches(&widget));
    let m: Matcher<Class> = exactly_n_ifields(2, member::is_final());
    assert!(m.matches(&widget));
    let m: Matcher<Class> = all_ifields(not(member::is_static()));
    assert!(m.matches(&widget));
    let m: Matcher<Class> = all_sfields(member::is_static());
    assert!(m.matches(&widget));
    let m: Matcher<Class> = at_least_n_dmethods(1, member::is_static());
    assert!(m.matches(&widget));
    let m: Matcher<Class> = at_least_n_sfields(1, member::is_final());
    assert!(m.matches(&widget));
    let m: Matcher<Class> = at_most_n_dmethods(0, member::is_final());
    assert!(m.matches(&widget));
    let m: Matcher<Class> = at_most_n_sfields(1, always());
    assert!(m.matches(&widget));
}

#[test]
fn test_any_annos_distinguishes_absent_set_from_no_match() {
    let mut dex = DexBuilder::new();
    let plain = dex.class("La/Plain;").build().unwrap();
    let marked = dex
        .class("La/Marked;")
        .annotation("Lanno/Keep;")
        .build()
        .unwrap();

    let keep_anno: Matcher<Class> =
        any_annos(member::as_type(member::named("Lanno/Keep;")));
    let other_anno: Matcher<Class> =
        any_annos(member::as_type(member::named("Lanno/Debug;")));

    // no annotation set at all
    assert!(!keep_anno.matches(&plain));
    // set present, no member matches
    assert!(!other_anno.matches(&marked));
    assert!(keep_anno.matches(&marked));
}

#[test]
fn test_annotations_on_fields() {
    let mut dex = DexBuilder::new();
    let cls = dex
        .class("La/Holder;")
        .ifield(FieldBuilder::new("cache", "Ljava/lang/Object;").annotation("Lanno/Inject;"))
        .ifield(FieldBuilder::new("plain", "I"))
        .build()
        .unwrap();

    let injected: Matcher<Field> = any_annos(member::as_type(member::named("Lanno/Inject;")));
    assert!(injected.matches(&cls.ifield("cache").unwrap()));
    assert!(!injected.matches(&cls.ifield("plain").unwrap()));
}

#[test]
fn test_quantifiers_on_method_annotations() {
    let mut dex = DexBuilder::new();
    let cls = dex
        .class("La/Api;")
        .vmethod(MethodBuilder::new("visible").annotation("Lanno/Export;"))
        .vmethod(MethodBuilder::new("hidden"))
        .build()
        .unwrap();

    let exported = any_annos(member::as_type(member::named("Lanno/Export;")));
    assert!(exported.matches(&cls.vmethod("visible").unwrap()));
    assert!(!exported.matches(&cls.vmethod("hidden").unwrap()));

    let class_has_exported: Matcher<Class> = any_vmethods(exported);
    assert!(class_has_exported.matches(&cls));
}

#[test]
fn test_assignability_reaches_through_field_types() {
    let mut dex = DexBuilder::new();
    dex.class("Ljava/lang/Object;").external().build().unwrap();
    dex.class("La/View;")
        .extends("Ljava/lang/Object;")
        .build()
        .unwrap();
    dex.class("La/Button;").extends("La/View;").build().unwrap();

    let holder = dex
        .class("La/Holder;")
        .ifield(FieldBuilder::new("button", "La/Button;"))
        .ifield(FieldBuilder::new("tag", "Ljava/lang/String;"))
        .build()
        .unwrap();

    let view = dex.ty("La/View;");
    let holds_view: Matcher<Class> =
        any_ifields(member::as_type(ty::is_assignable_to(view)));
    assert!(holds_view.matches(&holder));

    let mut bare = DexBuilder::new();
    let unrelated = bare.class("Lb/Other;").build().unwrap();
    assert!(!holds_view.matches(&unrelated));
}
