use crate::context::Context;
use crate::error::Error;
use crate::property::Symbol;
use crate::transformation::{transformed, Transformation};

#[test]
/// Later rules see the symbols assigned by earlier ones.
fn linear_rules_apply_in_order() {
    let t = Transformation::linear(vec![
        ("b", vec![(1f64, "a")]),
        ("c", vec![(1f64, "b")]),
    ]);
    let ctx: Context = vec![("a", 2f64)].into_iter().collect();
    let derived = t.apply(&ctx).unwrap();
    assert_eq!(derived.get("b"), Ok(2f64));
    assert_eq!(derived.get("c"), Ok(2f64));
    assert_eq!(derived.get("a"), Ok(2f64));
}

#[test]
fn linear_combination() {
    let t = Transformation::linear(vec![
        ("sum", vec![(2f64, "x"), (-0.5f64, "y")]),
    ]);
    let ctx: Context = vec![("x", 3f64), ("y", 4f64)].into_iter().collect();
    assert_eq!(t.apply(&ctx).unwrap().get("sum"), Ok(4f64));
}

#[test]
fn input_context_is_untouched() {
    let t = Transformation::linear(vec![("b", vec![(3f64, "a")])]);
    let ctx: Context = vec![("a", 1f64)].into_iter().collect();
    let before = ctx.clone();
    let _ = t.apply(&ctx).unwrap();
    assert_eq!(ctx, before);
    assert!(!ctx.contains("b"));
}

#[test]
fn reassigning_an_existing_symbol() {
    let t = Transformation::linear(vec![("a", vec![(2f64, "a")])]);
    let ctx: Context = vec![("a", 1.5f64)].into_iter().collect();
    assert_eq!(t.apply(&ctx).unwrap().get("a"), Ok(3f64));
    assert_eq!(ctx.get("a"), Ok(1.5f64));
}

#[test]
fn bilinear_resolves_both_factors() {
    let t = Transformation::bilinear(vec![
        ("area", vec![(Symbol::from("w"), Symbol::from("h"))]),
        ("twice", vec![(Symbol::from(2f64), Symbol::from("area")), (Symbol::from(1f64), Symbol::from(0.5f64))]),
    ]);
    let ctx: Context = vec![("w", 3f64), ("h", 4f64)].into_iter().collect();
    let derived = t.apply(&ctx).unwrap();
    assert_eq!(derived.get("area"), Ok(12f64));
    assert_eq!(derived.get("twice"), Ok(24.5f64));
}

#[test]
fn missing_source_names_the_symbol() {
    let t = Transformation::linear(vec![
        ("b", vec![(1f64, "a")]),
        ("c", vec![(1f64, "missing")]),
    ]);
    let ctx: Context = vec![("a", 2f64)].into_iter().collect();
    assert_eq!(t.apply(&ctx), Err(Error::ContextResolution("missing".to_string())));
}

#[test]
fn no_transformation_is_identity() {
    let ctx: Context = vec![("a", 2f64)].into_iter().collect();
    assert_eq!(transformed(&ctx, None), Ok(ctx.clone()));
}

#[test]
fn transformations_compare_structurally() {
    let a = Transformation::linear(vec![("b", vec![(1f64, "a")])]);
    let b = Transformation::linear(vec![("b".to_string(), vec![(1f64, "a".to_string())])]);
    let c = Transformation::linear(vec![("b", vec![(2f64, "a")])]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.assigned(), vec!["b"]);
}
