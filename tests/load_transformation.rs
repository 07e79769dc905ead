//! Test loading of contexts, transformations and forge settings from disk.

extern crate libwaveforge;
extern crate serde_json;
extern crate tempdir;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tempdir::TempDir;

use libwaveforge::{Context, Forge, ForgeSpec, Property, Segment, SegmentGroup, Transformation, Value};
use libwaveforge::atoms::FLAT;

fn write_file(path: &Path, contents: &str) {
    let mut f = File::create(path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
}

fn read_file(path: &Path) -> String {
    let mut contents = String::new();
    File::open(path).unwrap().read_to_string(&mut contents).unwrap();
    contents
}

#[test]
fn forge_from_files() {
    let dir = TempDir::new("libwaveforge").unwrap();
    let spec_path = dir.path().join("spec.json");
    let ctx_path = dir.path().join("context.json");
    let trans_path = dir.path().join("transformation.json");

    write_file(&spec_path, r#"{ "sample_rate": 4.0, "strict_groups": true }"#);
    write_file(&ctx_path, r#"{ "a": 0.5, "level": 2.0 }"#);
    let transformation = Transformation::linear(vec![
        ("b", vec![(1f64, "a")]),
        ("total", vec![(1f64, "a"), (1f64, "b")]),
    ]);
    write_file(&trans_path, &serde_json::to_string(&transformation).unwrap());

    let spec: ForgeSpec = serde_json::from_str(&read_file(&spec_path)).unwrap();
    assert!(spec.strict_groups());
    assert!(!spec.check_elements());
    let ctx: Context = serde_json::from_str(&read_file(&ctx_path)).unwrap();
    let loaded: Transformation = serde_json::from_str(&read_file(&trans_path)).unwrap();
    assert_eq!(loaded, transformation);

    let group = SegmentGroup::new(vec![
        Segment::new(FLAT, "a").with("amplitude", "level"),
        Segment::new(FLAT, "b").with("amplitude", 0f64),
    ], "total").with_transformation(loaded);
    let out = group.forge(&spec, &ctx).unwrap();
    assert_eq!(out.to_vec(), vec![2f64, 2f64, 0f64, 0f64]);
}

#[test]
fn bad_sample_rate_in_file() {
    let dir = TempDir::new("libwaveforge").unwrap();
    let spec_path = dir.path().join("spec.json");
    write_file(&spec_path, r#"{ "sample_rate": -1.0 }"#);
    assert!(serde_json::from_str::<ForgeSpec>(&read_file(&spec_path)).is_err());
}

#[test]
/// Strings are symbols; everything else is a literal.
fn properties_from_json() {
    let props: Vec<Property> = serde_json::from_str(r#"["freq", 1.5, null, [1.0, 2.0]]"#).unwrap();
    assert_eq!(props, vec![
        Property::symbol("freq"),
        Property::from(1.5f64),
        Property::none(),
        Property::Literal(Value::List(vec![1f64, 2f64])),
    ]);
}

#[test]
fn context_serializes_as_plain_map() {
    let ctx = Context::new().with("b", 2f64).with("a", 1f64);
    assert_eq!(serde_json::to_string(&ctx).unwrap(), r#"{"a":1.0,"b":2.0}"#);
}
