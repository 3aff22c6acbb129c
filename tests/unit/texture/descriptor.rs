use super::*;

#[test]
fn param_order_does_not_affect_identity() {
    let a = ContentDescriptor::new(ContentKind::Label)
        .with("text", "HI")
        .with("background", "#000000");
    let b = ContentDescriptor::new(ContentKind::Label)
        .with("background", "#000000")
        .with("text", "HI");
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn fingerprint_separates_kind_and_values() {
    let label = ContentDescriptor::new(ContentKind::Label).with("text", "A");
    let code = ContentDescriptor::new(ContentKind::Code).with("text", "A");
    assert_ne!(label.fingerprint(), code.fingerprint());

    // Length prefixes keep key/value boundaries unambiguous.
    let ab = ContentDescriptor::new(ContentKind::Label).with("ab", "c");
    let a_bc = ContentDescriptor::new(ContentKind::Label).with("a", "bc");
    assert_ne!(ab.fingerprint(), a_bc.fingerprint());
}

#[test]
fn lines_split_on_newlines() {
    let d = ContentDescriptor::code("main.ts", &["import x", "", "const y = 1"]);
    assert_eq!(d.lines("text"), vec!["import x", "", "const y = 1"]);
    assert!(d.lines("missing").is_empty());
    assert_eq!(d.param_or("title", "untitled"), "main.ts");
    assert_eq!(d.param_or("nope", "untitled"), "untitled");
}

#[test]
fn kind_serializes_lowercase() {
    let d = ContentDescriptor::label("DEVELOPER", "#1a0a1a", "#ff6b6b");
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["kind"], "label");
    let back: ContentDescriptor = serde_json::from_value(json).unwrap();
    assert_eq!(back, d);
}
