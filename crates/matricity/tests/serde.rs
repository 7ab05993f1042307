//! JSON form of domains, one-hot vectors and lookup errors.
#![cfg(feature = "serde")]

use matricity::{Domain, Factors, FiniteDomain, LookupError, OneHot, Product};

#[test]
fn domain_is_a_json_array() {
    let d = Domain::new(["less", "same", "more"]);
    assert_eq!(serde_json::to_string(&d).unwrap(), r#"["less","same","more"]"#);

    let back: Domain<String> = serde_json::from_str(r#"["less","same","more"]"#).unwrap();
    assert_eq!(back.decode(2usize).as_deref(), Some("more"));
}

#[test]
fn deserialized_duplicates_collapse() {
    let d: Domain<u8> = serde_json::from_str("[3, 1, 3, 2]").unwrap();
    assert_eq!(d.size(), 3);
    assert_eq!(d.index_of(&2), Ok(2));
}

#[test]
fn product_is_a_tuple_of_components() {
    let p = Domain::new([0u8, 1]).product(&Domain::new(['x', 'y', 'z']));
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"[[0,1],["x","y","z"]]"#);

    let back: Product<(Domain<u8>, Domain<char>)> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
    assert_eq!(back.decode(4usize), Some((1, 'y')));
}

#[test]
fn onehot_and_error_fields() {
    let v = OneHot::new(7, 16);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(serde_json::from_str::<OneHot>(&json).unwrap(), v);

    let e = LookupError::in_component(2);
    let json = serde_json::to_string(&e).unwrap();
    assert_eq!(json, r#"{"NotMember":{"component":2}}"#);
    assert_eq!(serde_json::from_str::<LookupError>(&json).unwrap(), e);
    assert_eq!(serde_json::to_string(&LookupError::Overflow).unwrap(), r#""Overflow""#);
}
