//! Behavioural tests for the class name composer.

use std::sync::Arc;

use serde_json::json;
use test_case::test_case;

use super::{ClassMap, ClassToken, Stringable, compose};

struct Variant(&'static str);

impl Stringable for Variant {
    fn to_class_string(&self) -> String {
        format!("variant-{}", self.0)
    }
}

struct Blank;

impl Stringable for Blank {
    fn to_class_string(&self) -> String {
        String::new()
    }
}

#[test]
fn test_no_arguments_is_empty() {
    assert_eq!(class_names!(), "");
    assert_eq!(compose(Vec::<ClassToken>::new()), "");
}

#[test]
fn test_plain_text_joined_with_single_space() {
    assert_eq!(class_names!("a", "b"), "a b");
}

#[test]
fn test_falsy_values_are_dropped() {
    let classes = class_names!("a", None::<&str>, (), false, 0, "");
    assert_eq!(classes, "a");
}

#[test]
fn test_sequence_flattens_in_order() {
    assert_eq!(class_names!(["a", "b"], "c"), "a b c");
}

#[test]
fn test_map_keeps_key_order_and_drops_falsy() {
    let map = class_map! { "foo" => true, "bar" => false, "baz" => 1 };
    assert_eq!(class_names!(map), "foo baz");
}

#[test]
fn test_nested_mixed_arguments() {
    let classes = class_names!(
        "a",
        class_list!["b", class_map! { "c" => true, "d" => false }],
        "e"
    );
    assert_eq!(classes, "a b c e");
}

#[test]
fn test_empty_sequence_contributes_nothing() {
    assert_eq!(class_names!("a", Vec::<&str>::new(), "b"), "a b");
    assert_eq!(class_names!(class_list![false, "", 0]), "");
}

#[test]
fn test_numbers_render_as_text() {
    assert_eq!(class_names!(1, 2.5, -3, 4.0), "1 2.5 -3 4");
    assert_eq!(class_names!(f64::NAN, -0.0, "x"), "x");
}

#[test]
fn test_extreme_floats_use_exponent_form() {
    assert_eq!(class_names!(1e21, 1e-7), "1e+21 1e-7");
}

#[test]
fn test_true_alone_is_ignored() {
    assert_eq!(class_names!(true, "a"), "a");
}

#[test]
fn test_custom_conversion_is_used_verbatim() {
    let classes = class_names!("btn", ClassToken::custom(Variant("primary")));
    assert_eq!(classes, "btn variant-primary");
}

#[test]
fn test_custom_conversion_empty_result_is_still_pushed() {
    let classes = class_names!("a", ClassToken::custom(Blank), "b");
    assert_eq!(classes, "a  b");
}

#[test]
fn test_shared_custom_value() {
    let shared: Arc<dyn Stringable> = Arc::new(Variant("ghost"));
    let first = class_names!(Arc::clone(&shared));
    let second = class_names!(shared);
    assert_eq!(first, "variant-ghost");
    assert_eq!(first, second);
}

#[test]
fn test_duplicates_are_preserved() {
    assert_eq!(class_names!("a", "a", ["a"]), "a a a");
}

#[test]
fn test_deeply_nested_sequences() {
    let classes = class_names!(class_list![class_list![class_list!["x"], "y"]], "z");
    assert_eq!(classes, "x y z");
}

#[test]
fn test_reinserted_map_key_keeps_first_position() {
    let mut map = ClassMap::new();
    map.insert("first", false);
    map.insert("second", true);
    map.insert("first", true);
    assert_eq!(class_names!(map), "first second");
}

#[test_case(json!([]), "" ; "empty array")]
#[test_case(json!(["a", null, false, 0, ""]), "a" ; "falsy members")]
#[test_case(json!(["a", ["b", {"c": true, "d": false}], "e"]), "a b c e" ; "nested")]
#[test_case(json!([{"z": 1, "y": 0, "x": "on"}]), "z x" ; "object order")]
#[test_case(json!([1, 2.5, true]), "1 2.5" ; "numbers and booleans")]
fn test_json_arguments(value: serde_json::Value, expected: &str) {
    let serde_json::Value::Array(args) = value else {
        panic!("test arguments must be an array");
    };
    assert_eq!(compose(args), expected);
}

#[test]
fn test_deserialized_token() {
    let token: ClassToken = serde_json::from_str(r#"["card", {"card--active": true}]"#).unwrap();
    assert_eq!(class_names!(token), "card card--active");
}

#[test]
fn test_idempotent_for_text_tokens() {
    let once = class_names!("a", "b", "c");
    let twice = class_names!(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_deterministic() {
    let build = || {
        class_names!(
            "a",
            class_map! { "b" => true, "c" => Some("yes") },
            class_list![1, "d"]
        )
    };
    assert_eq!(build(), build());
    assert_eq!(build(), "a b c 1 d");
}
