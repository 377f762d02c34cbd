use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_to_index_is_one_based() {
    assert_eq!(to_index(&Value::Integer(1), 3, false), Ok(0));
    assert_eq!(to_index(&Value::Integer(3), 3, false), Ok(2));
    assert_eq!(
        to_index(&Value::Integer(4), 3, false),
        Err(Value::value_error("Index 4 out of range"))
    );
    assert_eq!(
        to_index(&Value::Integer(-1), 3, false),
        Err(Value::value_error("Index -1 out of range"))
    );
}

#[test]
fn test_to_index_insertion_point() {
    assert_eq!(to_index(&Value::Integer(4), 3, true), Ok(3));
    assert_eq!(to_index(&Value::Integer(1), 0, true), Ok(0));
    assert!(to_index(&Value::Integer(5), 3, true).is_err());
}

#[test]
fn test_to_index_requires_integer() {
    assert_eq!(
        to_index(&Value::string("1"), 3, false),
        Err(Value::type_error("Index must be an Integer, not String"))
    );
}

#[test]
fn test_text_parsing() {
    assert_eq!(parse_integer(" 42 "), Some(42));
    assert_eq!(parse_integer("4.2"), None);
    assert_eq!(parse_float("4.25"), Some(4.25));
    assert_eq!(parse_bool("true"), Some(true));
    assert_eq!(parse_bool("True"), None);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        mismatch_error(&Value::Integer(1), &Value::Nil).to_string(),
        "TypeError: Message doesn't exist for Integer and Nil"
    );
    assert_eq!(
        not_understood(&Value::string("a"), "foo:bar:").to_string(),
        "TypeError: Message #foo:bar: doesn't exist for String"
    );
    assert_eq!(
        cannot_convert("abc", "Integer").to_string(),
        "ValueError: Cannot convert abc to Integer"
    );
}
