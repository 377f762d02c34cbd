use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_set_get_delete() {
    let mut scope = GlobalScope::new();
    assert!(scope.is_empty());

    scope.set("x", Value::Integer(5));
    assert_eq!(scope.get("x"), Some(Value::Integer(5)));
    assert_eq!(scope.len(), 1);

    scope.set("x", Value::Integer(6));
    assert_eq!(scope.get("x"), Some(Value::Integer(6)));

    assert_eq!(scope.delete("x"), Some(Value::Integer(6)));
    assert_eq!(scope.get("x"), None);
    assert_eq!(scope.delete("x"), None);
}

#[test]
fn test_names() {
    let mut scope = GlobalScope::new();
    scope.set("a", Value::Nil);
    scope.set("b", Value::Bool(true));

    let mut names = scope.names();
    names.sort();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_usable_as_trait_object() {
    let mut scope = GlobalScope::new();
    let dynamic: &mut dyn Scope = &mut scope;
    dynamic.set("y", Value::string("hi"));
    assert_eq!(dynamic.get("y"), Some(Value::string("hi")));
}
