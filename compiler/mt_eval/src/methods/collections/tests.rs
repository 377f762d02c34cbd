use super::*;
use crate::tests::{print, value, Session};
use pretty_assertions::assert_eq;

#[test]
fn test_array_queries() {
    assert_eq!(value("#(1 2 3) size"), Value::Integer(3));
    assert_eq!(value("#(1 2 3) len"), Value::Integer(3));
    assert_eq!(value("#(1 2 3) first"), Value::Integer(1));
    assert_eq!(value("#(1 2 3) last"), Value::Integer(3));
    assert_eq!(value("#() isEmpty"), Value::Bool(true));
    assert_eq!(value("#(1) notEmpty"), Value::Bool(true));
    assert_eq!(print("#(1 2 3) reversed"), "#(3 2 1)");
    assert_eq!(print("#() first"), "ValueError: Index 1 out of range");
}

#[test]
fn test_array_concatenation_and_equality() {
    assert_eq!(print("#(1 2) + #(3)"), "#(1 2 3)");
    assert_eq!(value("#(1 #(2)) == #(1 #(2))"), Value::Bool(true));
    assert_eq!(value("#(1 2) == #(2 1)"), Value::Bool(false));
    assert_eq!(print("#(1) + 1"), "TypeError: Message doesn't exist for Array and Integer");
}

#[test]
fn test_array_containing_itself() {
    let mut session = Session::new();
    session.eval("a := #(1 2). b := #(1 2)");
    assert_eq!(session.print("a at: 1 put: a"), "#(#(...) 2)");
    assert_eq!(session.print("a printString"), "'#(#(...) 2)'");
    assert_eq!(session.value("a == a"), Value::Bool(true));
    assert_eq!(session.value("a == b"), Value::Bool(false));
    session.eval("b at: 1 put: b");
    assert_eq!(session.value("a == b"), Value::Bool(true));
    assert_eq!(session.value("a includes: a"), Value::Bool(true));
}

#[test]
fn test_at_put_returns_the_array() {
    let mut session = Session::new();
    session.eval("a := #(1 2 3)");
    assert_eq!(session.print("a at: 2 put: #x"), "#(1 #x 3)");
    assert_eq!(session.print("a"), "#(1 #x 3)");
    assert_eq!(session.print("a at: 5 put: 0"), "ValueError: Index 5 out of range");
}

#[test]
fn test_at_insert() {
    let mut session = Session::new();
    session.eval("a := #(1 2 3)");
    assert_eq!(session.print("a at: 1 insert: 0"), "#(0 1 2 3)");
    assert_eq!(session.print("a at: 5 insert: 4"), "#(0 1 2 3 4)");
    assert_eq!(session.print("a at: 7 insert: 9"), "ValueError: Index 7 out of range");
}

#[test]
fn test_at_put_stores_errors() {
    let mut session = Session::new();
    session.eval("a := #(1 2)");
    session.eval("a at: 1 put: 1 / 0");
    assert_eq!(session.print("(a at: 1) isError"), "true");
    assert_eq!(session.value("a includes: (a at: 1)"), Value::Bool(true));
}

#[test]
fn test_includes() {
    assert_eq!(value("#(1 'a' #b) includes: 'a'"), Value::Bool(true));
    assert_eq!(value("#(1 'a' #b) includes: #a"), Value::Bool(false));
}

#[test]
fn test_iteration() {
    let mut session = Session::new();
    session.eval("sum := 0");
    let results = session.eval("#(1 2 3) do: [:each | sum := sum + each]");
    assert_eq!(results[0].value, Value::Bool(true));
    assert!(!results[0].is_printable());
    assert_eq!(session.value("sum"), Value::Integer(6));

    assert_eq!(print("#(1 2 3) collect: [:each | each * 10]"), "#(10 20 30)");
    assert_eq!(print("#(1 2 3) map: [:i :each | i]"), "#(1 2 3)");
    assert_eq!(print("#(1 2 3 4) reject: [:each | each odd]"), "#(2 4)");
    assert_eq!(value("#(1 2 3) detect: [:each | each > 5]"), Value::Nil);
}

#[test]
fn test_iteration_block_arity() {
    assert_eq!(
        print("#(1 2) do: [3]"),
        "ValueError: CodeBlock must have 1 or 2 arguments"
    );
    assert_eq!(print("#(1 2) do: 3"), "TypeError: Message doesn't exist for Array and Integer");
}

#[test]
fn test_iteration_sees_a_snapshot() {
    let mut session = Session::new();
    session.eval("a := #(1 2 3). n := 0");
    session.eval("a do: [:each | a at: 1 insert: 0. n := n + 1]");
    assert_eq!(session.value("n"), Value::Integer(3));
    assert_eq!(session.value("a size"), Value::Integer(6));
}

#[test]
fn test_inject() {
    assert_eq!(value("#(1 2 3) inject: 10 into: [:acc :each | acc + each]"), Value::Integer(16));
    assert_eq!(value("#() inject: 10 into: [:acc :each | acc + each]"), Value::Integer(10));
    assert_eq!(print("#(1) inject: 0"), "TypeError: Message #inject: doesn't exist for Array");
}

#[test]
fn test_array_conversions() {
    assert_eq!(print("#(1 2 255) toByteArray"), "#[1 2 255]");
    assert_eq!(print("#(1 256) toByteArray"), "TypeError: Invalid conversion to ByteArray");
    assert_eq!(value("#(1 'a') toString"), Value::string("#(1 'a')"));
    assert_eq!(print("#(1 2) toArray"), "#(1 2)");
}

#[test]
fn test_byte_arrays() {
    assert_eq!(value("#[1 2 3] size"), Value::Integer(3));
    assert_eq!(value("#[1 2 3] at: 2"), Value::Integer(2));
    assert_eq!(value("#[7 8] last"), Value::Integer(8));
    assert_eq!(print("#[1 2] + #[3]"), "#[1 2 3]");
    assert_eq!(print("#[1 2] reversed"), "#[2 1]");
    assert_eq!(print("#[1 2] at: 1 put: 200"), "#[200 2]");
    assert_eq!(print("#[1 2] toArray"), "#(1 2)");
    assert_eq!(print("#[1 2] toString"), "TypeError: Invalid conversion to String");
    assert_eq!(print("#[1 2] at: 1 insert: 0"), "TypeError: Message #at:insert: doesn't exist for ByteArray");
}

#[test]
fn test_as_byte() {
    assert_eq!(as_byte(&Value::Integer(0)), Some(0));
    assert_eq!(as_byte(&Value::Integer(255)), Some(255));
    assert_eq!(as_byte(&Value::Integer(256)), None);
    assert_eq!(as_byte(&Value::Integer(-1)), None);
    assert_eq!(as_byte(&Value::string("1")), None);
}
