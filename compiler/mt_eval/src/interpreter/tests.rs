use super::*;
use crate::tests::Session;
use mt_lexer::tokenize_significant;
use pretty_assertions::assert_eq;

fn statement_texts(source: &str) -> Vec<String> {
    let tokens = tokenize_significant(source);
    split_statements(&tokens)
        .into_iter()
        .map(|statement| {
            statement
                .iter()
                .map(|token| token.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[test]
fn test_split_on_top_level_periods() {
    assert_eq!(statement_texts("a := 1. b := 2"), vec!["a := 1", "b := 2"]);
    assert_eq!(statement_texts("1. . 2."), vec!["1", "2"]);
    assert!(statement_texts("").is_empty());
}

#[test]
fn test_split_keeps_nested_periods() {
    assert_eq!(
        statement_texts("[:x | x. x]. (1. 2)"),
        vec!["[ : x | x . x ]", "( 1 . 2 )"]
    );
}

#[test]
fn test_significant_drops_trivia() {
    let tokens = mt_lexer::tokenize("3 \"c\" + 4");
    let kinds: Vec<_> = significant(&tokens).iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Integer, TokenKind::Plus, TokenKind::Integer]);
}

#[test]
fn test_free_evaluate() {
    let mut scope = crate::GlobalScope::new();
    let mut emitter = mt_diagnostic::emitter::BufferEmitter::new();
    let tokens = mt_lexer::tokenize("x := 2. x * 21");
    let results = evaluate(&tokens, &mut scope, &mut emitter);
    assert_eq!(results.last().map(|r| r.value.clone()), Some(Value::Integer(42)));
    assert_eq!(scope.get("x"), Some(Value::Integer(2)));
    assert_eq!(scope.get(LAST_RESULT), Some(Value::Integer(42)));
    assert!(emitter.is_empty());
}

#[test]
fn test_call_value_on_non_block() {
    let mut session = Session::new();
    let answer = session.with_interpreter(|interp| interp.call_value(&Value::Integer(3), vec![]));
    assert_eq!(answer.map(Object::into_value), Ok(Value::Integer(3)));
}

#[test]
fn test_lookup_order_frames_then_scope() {
    let mut session = Session::new();
    session.eval("x := 1");
    session.with_interpreter(|interp| {
        assert_eq!(interp.lookup_variable("x"), Some(Value::Integer(1)));
        let block = CodeBlock::new(vec!["x".into()], vec![]);
        let _frame = interp.push_frame(Activation::for_call(&block, vec![Value::Integer(2)]));
    });
    // The guard popped the frame.
    session.with_interpreter(|interp| {
        assert_eq!(interp.lookup_variable("x"), Some(Value::Integer(1)));
        assert_eq!(interp.config().max_block_depth, EvalConfig::default().max_block_depth);
    });
}

#[test]
fn test_lookup_skips_caller_frames() {
    let mut session = Session::new();
    session.eval("x := 1");
    session.with_interpreter(|interp| {
        let caller = CodeBlock::new(vec!["x".into()], vec![]);
        let mut outer = interp.push_frame(Activation::for_call(&caller, vec![Value::Integer(2)]));
        let callee = CodeBlock::new(vec!["y".into()], vec![]);
        let mut inner = outer.push_frame(Activation::for_call(&callee, vec![Value::Integer(3)]));
        assert_eq!(inner.lookup_variable("x"), Some(Value::Integer(1)));
        assert_eq!(inner.lookup_variable("y"), Some(Value::Integer(3)));
        inner.assign("x", Value::Integer(4));
    });
    assert_eq!(session.value("x"), Value::Integer(4));
}

#[test]
fn test_assign_prefers_frame_binding() {
    let mut session = Session::new();
    session.eval("x := 1");
    session.with_interpreter(|interp| {
        let block = CodeBlock::new(vec!["x".into()], vec![]);
        let mut frame = interp.push_frame(Activation::for_call(&block, vec![Value::Integer(2)]));
        frame.assign("x", Value::Integer(3));
        frame.assign("y", Value::Integer(4));
        assert_eq!(frame.lookup_variable("x"), Some(Value::Integer(3)));
    });
    assert_eq!(session.value("x"), Value::Integer(1));
    assert_eq!(session.value("y"), Value::Integer(4));
}
