use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_open_depth() {
    assert_eq!(open_depth("3 + 4"), 0);
    assert_eq!(open_depth("[:x | (x + 1"), 2);
    assert_eq!(open_depth("(1 + 2))"), -1);
}

#[test]
fn test_brackets_inside_literals_do_not_count() {
    assert_eq!(open_depth("'(' printNl"), 0);
    assert_eq!(open_depth("\"[ comment\" 3"), 0);
    assert_eq!(open_depth("$( printNl"), 0);
}

#[test]
fn test_needs_more() {
    assert!(needs_more("b := [:x |\n", "b := [:x |"));
    assert!(!needs_more("b := [:x | x]\n", "b := [:x | x]"));
    // A blank line gives up on an unbalanced entry.
    assert!(!needs_more("b := [:x |\n\n", ""));
}

#[test]
fn test_pending_cascade_waits() {
    assert!(needs_more("3 printNl;\n", "3 printNl;"));
    assert!(needs_more("3 printNl; \"then\"\n", "3 printNl; \"then\""));
    assert!(!needs_more("3 printNl; printNl\n", "3 printNl; printNl"));
    assert!(!needs_more("';'\n", "';'"));
}

#[test]
fn test_entry_joins_continued_lines() {
    let mut entry = Entry::default();
    assert_eq!(entry.feed("b := [:x |"), Step::Wait);
    assert!(!entry.is_empty());
    assert_eq!(entry.feed("  x * 2]"), Step::Evaluate("b := [:x |\n  x * 2]\n".to_string()));
    assert!(entry.is_empty());

    assert_eq!(entry.feed("3 printNl;"), Step::Wait);
    assert_eq!(entry.feed("printNl"), Step::Evaluate("3 printNl;\nprintNl\n".to_string()));
}

#[test]
fn test_entry_skips_blank_lines_between_entries() {
    let mut entry = Entry::default();
    assert_eq!(entry.feed("   "), Step::Wait);
    assert!(entry.is_empty());
    assert_eq!(entry.feed("1 + 2"), Step::Evaluate("1 + 2\n".to_string()));
}

#[test]
fn test_exit_ends_session_only_between_entries() {
    let mut entry = Entry::default();
    assert_eq!(entry.feed("  exit  "), Step::Exit);

    assert_eq!(entry.feed("x := ["), Step::Wait);
    assert_eq!(entry.feed("exit"), Step::Wait);
    assert_eq!(entry.feed("]"), Step::Evaluate("x := [\nexit\n]\n".to_string()));
    assert_eq!(entry.feed("exitCode := 3"), Step::Evaluate("exitCode := 3\n".to_string()));
}

#[test]
fn test_interrupt_drops_pending_entry() {
    let mut entry = Entry::default();
    assert_eq!(entry.feed("(1 +"), Step::Wait);
    entry.clear();
    assert!(entry.is_empty());
    assert_eq!(entry.feed("2"), Step::Evaluate("2\n".to_string()));
}

#[test]
fn test_finish_hands_back_unfinished_entry() {
    let mut entry = Entry::default();
    assert_eq!(entry.feed("(1 +"), Step::Wait);
    assert_eq!(entry.finish(), Some("(1 +\n".to_string()));
    assert_eq!(Entry::default().finish(), None);
}
