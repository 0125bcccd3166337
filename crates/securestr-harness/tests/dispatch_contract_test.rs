//! Harness contracts: dispatch semantics across the whole operation set,
//! the absent-argument policy, and the rendered output shapes.

use securestr_core::SecureStr;
use securestr_harness::{Operation, Outcome, STR_CAPACITY, dispatch, render, report::RunRecord};

fn working(text: &[u8]) -> Option<SecureStr> {
    let mut s = SecureStr::with_capacity(STR_CAPACITY).unwrap();
    s.copy_from_bytes(text).unwrap();
    Some(s)
}

#[test]
fn every_mutating_operation_reports_pass_on_success() {
    let cases = [
        (Operation::Cpy, working(b"hello"), working(b"")),
        (Operation::Appd, working(b" world"), working(b"hello")),
        (Operation::AppdChar(b'!'), working(b"hello"), None),
        (
            Operation::Substr { start: 0, count: 2 },
            working(b"hello"),
            working(b""),
        ),
        (
            Operation::AppdSubstr { start: 0, count: 2 },
            working(b"hello"),
            working(b"x"),
        ),
        (Operation::Swap, working(b"one"), working(b"two")),
        (Operation::Trunc(2), working(b"hello"), None),
        (Operation::Clear, working(b"hello"), None),
        (Operation::Wipe, working(b"hello"), None),
        (Operation::SetChar(0, b'H'), working(b"hello"), None),
    ];
    for (operation, a, b) in cases {
        let run = dispatch(operation, a, b);
        assert_eq!(run.outcome, Outcome::Pass, "{}", operation.describe());
    }
}

#[test]
fn every_operation_tolerates_absent_buffers() {
    let operations = [
        Operation::Cpy,
        Operation::Appd,
        Operation::AppdChar(b'x'),
        Operation::Substr { start: 0, count: 0 },
        Operation::AppdSubstr { start: 0, count: 0 },
        Operation::Cmp,
        Operation::StartsWith,
        Operation::EndsWith,
        Operation::IndexOf,
        Operation::Swap,
        Operation::Trunc(0),
        Operation::Clear,
        Operation::Wipe,
        Operation::GetChar(0),
        Operation::SetChar(0, b'x'),
        Operation::Len,
        Operation::Cap,
    ];
    for operation in operations {
        let run = dispatch(operation, None, None);
        let expected = if operation == Operation::IndexOf {
            Outcome::NotFound
        } else {
            Outcome::Fail
        };
        assert_eq!(run.outcome, expected, "{}", operation.describe());
        assert!(run.string_a.is_none());
    }
}

#[test]
fn failed_copy_preserves_destination_content() {
    let mut small = SecureStr::with_capacity(3).unwrap();
    small.copy_from_bytes(b"old").unwrap();
    let run = dispatch(Operation::Cpy, working(b"hello"), Some(small));
    assert_eq!(run.outcome, Outcome::Fail);
    assert!(run.error.is_some());
    assert_eq!(run.string_b.unwrap().as_bytes(), b"old");
}

#[test]
fn search_renders_position_or_npos() {
    let hit = dispatch(Operation::IndexOf, working(b"abcabc"), working(b"bc"));
    assert_eq!(hit.outcome, Outcome::Position(1));
    assert_eq!(render::outcome_label(&hit.outcome), "1");

    let miss = dispatch(Operation::IndexOf, working(b"abcabc"), working(b"xyz"));
    assert_eq!(miss.outcome, Outcome::NotFound);
    assert_eq!(render::outcome_label(&miss.outcome), "NPOS");
}

#[test]
fn predicates_distinguish_false_from_fail() {
    let false_run = dispatch(Operation::StartsWith, working(b"hello"), working(b"xy"));
    assert_eq!(false_run.outcome, Outcome::False);

    let fail_run = dispatch(Operation::StartsWith, working(b"hello"), None);
    assert_eq!(fail_run.outcome, Outcome::Fail);

    let empty_pattern = dispatch(Operation::StartsWith, working(b"hello"), working(b""));
    assert_eq!(empty_pattern.outcome, Outcome::True);
}

#[test]
fn rendered_block_matches_expected_shape() {
    let run = dispatch(Operation::Appd, working(b" world"), working(b"hello"));
    assert_eq!(
        render::render_text(&run),
        "appd(string_A, string_B): PASS\nstring_A( world)\nstring_B(hello world)\n"
    );
}

#[test]
fn null_marker_renders_explicitly() {
    let run = dispatch(Operation::Swap, working(b"hello"), None);
    let text = render::render_text(&run);
    assert!(text.contains("swap(string_A, string_B): FAIL"));
    assert!(text.contains("string_B -> NULL"));
}

#[test]
fn json_record_reflects_run() {
    let run = dispatch(Operation::IndexOf, working(b"hello world"), working(b"world"));
    let record = RunRecord::from_run(&run);
    assert_eq!(record.result, "6");
    let json = record.to_json().unwrap();
    let parsed = RunRecord::from_json(&json).unwrap();
    assert_eq!(parsed.string_a.as_deref(), Some("hello world"));
    assert_eq!(parsed.string_b.as_deref(), Some("world"));
}

#[test]
fn wipe_through_dispatch_leaves_empty_buffer() {
    let run = dispatch(Operation::Wipe, working(b"secret"), None);
    assert_eq!(run.outcome, Outcome::Pass);
    let wiped = run.string_a.unwrap();
    assert_eq!(wiped.len(), 0);
    assert_eq!(wiped.as_bytes_with_nul(), b"\0");
}
