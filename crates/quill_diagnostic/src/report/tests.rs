use super::*;
use pretty_assertions::assert_eq;
use quill_alloc::HeapAllocator;
use quill_lexer::lex;

fn report_for(source: &str) -> Report {
    let heap = HeapAllocator::new();
    let error = lex(&heap, source).unwrap_err();
    Report::new(source.as_bytes(), &error)
}

#[test]
fn unexpected_character_report() {
    let report = report_for("x = # 2");
    assert_eq!(report.message, "unexpected character `#`");
    assert_eq!(report.position(), "1:5");
    assert_eq!(report.line_text, "x = # 2");
    assert_eq!(report.caret_line(), "    ^");
}

#[test]
fn full_rendering() {
    let report = report_for("a = 1;\ny = 1.2.3\nz").with_origin("calc.ql");
    assert_eq!(
        report.to_string(),
        "error: second decimal point in number\n  --> calc.ql:2:8\ny = 1.2.3\n       ^"
    );
}

#[test]
fn caret_at_start_of_input() {
    let report = report_for("#");
    assert_eq!(report.caret_line(), "^");
    assert_eq!(report.position(), "1:1");
}

#[test]
fn tabs_are_preserved_in_indent() {
    let report = report_for("\tx\t= $");
    assert_eq!(report.caret_indent, "\t \t  ");
}

#[test]
fn non_ascii_prefix_counts_characters() {
    let report = report_for("\"é\" #");
    assert_eq!(report.caret_line(), "    ^");
    assert_eq!(report.position(), "1:6");
}

#[test]
fn crlf_line_is_echoed_without_carriage_return() {
    let report = report_for("ok\r\nbad @\r\nmore");
    assert_eq!(report.line_text, "bad @");
    assert_eq!(report.position(), "2:5");
}
