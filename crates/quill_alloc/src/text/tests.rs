use super::*;
use crate::{ArenaAllocator, HeapAllocator};
use pretty_assertions::assert_eq;

fn collect(parts: &GrowableBuffer<'_, Text<'_>>) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

// === Text ===

#[test]
fn equality_is_exact_and_length_sensitive() {
    let heap = HeapAllocator::new();
    let abc = Text::from_str_in(&heap, "abc");
    assert_eq!(abc, Text::from_str_in(&heap, "abc"));
    assert_ne!(abc, Text::from_str_in(&heap, "abcd"));
    assert_ne!(abc, Text::from_str_in(&heap, "ABC"));
    assert!(abc == "abc");
    assert!("abc" == abc);
    assert!(Text::new(&heap) == "");
}

#[test]
fn append_bytes_and_text() {
    let heap = HeapAllocator::new();
    let mut text = Text::from_str_in(&heap, "foo");
    text.push_byte(b'-');
    text.push_text(&Text::from_str_in(&heap, "bar"));
    text.push_bytes(b"!!");
    assert_eq!(text.as_str(), Some("foo-bar!!"));
    assert_eq!(text.len(), 9);
}

#[test]
fn non_utf8_bytes_are_kept_verbatim() {
    let heap = HeapAllocator::new();
    let text = Text::from_bytes(&heap, &[b'a', 0xFF, b'b']);
    assert_eq!(text.as_bytes(), &[b'a', 0xFF, b'b']);
    assert_eq!(text.as_str(), None);
    assert_eq!(text.to_string(), "a\u{FFFD}b");
    assert_eq!(format!("{text:?}"), "\"a\u{FFFD}b\"");
}

#[test]
fn text_can_live_in_an_arena() {
    let arena = ArenaAllocator::new(128);
    let text = Text::from_str_in(&arena, "scratch");
    assert!(arena.used() >= 7);
    assert_eq!(text, "scratch");
}

// === Concat ===

#[test]
fn concat_with_and_without_separator() {
    let heap = HeapAllocator::new();
    let parts = [
        Text::from_str_in(&heap, "a"),
        Text::from_str_in(&heap, "bc"),
        Text::from_str_in(&heap, "d"),
    ];
    assert_eq!(concat(&heap, &parts, None), "abcd");
    let joined = concat(&heap, &parts, Some(b','));
    assert_eq!(joined, "a,bc,d");
    assert_eq!(joined.capacity(), 6);
}

#[test]
fn concat_of_nothing_is_empty() {
    let heap = HeapAllocator::new();
    assert!(concat(&heap, &[], Some(b' ')).is_empty());
}

// === Split ===

#[test]
fn split_collapses_delimiter_runs() {
    let heap = HeapAllocator::new();
    let parts = split(&heap, b",,a,b,,c,", b',');
    assert_eq!(collect(&parts), ["a", "b", "c"]);
}

#[test]
fn split_without_delimiter_yields_whole_input() {
    let heap = HeapAllocator::new();
    assert_eq!(collect(&split(&heap, b"word", b' ')), ["word"]);
    assert!(split(&heap, b"", b' ').is_empty());
    assert!(split(&heap, b"   ", b' ').is_empty());
}

#[test]
fn split_lines_handles_crlf_and_blank_lines() {
    let heap = HeapAllocator::new();
    let lines = split_lines(&heap, b"first\r\n\nsecond\n\r\nthird");
    assert_eq!(collect(&lines), ["first", "second", "third"]);
}

// === File extension ===

#[test]
fn file_extension_uses_last_dot() {
    assert_eq!(file_extension("a.b.c"), Some(".c"));
    assert_eq!(file_extension(".hidden"), Some(".hidden"));
    assert_eq!(file_extension("trailing."), Some("."));
    assert_eq!(file_extension(""), None);
}
