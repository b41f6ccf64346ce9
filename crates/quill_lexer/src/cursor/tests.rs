use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new(b"abc");
    assert_eq!(cursor.current(), Some(b'a'));
    assert_eq!(cursor.peek(), Some(b'b'));
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance();
    assert_eq!(cursor.current(), Some(b'b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_clamps_at_end() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new(b"");
    assert!(cursor.is_eof());
    assert_eq!(cursor.source_len(), 0);
    assert_eq!(cursor.peek(), None);
}

#[test]
fn interior_null_is_not_eof() {
    let cursor = Cursor::new(b"\0x");
    assert!(!cursor.is_eof());
    assert_eq!(cursor.current(), Some(0));
}

// === Prefix Matching ===

#[test]
fn starts_with_respects_end_of_input() {
    let mut cursor = Cursor::new(b"a>=");
    cursor.advance();
    assert!(cursor.starts_with(b">="));
    assert!(cursor.starts_with(b">"));
    assert!(!cursor.starts_with(b">=="));
}

// === Eating ===

#[test]
fn eat_while_stops_at_predicate() {
    let mut cursor = Cursor::new(b"abc123");
    let start = cursor.pos();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.slice_from(start), b"abc");
    assert_eq!(cursor.current(), Some(b'1'));
}

#[test]
fn eat_while_stops_at_end() {
    let mut cursor = Cursor::new(b"aaaa");
    cursor.eat_while(|b| b == b'a');
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new(b"comment\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), Some(b'\n'));
}

#[test]
fn eat_until_newline_without_newline_hits_eof() {
    let mut cursor = Cursor::new(b"no newline");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_reports_whether_found() {
    let mut cursor = Cursor::new(b"ab\"cd");
    assert!(cursor.eat_until(b'"'));
    assert_eq!(cursor.pos(), 2);
    cursor.advance();
    assert!(!cursor.eat_until(b'"'));
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn byte_at_is_absolute_and_bounded() {
    let mut cursor = Cursor::new(b"xyz");
    cursor.advance_n(2);
    assert_eq!(cursor.byte_at(0), Some(b'x'));
    assert_eq!(cursor.byte_at(3), None);
    assert_eq!(cursor.rest(), b"z");
}
