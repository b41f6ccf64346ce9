use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_table_reserves_if_and_while() {
    let table = KeywordTable::default();
    assert_eq!(table.lookup(b"if"), Some(Symbol::If));
    assert_eq!(table.lookup(b"while"), Some(Symbol::While));
    assert_eq!(table.entries().len(), 2);
}

#[test]
fn lookup_is_whole_word_and_case_sensitive() {
    let table = KeywordTable::default();
    assert_eq!(table.lookup(b"iffy"), None);
    assert_eq!(table.lookup(b"i"), None);
    assert_eq!(table.lookup(b"If"), None);
    assert_eq!(table.lookup(b"WHILE"), None);
}

#[test]
fn empty_table_reserves_nothing() {
    assert_eq!(KeywordTable::empty().lookup(b"if"), None);
}

#[test]
fn custom_keywords_are_accepted() {
    let table = KeywordTable::new([("si", Symbol::If), ("mientras", Symbol::While)]).unwrap();
    assert_eq!(table.lookup(b"si"), Some(Symbol::If));
    assert_eq!(table.lookup(b"if"), None);
}

#[test]
fn non_identifier_keyword_is_rejected() {
    let err = KeywordTable::new([("2if", Symbol::If)]).unwrap_err();
    assert_eq!(
        err,
        SymbolTableError::InvalidKeyword {
            literal: "2if".to_string()
        }
    );
}

#[test]
fn duplicate_keyword_is_rejected() {
    let err = KeywordTable::new([("if", Symbol::If), ("if", Symbol::While)]).unwrap_err();
    assert!(matches!(err, SymbolTableError::DuplicateLiteral { .. }));
}

#[test]
fn identifier_shape() {
    assert!(is_identifier(b"x"));
    assert!(is_identifier(b"snake_case_9"));
    assert!(!is_identifier(b""));
    assert!(!is_identifier(b"_x"));
    assert!(!is_identifier(b"9x"));
    assert!(!is_identifier(b"a-b"));
}
