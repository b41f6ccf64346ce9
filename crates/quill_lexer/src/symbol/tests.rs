use super::*;
use pretty_assertions::assert_eq;

fn literals(table: &SymbolTable) -> Vec<&str> {
    table.entries().iter().map(|e| &*e.literal).collect()
}

// === Default table ===

#[test]
fn default_table_is_sorted_longest_first() {
    let table = SymbolTable::default();
    assert_eq!(table.len(), 20);
    let lengths: Vec<usize> = table.entries().iter().map(|e| e.literal.len()).collect();
    assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn default_table_passes_validation() {
    assert!(validate(SymbolTable::default().entries()).is_ok());
}

#[test]
fn every_two_byte_operator_beats_its_prefix() {
    let table = SymbolTable::default();
    for (input, expected) in [
        (">=", Symbol::Ge),
        ("<=", Symbol::Le),
        ("==", Symbol::EqEq),
        ("!=", Symbol::NotEq),
        ("&&", Symbol::AndAnd),
        ("||", Symbol::OrOr),
    ] {
        assert_eq!(table.match_prefix(input.as_bytes()), Some((expected, 2)), "{input}");
    }
}

#[test]
fn single_byte_operators_match_alone() {
    let table = SymbolTable::default();
    assert_eq!(table.match_prefix(b">"), Some((Symbol::Gt, 1)));
    assert_eq!(table.match_prefix(b"> ="), Some((Symbol::Gt, 1)));
    assert_eq!(table.match_prefix(b"=x"), Some((Symbol::Assign, 1)));
    assert_eq!(table.match_prefix(b"&"), None);
    assert_eq!(table.match_prefix(b""), None);
}

// === Custom tables ===

#[test]
fn new_sorts_regardless_of_author_order() {
    let table = SymbolTable::new([("<", Symbol::Lt), ("<=", Symbol::Le), ("=", Symbol::Assign)])
        .unwrap();
    assert_eq!(literals(&table), ["<=", "<", "="]);
    assert_eq!(table.match_prefix(b"<="), Some((Symbol::Le, 2)));
}

#[test]
fn new_keeps_author_order_for_equal_lengths() {
    let table = SymbolTable::new([(")", Symbol::RightParen), ("(", Symbol::LeftParen)]).unwrap();
    assert_eq!(literals(&table), [")", "("]);
}

#[test]
fn symbols_may_be_respelled() {
    let table = SymbolTable::new([("<>", Symbol::NotEq), (":=", Symbol::Assign)]).unwrap();
    assert_eq!(table.match_prefix(b"<>"), Some((Symbol::NotEq, 2)));
    assert_eq!(table.match_prefix(b":="), Some((Symbol::Assign, 2)));
}

#[test]
fn empty_literal_is_rejected() {
    let err = SymbolTable::new([("", Symbol::Plus)]).unwrap_err();
    assert_eq!(err, SymbolTableError::EmptyLiteral { symbol: Symbol::Plus });
}

#[test]
fn duplicate_literal_is_rejected() {
    let err = SymbolTable::new([("+", Symbol::Plus), ("+", Symbol::Minus)]).unwrap_err();
    assert_eq!(
        err,
        SymbolTableError::DuplicateLiteral {
            literal: "+".to_string()
        }
    );
    assert_eq!(err.to_string(), "literal `+` is listed more than once");
}

#[test]
fn symbol_display_uses_default_spelling() {
    assert_eq!(Symbol::AndAnd.to_string(), "&&");
    assert_eq!(Symbol::While.to_string(), "while");
    assert!(Symbol::If.is_keyword());
    assert!(!Symbol::Semicolon.is_keyword());
}
