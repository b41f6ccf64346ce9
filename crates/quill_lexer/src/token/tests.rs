use super::*;
use quill_alloc::{ArenaAllocator, HeapAllocator};
use pretty_assertions::assert_eq;

#[test]
fn list_keeps_tokens_and_spans_parallel() {
    let heap = HeapAllocator::new();
    let mut list = TokenList::new(&heap);
    list.push(Token::Identifier(Text::from_str_in(&heap, "x")), Span::new(0, 1));
    list.push(Token::Symbol(Symbol::Assign), Span::new(2, 3));
    list.push(Token::Number(1.0), Span::new(4, 5));

    assert_eq!(list.len(), 3);
    assert_eq!(list.tokens().len(), list.spans().len());
    assert_eq!(list.get(1), Some(&Token::Symbol(Symbol::Assign)));
    assert_eq!(list.span(2), Some(Span::new(4, 5)));
    assert_eq!(list.get(3), None);
    assert_eq!(list.span(3), None);

    let kinds: Vec<&str> = list.iter().map(|(token, _)| token.kind_name()).collect();
    assert_eq!(kinds, ["identifier", "symbol", "number"]);
}

#[test]
fn list_equality_ignores_spans() {
    let heap = HeapAllocator::new();
    let arena = ArenaAllocator::new(1024);
    let mut a = TokenList::new(&heap);
    let mut b = TokenList::new(&arena);
    a.push(Token::Number(2.0), Span::new(0, 1));
    b.push(Token::Number(2.0), Span::new(5, 6));
    assert!(a == b);
}

#[test]
fn token_display() {
    let heap = HeapAllocator::new();
    assert_eq!(Token::Symbol(Symbol::Ge).to_string(), ">=");
    assert_eq!(Token::Symbol(Symbol::While).to_string(), "while");
    assert_eq!(Token::Identifier(Text::from_str_in(&heap, "abc")).to_string(), "abc");
    assert_eq!(Token::Number(3.5).to_string(), "3.5");
    assert_eq!(Token::Number(4.0).to_string(), "4");
    assert_eq!(Token::String(Text::from_str_in(&heap, "hi there")).to_string(), "\"hi there\"");
}

#[test]
fn token_accessors() {
    let heap = HeapAllocator::new();
    assert_eq!(Token::Symbol(Symbol::If).symbol(), Some(Symbol::If));
    assert_eq!(Token::Symbol(Symbol::If).kind_name(), "keyword");
    assert_eq!(Token::String(Text::new(&heap)).symbol(), None);
    assert_eq!(Token::String(Text::new(&heap)).kind_name(), "string");
}

#[test]
fn debug_lists_tokens() {
    let heap = HeapAllocator::new();
    let mut list = TokenList::new(&heap);
    list.push(Token::Symbol(Symbol::Comma), Span::new(0, 1));
    assert_eq!(format!("{list:?}"), "[Symbol(Comma)]");
}
