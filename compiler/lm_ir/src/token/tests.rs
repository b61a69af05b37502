use pretty_assertions::assert_eq;

use super::*;

// === Payload invariant ===

#[test]
fn payload_class_by_kind() {
    assert_eq!(TokenKind::Ident.payload_class(), PayloadClass::Symbol);
    assert_eq!(TokenKind::StringLiteral.payload_class(), PayloadClass::Literal);
    assert_eq!(TokenKind::Int32Literal.payload_class(), PayloadClass::Literal);
    assert_eq!(TokenKind::Fn.payload_class(), PayloadClass::None);
    assert_eq!(TokenKind::LShiftEqual.payload_class(), PayloadClass::None);
    assert_eq!(TokenKind::Unknown.payload_class(), PayloadClass::None);
    assert_eq!(TokenKind::Eof.payload_class(), PayloadClass::None);
}

#[test]
fn simple_token_has_no_payload() {
    let tok = Token::simple(TokenKind::Arrow, SourcePos::new(2, 5, 10), 2);
    assert_eq!(tok.payload(), &Payload::None);
    assert_eq!(tok.end_offset(), 12);
    assert_eq!(tok.symbol(), None);
    assert!(tok.literal_text().is_none());
}

#[test]
fn literal_token_keeps_bytes() {
    let tok = Token::literal(TokenKind::StringLiteral, b"a\\b", SourcePos::START, 5);
    let lit = tok.literal_text().map(Literal::as_bytes);
    assert_eq!(lit, Some(&b"a\\b"[..]));
}

#[test]
fn ident_token_carries_symbol() {
    let tok = Token::ident(Symbol::from_raw(3), SourcePos::START, 4);
    assert_eq!(tok.kind(), TokenKind::Ident);
    assert_eq!(tok.symbol(), Some(Symbol::from_raw(3)));
}

#[test]
#[should_panic(expected = "requires a payload")]
fn simple_rejects_literal_kind() {
    let _ = Token::simple(TokenKind::CharLiteral, SourcePos::START, 3);
}

#[test]
#[should_panic(expected = "is not a literal kind")]
fn literal_rejects_keyword_kind() {
    let _ = Token::literal(TokenKind::Let, b"let", SourcePos::START, 3);
}

#[test]
fn eof_is_empty() {
    let tok = Token::eof(SourcePos::new(3, 1, 8));
    assert!(tok.is_eof());
    assert!(tok.is_empty());
    assert_eq!(tok.end_offset(), 8);
}

// === Literal text ===

#[test]
fn literal_as_str_requires_utf8() {
    assert_eq!(Literal::new(b"ok").as_str(), Some("ok"));
    assert_eq!(Literal::new(&[0xFF, b'a']).as_str(), None);
}

#[test]
fn literal_display_is_lossy() {
    assert_eq!(Literal::new(&[b'x', 0xFF]).to_string(), "x\u{FFFD}");
    assert_eq!(format!("{:?}", Literal::new(b"hi")), "Literal(\"hi\")");
}

// === Kind classification ===

#[test]
fn keyword_range() {
    assert!(TokenKind::Fn.is_keyword());
    assert!(TokenKind::Ulong.is_keyword());
    assert!(TokenKind::False.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
    assert!(!TokenKind::LParen.is_keyword());
}

#[test]
fn punctuation_range() {
    assert!(TokenKind::LParen.is_punctuation());
    assert!(TokenKind::At.is_punctuation());
    assert!(!TokenKind::False.is_punctuation());
    assert!(!TokenKind::Eof.is_punctuation());
}

#[test]
fn lexemes_and_display() {
    assert_eq!(TokenKind::RShiftEqual.lexeme(), Some(">>="));
    assert_eq!(TokenKind::Dollar.lexeme(), Some("$"));
    assert_eq!(TokenKind::Imut.lexeme(), Some("imut"));
    assert_eq!(TokenKind::Ident.lexeme(), None);
    assert_eq!(TokenKind::Ident.to_string(), "identifier");
    assert_eq!(TokenKind::Eof.to_string(), "end of file");
    assert_eq!(TokenKind::FatArrow.to_string(), "=>");
}
