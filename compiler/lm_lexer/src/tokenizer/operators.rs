//! Punctuation and operator matching.

use lm_ir::TokenKind;

/// Longest operator starting with `b0`, given the next two bytes.
///
/// Returns the kind and its length in bytes. Bytes past the end of the
/// source read as `0`, which never completes an operator.
pub(super) fn match_operator(b0: u8, b1: u8, b2: u8) -> Option<(TokenKind, u32)> {
    use TokenKind as K;

    let matched = match (b0, b1, b2) {
        // Three bytes
        (b'<', b'<', b'=') => (K::LShiftEqual, 3),
        (b'>', b'>', b'=') => (K::RShiftEqual, 3),

        // Two bytes
        (b'-', b'>', _) => (K::Arrow, 2),
        (b'=', b'>', _) => (K::FatArrow, 2),
        (b':', b':', _) => (K::DoubleColon, 2),
        (b'=', b'=', _) => (K::EqualEqual, 2),
        (b'!', b'=', _) => (K::BangEqual, 2),
        (b'<', b'=', _) => (K::LessEqual, 2),
        (b'>', b'=', _) => (K::GreaterEqual, 2),
        (b'<', b'<', _) => (K::LShift, 2),
        (b'>', b'>', _) => (K::RShift, 2),
        (b'&', b'&', _) => (K::AndAnd, 2),
        (b'|', b'|', _) => (K::OrOr, 2),
        (b'+', b'=', _) => (K::PlusEqual, 2),
        (b'-', b'=', _) => (K::MinusEqual, 2),
        (b'*', b'=', _) => (K::StarEqual, 2),
        (b'/', b'=', _) => (K::SlashEqual, 2),
        (b'%', b'=', _) => (K::PercentEqual, 2),
        (b'&', b'=', _) => (K::AmpEqual, 2),
        (b'|', b'=', _) => (K::PipeEqual, 2),
        (b'^', b'=', _) => (K::CaretEqual, 2),
        (b'~', b'=', _) => (K::TildeEqual, 2),

        // One byte
        (b'(', _, _) => (K::LParen, 1),
        (b')', _, _) => (K::RParen, 1),
        (b'{', _, _) => (K::LBrace, 1),
        (b'}', _, _) => (K::RBrace, 1),
        (b'[', _, _) => (K::LBracket, 1),
        (b']', _, _) => (K::RBracket, 1),
        (b'.', _, _) => (K::Dot, 1),
        (b',', _, _) => (K::Comma, 1),
        (b':', _, _) => (K::Colon, 1),
        (b';', _, _) => (K::Semicolon, 1),
        (b'+', _, _) => (K::Plus, 1),
        (b'-', _, _) => (K::Minus, 1),
        (b'*', _, _) => (K::Star, 1),
        (b'/', _, _) => (K::Slash, 1),
        (b'%', _, _) => (K::Percent, 1),
        (b'=', _, _) => (K::Equal, 1),
        (b'!', _, _) => (K::Bang, 1),
        (b'<', _, _) => (K::Less, 1),
        (b'>', _, _) => (K::Greater, 1),
        (b'&', _, _) => (K::Amp, 1),
        (b'|', _, _) => (K::Pipe, 1),
        (b'^', _, _) => (K::Caret, 1),
        (b'~', _, _) => (K::Tilde, 1),
        (b'$', _, _) => (K::Dollar, 1),
        (b'@', _, _) => (K::At, 1),

        _ => return None,
    };
    Some(matched)
}
