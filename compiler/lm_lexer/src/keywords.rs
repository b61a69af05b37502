//! Reserved word lookup.
//!
//! The tokenizer consumes the whole identifier run first and only then
//! asks here, so `ifx` and `forall` never match `if` or `for`.

use lm_ir::TokenKind;

/// Look up a reserved keyword by its full text.
///
/// Case-sensitive exact match, bucketed by length. Keywords are 2-8 bytes.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "fn" => Some(TokenKind::Fn),
            "if" => Some(TokenKind::If),
            "i8" => Some(TokenKind::I8),
            "u8" => Some(TokenKind::U8),
            _ => None,
        },
        3 => match text {
            "mut" => Some(TokenKind::Mut),
            "ret" => Some(TokenKind::Ret),
            "for" => Some(TokenKind::For),
            "let" => Some(TokenKind::Let),
            "i16" => Some(TokenKind::I16),
            "u16" => Some(TokenKind::U16),
            "i32" => Some(TokenKind::I32),
            "u32" => Some(TokenKind::U32),
            "i64" => Some(TokenKind::I64),
            "u64" => Some(TokenKind::U64),
            "f32" => Some(TokenKind::F32),
            "f64" => Some(TokenKind::F64),
            _ => None,
        },
        4 => match text {
            "imut" => Some(TokenKind::Imut),
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            "loop" => Some(TokenKind::Loop),
            "long" => Some(TokenKind::Long),
            "char" => Some(TokenKind::Char),
            "bool" => Some(TokenKind::Bool),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "local" => Some(TokenKind::Local),
            "match" => Some(TokenKind::Match),
            "break" => Some(TokenKind::Break),
            "ulong" => Some(TokenKind::Ulong),
            "false" => Some(TokenKind::False),
            _ => None,
        },
        6 => match text {
            "module" => Some(TokenKind::Module),
            "import" => Some(TokenKind::Import),
            "struct" => Some(TokenKind::Struct),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}
