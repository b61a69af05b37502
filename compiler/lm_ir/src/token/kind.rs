//! Token kinds for Lm.

use std::fmt;

/// Which payload a token of a given kind carries.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PayloadClass {
    None,
    Literal,
    Symbol,
}

/// Token kinds for Lm.
///
/// Numbering is internal to one build and not a stable format.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Eof,
    /// Byte that starts no token; always reported.
    Unknown,

    Int32Literal,
    Float64Literal,
    StringLiteral,
    CharLiteral,

    Ident,

    // Keywords
    Fn,
    Mut,
    Imut,
    Ret,
    Module,
    Import,
    Struct,
    Local,
    Match,
    If,
    Elif,
    Else,
    Break,
    Continue,
    For,
    Let,
    Loop,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Long,
    Ulong,
    Char,
    Bool,
    True,
    False,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Dot,
    Comma,
    Colon,
    DoubleColon,
    Semicolon,
    Arrow,    // ->
    FatArrow, // =>

    // Operators
    Plus,
    PlusEqual,
    Minus,
    MinusEqual,
    Star,
    StarEqual,
    Slash,
    SlashEqual,
    Percent,
    PercentEqual,
    Equal,
    EqualEqual,
    Bang,
    BangEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    AndAnd,
    OrOr,
    Amp,
    AmpEqual,
    Pipe,
    PipeEqual,
    Caret,
    CaretEqual,
    Tilde,
    TildeEqual,
    LShift,
    LShiftEqual,
    RShift,
    RShiftEqual,
    Dollar, // $ (cast)
    At,     // @ (attribute)
}

impl TokenKind {
    /// Payload variant every token of this kind carries.
    pub const fn payload_class(self) -> PayloadClass {
        match self {
            TokenKind::Int32Literal
            | TokenKind::Float64Literal
            | TokenKind::StringLiteral
            | TokenKind::CharLiteral => PayloadClass::Literal,
            TokenKind::Ident => PayloadClass::Symbol,
            _ => PayloadClass::None,
        }
    }

    pub const fn is_literal(self) -> bool {
        matches!(self.payload_class(), PayloadClass::Literal)
    }

    pub const fn is_keyword(self) -> bool {
        (self as u8) >= (TokenKind::Fn as u8) && (self as u8) <= (TokenKind::False as u8)
    }

    pub const fn is_punctuation(self) -> bool {
        (self as u8) >= (TokenKind::LParen as u8)
    }

    /// Fixed source text of keywords and punctuation.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Eof
            | TokenKind::Unknown
            | TokenKind::Int32Literal
            | TokenKind::Float64Literal
            | TokenKind::StringLiteral
            | TokenKind::CharLiteral
            | TokenKind::Ident => return None,
            TokenKind::Fn => "fn",
            TokenKind::Mut => "mut",
            TokenKind::Imut => "imut",
            TokenKind::Ret => "ret",
            TokenKind::Module => "module",
            TokenKind::Import => "import",
            TokenKind::Struct => "struct",
            TokenKind::Local => "local",
            TokenKind::Match => "match",
            TokenKind::If => "if",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::For => "for",
            TokenKind::Let => "let",
            TokenKind::Loop => "loop",
            TokenKind::I8 => "i8",
            TokenKind::U8 => "u8",
            TokenKind::I16 => "i16",
            TokenKind::U16 => "u16",
            TokenKind::I32 => "i32",
            TokenKind::U32 => "u32",
            TokenKind::I64 => "i64",
            TokenKind::U64 => "u64",
            TokenKind::F32 => "f32",
            TokenKind::F64 => "f64",
            TokenKind::Long => "long",
            TokenKind::Ulong => "ulong",
            TokenKind::Char => "char",
            TokenKind::Bool => "bool",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::DoubleColon => "::",
            TokenKind::Semicolon => ";",
            TokenKind::Arrow => "->",
            TokenKind::FatArrow => "=>",
            TokenKind::Plus => "+",
            TokenKind::PlusEqual => "+=",
            TokenKind::Minus => "-",
            TokenKind::MinusEqual => "-=",
            TokenKind::Star => "*",
            TokenKind::StarEqual => "*=",
            TokenKind::Slash => "/",
            TokenKind::SlashEqual => "/=",
            TokenKind::Percent => "%",
            TokenKind::PercentEqual => "%=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Amp => "&",
            TokenKind::AmpEqual => "&=",
            TokenKind::Pipe => "|",
            TokenKind::PipeEqual => "|=",
            TokenKind::Caret => "^",
            TokenKind::CaretEqual => "^=",
            TokenKind::Tilde => "~",
            TokenKind::TildeEqual => "~=",
            TokenKind::LShift => "<<",
            TokenKind::LShiftEqual => "<<=",
            TokenKind::RShift => ">>",
            TokenKind::RShiftEqual => ">>=",
            TokenKind::Dollar => "$",
            TokenKind::At => "@",
        })
    }

    /// Human-readable name for error messages and token dumps.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Unknown => "unknown",
            TokenKind::Int32Literal => "integer",
            TokenKind::Float64Literal => "float",
            TokenKind::StringLiteral => "string",
            TokenKind::CharLiteral => "char literal",
            TokenKind::Ident => "identifier",
            other => match other.lexeme() {
                Some(text) => text,
                None => "token",
            },
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
