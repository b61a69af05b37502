//! Lm IR - shared lexical data model
//!
//! This crate contains the types every phase of the Lm compiler agrees on:
//! - `SourcePos` for 1-based line/column plus byte offset
//! - `Symbol` and `SymbolPool` for interned identifier text
//! - `Token`, `TokenKind`, and `Literal` for lexer output
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: repeated text becomes `Symbol(u32)`, compared in O(1)
//! - **Payload by kind**: a token's payload variant is fixed by its kind
//! - **No globals**: the driver owns the pool and passes it down

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod pool;
mod pos;
mod symbol;
mod token;

pub use pool::{PoolError, SharedSymbolPool, SymbolLookup, SymbolPool};
pub use pos::SourcePos;
pub use symbol::Symbol;
pub use token::{Literal, Payload, PayloadClass, Token, TokenKind};
