//! Tokenizer for inspection strings.
//!
//! An "inspection string" is the human-readable dump a console's
//! value-inspection formatter produces for an arbitrary runtime value:
//! nested containers, quoted strings, symbolic atoms, numbers, and opaque
//! object references of the shape `#<Class:0xADDR@LINE>`.
//!
//! [`tokenize`] classifies such a string into a flat sequence of
//! `(kind, text)` tokens, delivered one at a time through a caller-supplied
//! callback. The scan is a single forward pass with one-character lookback;
//! it never fails on malformed input (malformed input yields a best-effort
//! token sequence instead).
//!
//! This crate is standalone so display layers (highlighters, REPL output
//! pipelines) can depend on it without pulling in any rendering code.
//!
//! ```
//! use tinct_lexer_core::{tokenize, TokenKind};
//!
//! let mut kinds = Vec::new();
//! tokenize(":foo", |kind, _text| kinds.push(kind))?;
//! assert_eq!(kinds, vec![TokenKind::SymbolPrefix, TokenKind::Symbol]);
//! # Ok::<(), tinct_lexer_core::ScanError>(())
//! ```

pub mod kind;
pub mod scanner;

pub use kind::TokenKind;
pub use scanner::{tokenize, ScanError};
