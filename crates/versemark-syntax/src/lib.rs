//! # versemark-syntax
//!
//! Tokenizing and classifying the inline markup language found in scripture
//! module data (theWord/MySword-style tag conventions).
//!
//! Two layers:
//!
//! - [`lexer`] splits a raw markup string into `Tag` / `Text` tokens with a
//!   lossless guarantee: every byte of the input appears in exactly one token.
//! - [`tag`] classifies a tag body into the small set of tag families the
//!   parsing engine acts on (Strong's numbers, formatting open/close, breaks,
//!   structural markers). Everything else is `Unknown` and is dropped by the
//!   engine without error.
//!
//! All tag spellings live in this crate; the engine never hardcodes a tag.

pub mod lexer;
pub mod tag;

pub use lexer::{Token, TokenKind, lex};
pub use tag::{FormatKind, StrongKind, TagKind, classify};
