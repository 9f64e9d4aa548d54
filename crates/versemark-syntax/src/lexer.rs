//! # Lexer - Tokenizing Verse Markup
//!
//! First stage of parsing: breaking a raw markup string into tokens using the
//! [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte of the input appears in exactly one token. We never skip or
//! discard characters, so concatenating all token texts reproduces the input:
//!
//! ```
//! use versemark_syntax::lexer::lex;
//!
//! let input = "No princípio<WH7225> criou <FI>Deus<Fi>";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! Tokens are minimal and context-free. The lexer does not know whether
//! `<FI>` opens a formatting span or `<WH7225>` carries a Strong's number -
//! that is the [`tag`](crate::tag) module's job. Three kinds cover all input:
//!
//! - `Tag`: a complete `<...>` region with no nested angle brackets
//! - `Text`: a run of characters containing no `<`
//! - `StrayLt`: a lone `<` that never closes; the engine drops it
//!
//! A stray `>` inside literal text is part of a `Text` token; the engine is
//! responsible for keeping angle brackets out of the clean text it builds.

use logos::Logos;

/// Token kinds produced by the Logos lexer.
///
/// The token set is total: every byte of any input matches one of these
/// patterns, which is what gives [`lex`] its lossless property.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A complete markup tag, delimiters included.
    #[regex(r"<[^<>]*>")]
    Tag,

    /// A run of literal text with no `<` in it.
    #[regex(r"[^<]+")]
    Text,

    /// An unclosed `<`. Malformed input; never becomes clean text.
    #[token("<")]
    StrayLt,
}

/// A token with its kind and the exact source text it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// For `Tag` tokens, the body between the angle brackets.
    pub fn tag_body(&self) -> &'a str {
        match self.kind {
            TokenKind::Tag => &self.text[1..self.text.len() - 1],
            _ => self.text,
        }
    }
}

/// Tokenizes `input`, returning every byte as part of exactly one token.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut lexer = TokenKind::lexer(input);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        // The token set is total over all byte sequences, so the derive's
        // error variant is unreachable; fold it into Text to keep the
        // lossless property unconditional.
        let kind = result.unwrap_or(TokenKind::Text);
        out.push(Token {
            kind,
            text: lexer.slice(),
        });
    }
    out
}
