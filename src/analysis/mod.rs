//! Text analysis: token types and tokenizers.
//!
//! This module hosts the two halves of the word-extraction core:
//!
//! - [`token`] - the [`Token`](token::Token) type and token stream aliases
//! - [`tokenizer`] - the [`Tokenizer`](tokenizer::Tokenizer) trait and the
//!   rule-based [`WordTokenizer`](tokenizer::WordTokenizer)

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::{IntoTokenStream, Token, TokenStream};
pub use tokenizer::{Tokenizer, WordTokenizer};
