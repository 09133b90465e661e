//! Token types for text analysis.
//!
//! This module defines the core data structures for representing words
//! extracted from text.
//!
//! # Core Types
//!
//! - [`Token`] - A single normalized word
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! Creating a token:
//!
//! ```
//! use wordfreq::analysis::token::Token;
//!
//! let token = Token::new("Hello");
//! assert_eq!(token.as_str(), "hello");
//! ```

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single normalized word extracted from text.
///
/// Tokens are immutable and hold two invariants:
///
/// - the text is never empty
/// - the text is already case-folded (Unicode-aware lower-casing)
///
/// Tokenizers uphold both by construction; [`Token::new`] lower-cases its
/// input so externally built tokens satisfy the same contract.
///
/// # Examples
///
/// ```
/// use wordfreq::analysis::token::Token;
///
/// let token = Token::new("Café");
/// assert_eq!(token.as_str(), "café");
/// assert_eq!(format!("{token}"), "café");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Create a new token from the given text, lower-casing it.
    ///
    /// The text must not be empty.
    pub fn new<S: AsRef<str>>(text: S) -> Self {
        let text = text.as_ref();
        debug_assert!(!text.is_empty(), "tokens are never empty");
        Token(text.to_lowercase())
    }

    /// Create a token from text that is already non-empty and lower-cased.
    ///
    /// Used by tokenizers, which normalize during scanning.
    pub(crate) fn from_normalized(text: String) -> Self {
        debug_assert!(!text.is_empty(), "tokens are never empty");
        Token(text)
    }

    /// Get the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Tokens are never empty; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the token, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by Token be queried with plain &str.
impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A token stream represents a lazy sequence of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
