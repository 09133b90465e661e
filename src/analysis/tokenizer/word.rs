//! Rule-based word tokenizer implementation.
//!
//! This module provides the default tokenizer, which extracts words as
//! maximal runs of letters joined by single internal hyphens or apostrophes.
//! The boundary rule is implemented as an explicit scanner rather than a
//! regular expression, so the behavior is not tied to any pattern library's
//! matching semantics.
//!
//! # Examples
//!
//! ```
//! use wordfreq::analysis::tokenizer::Tokenizer;
//! use wordfreq::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Self-driving cars, I'm told!").unwrap().collect();
//!
//! assert_eq!(tokens[0].as_str(), "self-driving");
//! assert_eq!(tokens[1].as_str(), "cars");
//! assert_eq!(tokens[2].as_str(), "i'm");
//! assert_eq!(tokens[3].as_str(), "told");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that extracts words of letters with internal hyphens and
/// apostrophes.
///
/// # Rules
///
/// - A word is one or more letter runs (`char::is_alphabetic`) joined by
///   single internal `-` or `'` characters.
/// - Punctuation, digits, and whitespace are delimiters and never appear in
///   a token.
/// - A hyphen or apostrophe that is leading, trailing, or not followed by a
///   letter (including a doubled separator, as in `can''t`) terminates the
///   word before the separator; scanning resumes after it.
/// - Every extracted word is case-folded with Unicode-aware lower-casing.
///
/// Empty input, or input with no letters at all, yields an empty stream.
///
/// # Examples
///
/// ```
/// use wordfreq::analysis::tokenizer::Tokenizer;
/// use wordfreq::analysis::tokenizer::word::WordTokenizer;
///
/// let tokenizer = WordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("résumé über café").unwrap().collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].as_str(), "résumé");
/// assert_eq!(tokens[1].as_str(), "über");
/// assert_eq!(tokens[2].as_str(), "café");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(WordTokens {
            text: text.to_owned(),
            pos: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Separator characters that may join two letter runs inside a word.
fn is_separator(c: char) -> bool {
    matches!(c, '-' | '\'')
}

/// Lazy iterator over the words of an owned text.
///
/// `pos` is the byte offset scanning resumes from; everything before it has
/// already been consumed.
struct WordTokens {
    text: String,
    pos: usize,
}

impl Iterator for WordTokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tail = &self.text[self.pos..];
        let mut chars = tail.char_indices().peekable();

        // Skip delimiters until the next letter.
        let mut start = None;
        for (i, c) in chars.by_ref() {
            if c.is_alphabetic() {
                start = Some((i, c));
                break;
            }
        }
        let Some((start, first)) = start else {
            self.pos = self.text.len();
            return None;
        };

        // `end` always points just past the last letter seen, so a trailing
        // separator is never absorbed into the word.
        let mut end = start + first.len_utf8();
        loop {
            match chars.peek().copied() {
                Some((i, c)) if c.is_alphabetic() => {
                    chars.next();
                    end = i + c.len_utf8();
                }
                Some((_, c)) if is_separator(c) => {
                    // A separator joins only when a letter follows it;
                    // otherwise it terminates the word here.
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    match lookahead.peek() {
                        Some(&(_, c2)) if c2.is_alphabetic() => chars = lookahead,
                        _ => break,
                    }
                }
                _ => break,
            }
        }

        let word = tail[start..end].to_lowercase();
        self.pos += end;
        Some(Token::from_normalized(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        WordTokenizer::new()
            .tokenize(text)
            .unwrap()
            .map(|t| t.into_string())
            .collect()
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(words("hello world"), ["hello", "world"]);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(words("THE The tHe"), ["the", "the", "the"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(words("").is_empty());
        assert!(words("   \t\n").is_empty());
        assert!(words("123 !@# 456").is_empty());
    }

    #[test]
    fn test_punctuation_is_delimiter() {
        assert_eq!(words("away!@#$%"), ["away"]);
        assert_eq!(words("hello, world!"), ["hello", "world"]);
    }

    #[test]
    fn test_digits_are_delimiters() {
        assert_eq!(words("abc123def"), ["abc", "def"]);
    }

    #[test]
    fn test_internal_hyphens() {
        assert_eq!(
            words("self-driving well-being co-worker"),
            ["self-driving", "well-being", "co-worker"]
        );
    }

    #[test]
    fn test_internal_apostrophes() {
        assert_eq!(words("I'm can't won't"), ["i'm", "can't", "won't"]);
    }

    #[test]
    fn test_multi_separator_words() {
        assert_eq!(words("mother-in-law"), ["mother-in-law"]);
        // The apostrophe is followed by another separator, so the word ends
        // before it.
        assert_eq!(words("jack-o'-lantern"), ["jack-o", "lantern"]);
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        assert_eq!(words("-foo- 'bar'"), ["foo", "bar"]);
        assert_eq!(words("trailing- -leading"), ["trailing", "leading"]);
    }

    #[test]
    fn test_doubled_separator_terminates_early() {
        assert_eq!(words("can''t"), ["can", "t"]);
        assert_eq!(words("a--b"), ["a", "b"]);
        assert_eq!(words("a-'b"), ["a", "b"]);
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(words("résumé über café"), ["résumé", "über", "café"]);
        assert_eq!(words("l'école"), ["l'école"]);
    }

    #[test]
    fn test_whitespace_robustness() {
        assert_eq!(
            words("   the    quick \t brown\n\nfox   "),
            words("the quick brown fox")
        );
    }

    #[test]
    fn test_restartable() {
        let tokenizer = WordTokenizer::new();
        let first: Vec<_> = tokenizer.tokenize("a b c").unwrap().collect();
        let second: Vec<_> = tokenizer.tokenize("a b c").unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().name(), "word");
    }
}
