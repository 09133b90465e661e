//! Word frequency maps and their associative merge.
//!
//! A [`FrequencyMap`] maps each distinct [`Token`] to the number of times it
//! occurred. Maps are built from token streams with
//! [`FrequencyMap::from_tokens`] and combined with [`FrequencyMap::merge`],
//! which is commutative and associative with the empty map as identity. That
//! algebra is what makes aggregation over a document set independent of how
//! the documents are partitioned, ordered, or processed in parallel.
//!
//! # Examples
//!
//! ```
//! use wordfreq::analysis::token::Token;
//! use wordfreq::frequency::FrequencyMap;
//!
//! let a = FrequencyMap::from_tokens(vec![Token::new("the"), Token::new("fox")]);
//! let b = FrequencyMap::from_tokens(vec![Token::new("the")]);
//!
//! let merged = a.merge(b);
//! assert_eq!(merged.get("the"), 2);
//! assert_eq!(merged.get("fox"), 1);
//! assert_eq!(merged.total_words(), 3);
//! ```

use ahash::AHashMap;

use crate::analysis::token::Token;

/// A mapping from token to occurrence count.
///
/// Every present key has a count of at least 1. The map carries no implied
/// ordering; ranked presentation is the report's concern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: AHashMap<Token, u64>,
}

impl FrequencyMap {
    /// Create a new, empty frequency map (the merge identity).
    pub fn new() -> Self {
        FrequencyMap {
            counts: AHashMap::new(),
        }
    }

    /// Count the tokens of a single sequence.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut map = FrequencyMap::new();
        for token in tokens {
            map.increment(token);
        }
        map
    }

    /// Increment the count for `token` by one, starting from zero.
    pub fn increment(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Increment the count for `token` by `n`.
    ///
    /// `n == 0` is a no-op, so absent keys stay absent and every present key
    /// keeps a count of at least 1.
    pub fn increment_by(&mut self, token: Token, n: u64) {
        if n == 0 {
            return;
        }
        *self.counts.entry(token).or_insert(0) += n;
    }

    /// Get the count for a word, or 0 if it never occurred.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of word occurrences (sum of all counts).
    pub fn total_words(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Merge two maps by summing counts per key.
    ///
    /// Commutative and associative, with [`FrequencyMap::new`] as identity.
    /// The smaller map is folded into the larger one.
    pub fn merge(mut self, mut other: FrequencyMap) -> FrequencyMap {
        if other.counts.len() > self.counts.len() {
            std::mem::swap(&mut self, &mut other);
        }
        for (token, count) in other.counts {
            self.increment_by(token, count);
        }
        self
    }

    /// Iterate over `(token, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, u64)> {
        self.counts.iter().map(|(token, &count)| (token, count))
    }
}

impl FromIterator<Token> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = Token>>(tokens: I) -> Self {
        FrequencyMap::from_tokens(tokens)
    }
}
