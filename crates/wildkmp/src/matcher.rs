// std imports
use std::fmt;

// local imports
use crate::{
    border::{border_array, refined_border_array},
    error::{Error, Result},
    symbol::symbols_match,
};

// ---

/// Ascending start indices at which a pattern occurs in a text.
///
/// "No match" is the empty sequence, uniformly for all matchers, so results
/// of different matchers stay directly comparable. The [`fmt::Display`]
/// rendering uses `-1` as the no-match marker expected by delimited reports.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Occurrences(Vec<usize>);

impl Occurrences {
    /// Returns the indices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Whether the pattern did not occur at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of occurrences.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the start indices in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Consumes the list, returning the underlying vector.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for Occurrences {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl<'a> IntoIterator for &'a Occurrences {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Occurrences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-1");
        }
        for (k, index) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ",")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

// ---

/// A substring matcher reporting every occurrence of a pattern in a text.
///
/// All implementations share one contract so callers can time them
/// interchangeably: symbols are compared with
/// [`symbols_match`](crate::symbols_match), returned indices are ascending,
/// and overlapping occurrences are all reported. Matchers are stateless;
/// distinct calls are independent and may run on separate threads.
pub trait Matcher {
    /// Short name for reports and logs.
    fn name(&self) -> &'static str;

    /// Finds every occurrence of `pattern` in `text`.
    ///
    /// Fails fast with [`Error::EmptyPattern`] or
    /// [`Error::PatternExceedsText`] before any preprocessing or scanning.
    fn find(&self, text: &[u8], pattern: &[u8]) -> Result<Occurrences>;
}

fn validate(text: &[u8], pattern: &[u8]) -> Result<()> {
    if pattern.is_empty() {
        return Err(Error::EmptyPattern);
    }
    if pattern.len() > text.len() {
        return Err(Error::PatternExceedsText {
            pattern: pattern.len(),
            text: text.len(),
        });
    }
    Ok(())
}

// ---

/// Brute-force matcher checking every start position.
///
/// O(n·m) worst case, no preprocessing. Serves as the correctness oracle the
/// KMP variants are verified against.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveMatcher;

impl Matcher for NaiveMatcher {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Result<Occurrences> {
        validate(text, pattern)?;

        let mut found = Vec::new();
        for i in 0..=text.len() - pattern.len() {
            if pattern
                .iter()
                .zip(&text[i..])
                .all(|(&p, &t)| symbols_match(p, t))
            {
                found.push(i);
            }
        }

        Ok(found.into())
    }
}

// ---

/// Knuth-Morris-Pratt matcher driven by the plain wildcard-aware border
/// array.
#[derive(Debug, Clone, Copy, Default)]
pub struct KmpMatcher;

impl Matcher for KmpMatcher {
    fn name(&self) -> &'static str {
        "kmp"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Result<Occurrences> {
        validate(text, pattern)?;

        let border = border_array(pattern);
        Ok(scan(text, pattern, &border).into())
    }
}

/// Knuth-Morris-Pratt matcher driven by the refined border array.
///
/// Reports exactly the same occurrences as [`KmpMatcher`]; the refined
/// borders only reduce the number of redundant re-comparisons after a
/// mismatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefinedKmpMatcher;

impl Matcher for RefinedKmpMatcher {
    fn name(&self) -> &'static str {
        "refined"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Result<Occurrences> {
        validate(text, pattern)?;

        let border = border_array(pattern);
        let refined = refined_border_array(pattern, &border);
        Ok(scan(text, pattern, &refined).into())
    }
}

/// The shared KMP scan loop.
///
/// `border` is either the plain or the refined border array; it only decides
/// how far a mismatch falls back. States are `(i, matched)`: a match advances
/// both, a mismatch with `matched > 0` falls back via `border[matched - 1]`,
/// a mismatch at `matched == 0` skips the text symbol, and reaching
/// `matched == m` emits `i - matched` and falls back to keep searching for
/// overlapping occurrences.
fn scan(text: &[u8], pattern: &[u8], border: &[usize]) -> Vec<usize> {
    let m = pattern.len();
    let mut found = Vec::new();
    let mut matched = 0;
    let mut i = 0;

    while i < text.len() {
        if symbols_match(pattern[matched], text[i]) {
            i += 1;
            matched += 1;
        } else if matched > 0 {
            matched = border[matched - 1];
        } else {
            i += 1;
        }
        if matched == m {
            found.push(i - matched);
            matched = border[m - 1];
        }
    }

    found
}
