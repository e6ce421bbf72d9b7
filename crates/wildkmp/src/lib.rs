//! Wildcard-aware substring search.
//!
//! Finds every occurrence (overlapping ones included) of a pattern in a text,
//! where the pattern may contain the `?` wildcard matching any single symbol.
//! Symbols are bytes, compared raw.
//!
//! Three interchangeable matchers implement the same [`Matcher`] contract:
//!
//! - [`NaiveMatcher`] — brute-force scan, the correctness oracle
//! - [`KmpMatcher`] — Knuth-Morris-Pratt scan driven by the wildcard-aware
//!   border array
//! - [`RefinedKmpMatcher`] — the same scan driven by the refined border array,
//!   which skips fallback steps known to mismatch again immediately
//!
//! The border array construction is where wildcards bite: the classic
//! prefix-function recursion is unsound whenever its fallback chain lands on a
//! wildcard, and an exhaustive border check takes over for that index. See
//! [`border::border_array`] for the details and the cost model.
//!
//! # Examples
//!
//! ```
//! use wildkmp::{KmpMatcher, Matcher};
//!
//! let found = KmpMatcher.find(b"abcabc", b"a?c").unwrap();
//! assert_eq!(found.as_slice(), &[0, 3]);
//!
//! let found = KmpMatcher.find(b"abcabc", b"xyz").unwrap();
//! assert!(found.is_empty());
//! ```
//!
//! Overlapping occurrences are all reported:
//!
//! ```
//! use wildkmp::{Matcher, NaiveMatcher, RefinedKmpMatcher};
//!
//! let found = RefinedKmpMatcher.find(b"aaaaa", b"aaa").unwrap();
//! assert_eq!(found.as_slice(), &[0, 1, 2]);
//! assert_eq!(found, NaiveMatcher.find(b"aaaaa", b"aaa").unwrap());
//! ```

// public modules
pub mod border;
pub mod matcher;
pub mod symbol;

// private modules
mod error;

// public uses
pub use error::{Error, Result};
pub use matcher::{KmpMatcher, Matcher, NaiveMatcher, Occurrences, RefinedKmpMatcher};
pub use symbol::{WILDCARD, symbols_match};
