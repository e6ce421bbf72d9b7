// std imports
use std::time::{Duration, Instant};

// workspace imports
use wildkmp::{Matcher, Occurrences};

// local imports
use crate::error::Result;

/// Runs a single matcher call, reporting the result with its elapsed wall
/// time.
pub fn measure<M: Matcher + ?Sized>(
    matcher: &M,
    text: &[u8],
    pattern: &[u8],
) -> Result<(Occurrences, Duration)> {
    let start = Instant::now();
    let found = matcher.find(text, pattern)?;
    Ok((found, start.elapsed()))
}

#[cfg(test)]
mod tests {
    use wildkmp::NaiveMatcher;

    use super::*;

    #[test]
    fn test_measure_returns_result() {
        let (found, _elapsed) = measure(&NaiveMatcher, b"abcabc", b"abc").unwrap();
        assert_eq!(found.as_slice(), &[0, 3]);
    }

    #[test]
    fn test_measure_propagates_input_errors() {
        assert!(measure(&NaiveMatcher, b"ab", b"abc").is_err());
    }
}
