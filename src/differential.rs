// workspace imports
use wildkmp::Occurrences;

// local imports
use crate::error::{Error, Result};

/// Compares a candidate matcher's result against the naive oracle's.
///
/// Wildcard equality is not transitive, so on adversarial wildcard
/// placements the border-driven matchers can genuinely diverge from the
/// oracle. Divergence signals a logic problem in the candidate (or such an
/// input) and is surfaced as a distinct error, never swallowed.
pub fn verify(algorithm: &'static str, oracle: &Occurrences, candidate: &Occurrences) -> Result<()> {
    if oracle == candidate {
        return Ok(());
    }
    Err(Error::Divergence {
        algorithm,
        oracle: oracle.clone(),
        candidate: candidate.clone(),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_agreement_passes() {
        let oracle = Occurrences::from(vec![0, 3]);
        let candidate = Occurrences::from(vec![0, 3]);
        assert!(verify("kmp", &oracle, &candidate).is_ok());
    }

    #[test]
    fn test_divergence_is_reported() {
        let oracle = Occurrences::from(vec![0]);
        let candidate = Occurrences::from(vec![0, 1]);
        assert_matches!(
            verify("kmp", &oracle, &candidate),
            Err(Error::Divergence { algorithm: "kmp", .. })
        );
    }

    #[test]
    fn test_empty_results_agree() {
        let empty = Occurrences::default();
        assert!(verify("refined", &empty, &empty.clone()).is_ok());
    }
}
