use rand::{Rng, SeedableRng, rngs::StdRng};
use rstest::rstest;

use super::*;

#[rstest]
#[case(b"?", vec![0])]
#[case(b"??", vec![0, 1])]
#[case(b"?a", vec![0, 1])]
#[case(b"aab", vec![0, 1, 0])]
#[case(b"aaaa", vec![0, 1, 2, 3])]
#[case(b"abcabc", vec![0, 0, 0, 1, 2, 3])]
#[case(b"a?a", vec![0, 1, 2])]
#[case(b"a?ab", vec![0, 1, 2, 2])]
#[case(b"ab?", vec![0, 0, 1])]
#[case(b"ab?b", vec![0, 0, 1, 2])]
fn test_border_array(#[case] pattern: &[u8], #[case] expected: Vec<usize>) {
    assert_eq!(border_array(pattern), expected);
}

#[test]
fn test_border_array_empty_pattern_is_degenerate() {
    assert_eq!(border_array(b""), Vec::<usize>::new());
}

#[test]
fn test_wildcard_fallback_equals_exhaustive_check() {
    // The wildcard at index 1 taints the chain for index 2, so the border
    // there must come from the exhaustive prefix-vs-suffix check.
    let pattern = b"a?a";
    assert_eq!(border_array(pattern)[2], widest_border(pattern, 2));
    assert_eq!(widest_border(pattern, 2), 2);
}

#[test]
fn test_border_array_matches_exhaustive_reference_without_wildcards() {
    // Without wildcards the incremental recursion and the exhaustive check
    // agree at every index.
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let m = rng.random_range(1..=24);
        let pattern: Vec<u8> = (0..m).map(|_| b'a' + rng.random_range(0..2)).collect();
        let border = border_array(&pattern);
        for i in 1..m {
            assert_eq!(border[i], widest_border(&pattern, i), "pattern {pattern:?} index {i}");
        }
    }
}

#[rstest]
#[case(b"?a", vec![0, 1])]
#[case(b"aab", vec![0, 1, 0])]
#[case(b"aaa", vec![0, 0, 2])]
#[case(b"a?a", vec![0, 0, 2])]
#[case(b"abcabd", vec![0, 0, 0, 0, 2, 0])]
fn test_refined_border_array(#[case] pattern: &[u8], #[case] expected: Vec<usize>) {
    let border = border_array(pattern);
    assert_eq!(refined_border_array(pattern, &border), expected);
}

#[test]
fn test_refined_border_array_empty_pattern() {
    assert_eq!(refined_border_array(b"", &[]), Vec::<usize>::new());
}

#[test]
fn test_refined_last_entry_keeps_plain_border() {
    for pattern in [b"aaa".as_slice(), b"aba", b"a?a", b"abab"] {
        let border = border_array(pattern);
        let refined = refined_border_array(pattern, &border);
        assert_eq!(refined[pattern.len() - 1], border[pattern.len() - 1]);
    }
}

#[test]
fn test_border_bounds_invariant() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let m = rng.random_range(1..=32);
        let mut pattern: Vec<u8> = (0..m).map(|_| b'a' + rng.random_range(0..4)).collect();
        for _ in 0..2.min(m) {
            let pos = rng.random_range(0..m);
            pattern[pos] = WILDCARD;
        }
        let border = border_array(&pattern);
        let refined = refined_border_array(&pattern, &border);
        assert_eq!(border[0], 0);
        for i in 0..m {
            assert!(border[i] <= i);
            assert!(refined[i] <= i);
        }
    }
}
