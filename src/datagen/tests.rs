use rstest::rstest;

use super::*;

#[test]
fn test_text_length_and_alphabet() {
    let mut generator = Generator::new(Some(1));
    for (alphabet, symbols) in [(Alphabet::Binary, b"01".as_slice()), (Alphabet::Quad, b"abcd")] {
        let text = generator.text(alphabet, 500);
        assert_eq!(text.len(), 500);
        assert!(text.iter().all(|s| symbols.contains(s)));
    }
}

#[test]
fn test_pattern_is_sampled_from_text() {
    let mut generator = Generator::new(Some(2));
    let text = generator.text(Alphabet::Quad, 200);
    let pattern = generator.pattern(&text, 20, 0);
    assert_eq!(pattern.len(), 20);
    assert!(text.windows(20).any(|window| window == pattern));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
#[case(10)]
#[case(30)]
fn test_pattern_wildcard_count(#[case] wildcards: usize) {
    let mut generator = Generator::new(Some(3));
    let text = generator.text(Alphabet::Binary, 100);
    let pattern = generator.pattern(&text, 30, wildcards);
    assert_eq!(pattern.iter().filter(|&&s| s == WILDCARD).count(), wildcards);
}

#[test]
fn test_seeded_generator_is_reproducible() {
    let mut a = Generator::new(Some(7));
    let mut b = Generator::new(Some(7));
    assert_eq!(a.text(Alphabet::Quad, 64), b.text(Alphabet::Quad, 64));
}
