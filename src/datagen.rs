// third-party imports
use rand::{Rng, SeedableRng, rngs::StdRng};

// workspace imports
use wildkmp::WILDCARD;

// ---

/// Alphabet the generated texts are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Two symbols, '0' and '1'.
    Binary,
    /// Four symbols, 'a' through 'd'.
    Quad,
}

impl Alphabet {
    /// Label used in report rows and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Quad => "four-symbol",
        }
    }

    fn symbols(&self) -> &'static [u8] {
        match self {
            Self::Binary => b"01",
            Self::Quad => b"abcd",
        }
    }
}

/// Random text and pattern source for the benchmark sweep.
///
/// All randomness of the harness lives here; the matchers themselves are
/// pure functions of their inputs.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Creates a generator from an explicit seed, or from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Generates a random text of the given length over the alphabet.
    pub fn text(&mut self, alphabet: Alphabet, len: usize) -> Vec<u8> {
        let symbols = alphabet.symbols();
        (0..len)
            .map(|_| symbols[self.rng.random_range(0..symbols.len())])
            .collect()
    }

    /// Samples a pattern of the given length from the text and replaces
    /// exactly `wildcards` distinct symbols with the wildcard.
    ///
    /// Requires `0 < len <= text.len()` and `wildcards <= len`. Generated
    /// texts never contain the wildcard symbol, so an already replaced
    /// position is simply re-drawn.
    pub fn pattern(&mut self, text: &[u8], len: usize, wildcards: usize) -> Vec<u8> {
        assert!(len > 0 && len <= text.len());
        assert!(wildcards <= len);

        let start = self.rng.random_range(0..=text.len() - len);
        let mut pattern = text[start..start + len].to_vec();
        for _ in 0..wildcards {
            let mut pos = self.rng.random_range(0..pattern.len());
            while pattern[pos] == WILDCARD {
                pos = self.rng.random_range(0..pattern.len());
            }
            pattern[pos] = WILDCARD;
        }

        pattern
    }
}

#[cfg(test)]
mod tests;
