// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Parser, ValueEnum};

// local imports
use crate::datagen::Alphabet;

// ---

/// Benchmark harness for wildcard-aware substring search algorithms.
///
/// Generates random texts, samples patterns from them, injects wildcards,
/// and times the naive, KMP, and refined-KMP matchers over a sweep of
/// pattern lengths, writing one semicolon-delimited report row per sweep
/// point.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Text lengths to generate, one sweep per length.
    #[arg(long, num_args = 1.., default_values_t = [10_000usize, 100_000])]
    pub text_len: Vec<usize>,

    /// Alphabets to generate texts from.
    #[arg(long, num_args = 1.., default_values = ["binary", "quad"])]
    #[arg(value_enum)]
    pub alphabet: Vec<AlphabetOption>,

    /// Shortest pattern length in the sweep.
    #[arg(long, default_value = "100", overrides_with = "min_pattern_len")]
    pub min_pattern_len: usize,

    /// Longest pattern length in the sweep.
    #[arg(long, default_value = "3000", overrides_with = "max_pattern_len")]
    pub max_pattern_len: usize,

    /// Pattern length increment between sweep points.
    #[arg(long, default_value = "100", overrides_with = "step")]
    pub step: usize,

    /// Number of sampled patterns per sweep point.
    #[arg(long, default_value = "10", overrides_with = "samples")]
    pub samples: usize,

    /// Number of symbols replaced with the wildcard in every sampled pattern.
    #[arg(
        long,
        default_value = "4",
        env = "WILDKMP_WILDCARDS",
        overrides_with = "wildcards"
    )]
    pub wildcards: usize,

    /// Random seed; taken from OS entropy when omitted.
    #[arg(long, env = "WILDKMP_SEED", overrides_with = "seed")]
    pub seed: Option<u64>,

    /// File to append report rows to; writes to stdout when omitted.
    #[arg(long, short = 'o', overrides_with = "output")]
    pub output: Option<PathBuf>,

    /// Check every KMP result against the naive oracle and fail on divergence.
    #[arg(long)]
    pub verify: bool,
}

/// Alphabet choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetOption {
    /// Two symbols, '0' and '1'.
    Binary,
    /// Four symbols, 'a' through 'd'.
    Quad,
}

impl From<AlphabetOption> for Alphabet {
    fn from(option: AlphabetOption) -> Self {
        match option {
            AlphabetOption::Binary => Alphabet::Binary,
            AlphabetOption::Quad => Alphabet::Quad,
        }
    }
}
