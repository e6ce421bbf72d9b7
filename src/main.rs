// std imports
use std::{
    fs::OpenOptions,
    io::{Write, stdout},
    process,
    time::Duration,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// workspace imports
use wildkmp::{KmpMatcher, Matcher, NaiveMatcher, RefinedKmpMatcher};

// local imports
use wildkmp_bench::{
    cli,
    datagen::{Alphabet, Generator},
    differential,
    error::*,
    report::{Report, Row},
    timing::measure,
};

const WILDKMP_DEBUG_LOG: &str = "WILDKMP_DEBUG_LOG";
const WILDKMP_DEBUG_LOG_STYLE: &str = "WILDKMP_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WILDKMP_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(WILDKMP_DEBUG_LOG)
                .write_style(WILDKMP_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();
    let opt = cli::Opt::parse();

    let matchers: [&dyn Matcher; 3] = [&NaiveMatcher, &KmpMatcher, &RefinedKmpMatcher];
    let samples = opt.samples.max(1);
    let step = opt.step.max(1);

    let out: Box<dyn Write> = match &opt.output {
        Some(path) => Box::new(OpenOptions::new().create(true).append(true).open(path)?),
        None => Box::new(stdout().lock()),
    };
    let mut report = Report::new(out);
    report.header(&matchers.map(|m| m.name()))?;

    let mut generator = Generator::new(opt.seed);

    for alphabet in opt.alphabet.iter().copied().map(Alphabet::from) {
        for &text_len in &opt.text_len {
            let text = generator.text(alphabet, text_len);
            log::info!("generated {} text of {} symbols", alphabet.label(), text_len);

            let mut pattern_len = opt.min_pattern_len.max(1);
            while pattern_len <= opt.max_pattern_len && pattern_len <= text_len {
                let wildcards = opt.wildcards.min(pattern_len);
                let mut totals = vec![Duration::ZERO; matchers.len()];

                for _ in 0..samples {
                    let pattern = generator.pattern(&text, pattern_len, wildcards);

                    let (oracle, elapsed) = measure(matchers[0], &text, &pattern)?;
                    totals[0] += elapsed;

                    for (k, matcher) in matchers.iter().enumerate().skip(1) {
                        let (found, elapsed) = measure(*matcher, &text, &pattern)?;
                        totals[k] += elapsed;
                        if opt.verify {
                            differential::verify(matcher.name(), &oracle, &found)?;
                        }
                    }
                }

                let row = Row {
                    alphabet: alphabet.label(),
                    text_len,
                    pattern_len,
                    timings: matchers
                        .iter()
                        .zip(&totals)
                        .map(|(matcher, &total)| (matcher.name(), total / samples as u32))
                        .collect(),
                };
                report.row(&row)?;
                log::debug!(
                    "finished sweep point: alphabet={} text-len={} pattern-len={}",
                    alphabet.label(),
                    text_len,
                    pattern_len
                );

                pattern_len += step;
            }
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
