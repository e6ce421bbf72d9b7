// std imports
use std::io::Write;
use std::time::Duration;

// local imports
use crate::error::Result;

// ---

/// One aggregated sweep point.
#[derive(Debug, Clone)]
pub struct Row {
    pub alphabet: &'static str,
    pub text_len: usize,
    pub pattern_len: usize,
    /// Mean elapsed time per algorithm, in column order.
    pub timings: Vec<(&'static str, Duration)>,
}

/// Semicolon-delimited report writer.
///
/// Timings are rendered as rounded microseconds to keep the numbers
/// spreadsheet-friendly.
pub struct Report<W> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the header row naming the algorithm columns.
    pub fn header(&mut self, algorithms: &[&str]) -> Result<()> {
        write!(self.out, "alphabet;text-length;pattern-length")?;
        for name in algorithms {
            write!(self.out, ";{name}-us")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Writes one sweep point.
    pub fn row(&mut self, row: &Row) -> Result<()> {
        write!(self.out, "{};{};{}", row.alphabet, row.text_len, row.pattern_len)?;
        for (_, elapsed) in &row.timings {
            write!(self.out, ";{}", micros(*elapsed))?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

fn micros(elapsed: Duration) -> u64 {
    (elapsed.as_nanos() as f64 / 1000.0).round() as u64
}

#[cfg(test)]
mod tests;
