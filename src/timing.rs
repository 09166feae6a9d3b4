//! Operation timing and the transcript every demonstrator writes to.

use std::fmt;
use std::io;
use std::io::Write;
use std::time::Duration;
use std::time::Instant;

/// One timed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub op: String,
    pub elapsed: Duration,
}

/// Collects result lines and operation timings, writing both to `out`.
pub struct Transcript<W: Write> {
    out: W,
    timings: Vec<Timing>,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Transcript<W> {
        return Transcript {
            out,
            timings: Vec::new(),
        };
    }

    /// Write one line of result text.
    pub fn line(&mut self, text: impl fmt::Display) -> io::Result<()> {
        return writeln!(self.out, "{}", text);
    }

    /// Run `f`, then record and print how long it took.
    pub fn timed<T>(&mut self, op: impl Into<String>, f: impl FnOnce() -> T) -> io::Result<T> {
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        let op = op.into();
        tracing::debug!(op = %op, nanos = elapsed.as_nanos() as u64, "timed operation");
        writeln!(self.out, "  {}: {} ns", op, elapsed.as_nanos())?;
        self.timings.push(Timing { op, elapsed });
        return Ok(result);
    }

    pub fn timings(&self) -> &[Timing] {
        return &self.timings;
    }

    /// Total time across every recorded operation.
    pub fn total(&self) -> Duration {
        return self.timings.iter().map(|t| t.elapsed).sum();
    }

    /// One-line summary of the recorded timings.
    pub fn report(&self) -> String {
        let slowest = self.timings.iter().max_by_key(|t| t.elapsed);
        return match slowest {
            Some(slowest) => format!(
                "{} timed operations, {} ns total, slowest: {} ({} ns)",
                self.timings.len(),
                self.total().as_nanos(),
                slowest.op,
                slowest.elapsed.as_nanos(),
            ),
            None => "no timed operations".to_string(),
        };
    }

    pub fn into_inner(self) -> W {
        return self.out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_returns_result_and_records_op() {
        let mut transcript = Transcript::new(Vec::new());
        let value = transcript.timed("add", || 2 + 2).unwrap();
        assert_eq!(value, 4);
        assert_eq!(transcript.timings().len(), 1);
        assert_eq!(transcript.timings()[0].op, "add");

        let text = String::from_utf8(transcript.into_inner()).unwrap();
        assert!(text.starts_with("  add: ") && text.ends_with(" ns\n"), "{}", text);
    }

    #[test]
    fn lines_are_written_in_order() {
        let mut transcript = Transcript::new(Vec::new());
        transcript.line("first").unwrap();
        transcript.line(format_args!("second {}", 2)).unwrap();
        let text = String::from_utf8(transcript.into_inner()).unwrap();
        assert_eq!(text, "first\nsecond 2\n");
    }

    #[test]
    fn report_names_slowest_operation() {
        let mut transcript = Transcript::new(io::sink());
        assert_eq!(transcript.report(), "no timed operations");

        transcript.timed("quick", || ()).unwrap();
        transcript.timed("slow", || std::thread::sleep(Duration::from_millis(5))).unwrap();
        let report = transcript.report();
        assert!(report.starts_with("2 timed operations"), "{}", report);
        assert!(report.contains("slowest: slow"), "{}", report);
        assert!(transcript.total() >= Duration::from_millis(5));
    }
}
