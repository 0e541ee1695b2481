//! Batch checking: forbidden block in, verdict lines out.

use std::io::{BufRead, Write};

use log::debug;

use crate::domain::Domain;
use crate::error::Result;
use crate::input::DomainReader;
use crate::matcher::DomainMatcher;
use crate::types::{BatchSummary, Verdict};

/// Read a forbidden block and a query block from `input`, then write one
/// verdict line per query to `output`, in input order.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<BatchSummary> {
    let mut reader = DomainReader::new(input);

    let forbidden = reader.read_block()?;
    let forbidden_len = forbidden.len();
    let matcher = DomainMatcher::new(forbidden);

    let queries = reader.read_block()?;
    debug!("checking {} queries", queries.len());

    let mut summary = BatchSummary {
        forbidden: forbidden_len,
        minimized: matcher.len(),
        queries: queries.len(),
        blocked: 0,
    };
    summary.blocked = write_verdicts(&matcher, &queries, &mut output)?;
    output.flush()?;

    Ok(summary)
}

/// Write one verdict line per query and return how many were `Bad`.
pub fn write_verdicts<W: Write>(
    matcher: &DomainMatcher,
    queries: &[Domain],
    output: &mut W,
) -> Result<usize> {
    let mut blocked = 0;
    for query in queries {
        let verdict = Verdict::from(matcher.is_forbidden(query));
        if verdict.is_forbidden() {
            blocked += 1;
        }
        writeln!(output, "{}", verdict)?;
    }
    Ok(blocked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckerError;

    fn run_str(input: &str) -> (String, BatchSummary) {
        let mut out = Vec::new();
        let summary = run(input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_run() {
        let input = "\
4
gdz.ru
maps.me
m.gdz.ru
com
7
gdz.ru
gdz.com
m.maps.me
alg.m.gdz.ru
maps.com
maps.ru
gdz.ua
";
        let (out, summary) = run_str(input);
        assert_eq!(out, "Bad\nBad\nBad\nBad\nBad\nGood\nGood\n");
        assert_eq!(
            summary,
            BatchSummary {
                forbidden: 4,
                minimized: 3,
                queries: 7,
                blocked: 5,
            }
        );
    }

    #[test]
    fn test_run_empty_forbidden() {
        let (out, summary) = run_str("0\n2\nanything.com\nexample.org\n");
        assert_eq!(out, "Good\nGood\n");
        assert_eq!(summary.blocked, 0);
    }

    #[test]
    fn test_run_no_queries() {
        let (out, summary) = run_str("1\nexample.com\n0\n");
        assert!(out.is_empty());
        assert_eq!(summary.queries, 0);
    }

    #[test]
    fn test_run_flushes_buffered_output() {
        let mut writer = std::io::BufWriter::with_capacity(1 << 16, Vec::new());
        run("1\ncom\n2\ngoogle.com\nexample.org\n".as_bytes(), &mut writer).unwrap();

        assert!(writer.buffer().is_empty());
        assert_eq!(writer.get_ref().as_slice(), b"Bad\nGood\n");
    }

    #[test]
    fn test_run_truncated_input() {
        let mut out = Vec::new();
        let err = run("1\nexample.com\n".as_bytes(), &mut out).unwrap_err();
        assert!(matches!(err, CheckerError::UnexpectedEof { .. }));
        assert!(out.is_empty());
    }
}
