//! Count-prefixed domain blocks.
//!
//! Input consists of blocks: a line holding a count `N`, then `N` lines with
//! one domain each. Whitespace around counts and domains is ignored, and
//! blank lines are skipped.

use std::io::BufRead;

use crate::domain::Domain;
use crate::error::{CheckerError, Result};

/// Upper bound on capacity reserved up front for a block, whatever its count says
const MAX_PREALLOCATED: usize = 4096;

/// Reads count-prefixed domain blocks from a buffered reader
#[derive(Debug)]
pub struct DomainReader<R> {
    reader: R,
    line_num: usize,
    buf: String,
}

impl<R: BufRead> DomainReader<R> {
    /// Create a new reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_num: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far (1-based number of the last line read)
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    /// Read a count line.
    pub fn read_count(&mut self) -> Result<usize> {
        let line = self
            .next_non_blank()?
            .ok_or_else(|| CheckerError::UnexpectedEof {
                expected: "a domain count".to_string(),
                found: 0,
            })?;

        line.parse().map_err(|_| CheckerError::ParseErrorAtLine {
            line: self.line_num,
            message: format!("Invalid count: {}", line),
        })
    }

    /// Read exactly `count` domains, one per line.
    pub fn read_domains(&mut self, count: usize) -> Result<Vec<Domain>> {
        let mut domains = Vec::with_capacity(count.min(MAX_PREALLOCATED));

        while domains.len() < count {
            let line = self
                .next_non_blank()?
                .ok_or_else(|| CheckerError::UnexpectedEof {
                    expected: format!("{} domains", count),
                    found: domains.len(),
                })?;

            if line.split_whitespace().nth(1).is_some() {
                return Err(CheckerError::ParseErrorAtLine {
                    line: self.line_num,
                    message: format!("Expected a single domain: {}", line),
                });
            }

            domains.push(Domain::new(line));
        }

        Ok(domains)
    }

    /// Read a count followed by that many domains.
    pub fn read_block(&mut self) -> Result<Vec<Domain>> {
        let count = self.read_count()?;
        self.read_domains(count)
    }

    /// Next line with content, trimmed; `None` at end of input
    fn next_non_blank(&mut self) -> Result<Option<String>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_num += 1;

            let line = self.buf.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}
