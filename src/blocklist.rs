//! Blocklist text parsing.
//!
//! A blocklist holds one forbidden domain per line:
//!
//! ```text
//! # Comments run to the end of the line
//! ads.example.com
//! 0.0.0.0 tracker.net          # hosts-file lines keep only the host names
//! 127.0.0.1 a.spam.org b.spam.org
//! file: /etc/blocklists/extra.txt
//! ```
//!
//! `file:` includes another blocklist, up to [`MAX_INCLUDE_DEPTH`] levels deep.

use std::fs;
use std::net::IpAddr;
use std::path::Path;

use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Domain;
use crate::error::{CheckerError, Result};

/// Hosts-file line: IPv4 or IPv6 address (optionally with a zone) followed
/// by one or more host names
static HOSTS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<addr>\d{1,3}(?:\.\d{1,3}){3}|[0-9A-Fa-f]*:[0-9A-Fa-f:.]*(?:%\S+)?)\s+(?P<hosts>.+)$",
    )
    .expect("HOSTS_LINE: hardcoded regex is invalid")
});

/// Addresses that blackhole the hosts listed after them
const SINK_ADDRESSES: &[&str] = &["0.0.0.0", "127.0.0.1", "::", "::1"];

/// Loopback names found in hosts-file headers
const LOOPBACK_ALIASES: &[&str] = &[
    "localhost",
    "localhost.localdomain",
    "local",
    "ip6-localhost",
    "ip6-loopback",
];

/// Maximum nesting depth for `file:` include directives.
pub const MAX_INCLUDE_DEPTH: usize = 10;

/// One forbidden domain read from a blocklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocklistEntry {
    /// Forbidden domain
    pub domain: Domain,
    /// Line number in the text it was read from (for error reporting)
    pub line_num: usize,
}

/// Parse blocklist text.
///
/// Supports `file: /path/to/list.txt` directive to include entries from an external file.
pub fn parse_blocklist(text: &str) -> Result<Vec<BlocklistEntry>> {
    parse_blocklist_inner(text, 0)
}

fn parse_blocklist_inner(text: &str, depth: usize) -> Result<Vec<BlocklistEntry>> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(CheckerError::ParseError(format!(
            "file include depth exceeds maximum ({MAX_INCLUDE_DEPTH}), possible circular include"
        )));
    }

    let mut entries = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        // Remove comments and trim whitespace
        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        // Handle file include directive
        if let Some(path) = line.strip_prefix("file:") {
            let path = path.trim();
            trace!("including blocklist '{}' (depth {})", path, depth + 1);
            entries.extend(parse_blocklist_file_inner(path, depth + 1)?);
            continue;
        }

        parse_line(line, line_num, &mut entries)?;
    }

    Ok(entries)
}

/// Parse a blocklist file.
pub fn parse_blocklist_file(path: impl AsRef<Path>) -> Result<Vec<BlocklistEntry>> {
    parse_blocklist_file_inner(path, 0)
}

fn parse_blocklist_file_inner(path: impl AsRef<Path>, depth: usize) -> Result<Vec<BlocklistEntry>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        CheckerError::ParseError(format!(
            "Failed to read blocklist file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_blocklist_inner(&text, depth)
}

/// Parse a single non-empty, comment-free line
fn parse_line(line: &str, line_num: usize, entries: &mut Vec<BlocklistEntry>) -> Result<()> {
    let hosts = match HOSTS_LINE.captures(line) {
        Some(captures) => {
            let addr = &captures["addr"];
            // Hosts mapped to a real address are not blocked by this list
            if !SINK_ADDRESSES.contains(&addr) {
                warn!("line {}: skipping hosts entry for address {}", line_num, addr);
                return Ok(());
            }
            captures.name("hosts").map_or("", |m| m.as_str())
        }
        None => {
            if line.split_whitespace().nth(1).is_some() {
                return Err(CheckerError::ParseErrorAtLine {
                    line: line_num,
                    message: format!("Expected a single domain: {}", line),
                });
            }
            line
        }
    };

    for host in hosts.split_whitespace() {
        if host.contains('*') {
            return Err(CheckerError::ParseErrorAtLine {
                line: line_num,
                message: format!("Wildcard patterns are not supported: {}", host),
            });
        }
        if LOOPBACK_ALIASES.contains(&host) || host.parse::<IpAddr>().is_ok() {
            debug!("line {}: skipping {} entry", line_num, host);
            continue;
        }
        entries.push(BlocklistEntry {
            domain: Domain::new(host),
            line_num,
        });
    }

    Ok(())
}
