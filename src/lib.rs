//! Domain Checker - forbidden-domain matching for Rust
//!
//! This library decides whether a domain is forbidden because it equals, or
//! is a sub-domain of, an entry in a blocklist:
//! - Canonical domain keys whose byte order follows the domain hierarchy
//! - Minimal forbidden sets (redundant sub-domains are dropped on build)
//! - O(log n) lookups by binary search
//! - Blocklist files with comments, hosts-file lines and includes
//! - Optional LRU verdict cache
//!
//! # Example
//!
//! ```rust
//! use domain_checker::{Domain, DomainMatcher};
//!
//! let matcher: DomainMatcher = ["example.com", "sub.example.com", "com"]
//!     .into_iter()
//!     .map(Domain::new)
//!     .collect();
//!
//! // "com" covers the other two entries
//! assert_eq!(matcher.len(), 1);
//!
//! assert!(matcher.is_forbidden(&Domain::new("mail.google.com")));
//! assert!(!matcher.is_forbidden(&Domain::new("comcast.net")));
//! ```
//!
//! # Batch Format
//!
//! [`batch::run`] reads two count-prefixed blocks, the forbidden domains and
//! then the queries, and writes `Bad` or `Good` for each query:
//!
//! ```rust
//! let input = "2\nexample.com\ntest.com\n2\na.example.com\nexample.org\n";
//! let mut output = Vec::new();
//!
//! domain_checker::batch::run(input.as_bytes(), &mut output).unwrap();
//! assert_eq!(output, b"Bad\nGood\n");
//! ```

pub mod batch;
pub mod blocklist;
pub mod domain;
pub mod error;
pub mod input;
pub mod matcher;
pub mod types;

// Re-export commonly used items
pub use blocklist::{parse_blocklist, parse_blocklist_file, BlocklistEntry};
pub use domain::Domain;
pub use error::{CheckerError, Result};
pub use input::DomainReader;
pub use matcher::{CachedMatcher, DomainMatcher, DEFAULT_CACHE_SIZE};
pub use types::{BatchSummary, Verdict};
