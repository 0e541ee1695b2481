//! Forbidden-domain matcher.
//!
//! Keeps the forbidden set as a sorted `Vec<Domain>` with every redundant
//! descendant removed, so a query needs one binary search and one prefix
//! check.
use std::path::Path;

use log::debug;

use crate::blocklist::{parse_blocklist, parse_blocklist_file};
use crate::domain::Domain;
use crate::error::Result;

/// Minimal, sorted set of forbidden domains
#[derive(Debug, Clone, Default)]
pub struct DomainMatcher {
    /// Sorted by canonical key; no entry is an ancestor of another
    domains: Vec<Domain>,
}

impl DomainMatcher {
    /// Build a matcher from any collection of forbidden domains.
    ///
    /// Duplicates and domains already covered by one of their ancestors are
    /// dropped. Sorting by canonical key puts an ancestor directly before
    /// all of its descendants, so comparing each entry with the last
    /// retained one is enough.
    pub fn new<I>(domains: I) -> Self
    where
        I: IntoIterator<Item = Domain>,
    {
        let mut domains: Vec<Domain> = domains.into_iter().collect();
        let input_len = domains.len();

        domains.sort_unstable();
        domains.dedup_by(|current, retained| current.is_subdomain_of(retained));
        domains.shrink_to_fit();

        debug!(
            "built domain matcher: {} forbidden domains, {} after minimization",
            input_len,
            domains.len()
        );

        Self { domains }
    }

    /// Build a matcher from blocklist text (see [`crate::blocklist`]).
    pub fn from_blocklist(text: &str) -> Result<Self> {
        let entries = parse_blocklist(text)?;
        Ok(Self::new(entries.into_iter().map(|entry| entry.domain)))
    }

    /// Build a matcher from a blocklist file.
    pub fn from_blocklist_file(path: impl AsRef<Path>) -> Result<Self> {
        let entries = parse_blocklist_file(path)?;
        Ok(Self::new(entries.into_iter().map(|entry| entry.domain)))
    }

    /// Check if `query` equals or is a sub-domain of a forbidden domain.
    pub fn is_forbidden(&self, query: &Domain) -> bool {
        self.blocking_entry(query).is_some()
    }

    /// Return the forbidden domain that covers `query`, if any.
    ///
    /// Any ancestor of `query` has a key that is a prefix of the query key,
    /// so it sorts at or before it. Minimality leaves at most one such
    /// entry, and it is the last one not greater than `query`.
    pub fn blocking_entry(&self, query: &Domain) -> Option<&Domain> {
        let upper = self.domains.partition_point(|domain| domain <= query);
        self.domains[..upper]
            .last()
            .filter(|candidate| query.is_subdomain_of(candidate))
    }

    /// The minimized forbidden set, sorted by canonical key
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Number of domains retained after minimization
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Check if the matcher forbids nothing
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl FromIterator<Domain> for DomainMatcher {
    fn from_iter<T: IntoIterator<Item = Domain>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(names: &[&str]) -> DomainMatcher {
        names.iter().copied().map(Domain::new).collect()
    }

    fn names(matcher: &DomainMatcher) -> Vec<&str> {
        matcher.domains().iter().map(Domain::name).collect()
    }

    #[test]
    fn test_minimization() {
        let m = matcher(&[
            "example.com",
            "google.com",
            "test.com",
            "sub.example.com",
            "mail.google.com",
        ]);
        assert_eq!(m.len(), 3);
        assert_eq!(names(&m), vec!["example.com", "google.com", "test.com"]);
    }

    #[test]
    fn test_is_forbidden() {
        let m = matcher(&[
            "example.com",
            "google.com",
            "test.com",
            "sub.example.com",
            "mail.google.com",
        ]);

        assert!(m.is_forbidden(&Domain::new("example.com")));
        assert!(!m.is_forbidden(&Domain::new("subexample.com")));
        assert!(m.is_forbidden(&Domain::new("google.com")));
        assert!(m.is_forbidden(&Domain::new("sub.example.com")));
        assert!(m.is_forbidden(&Domain::new("mail.google.com")));
        assert!(!m.is_forbidden(&Domain::new("example.org")));
        assert!(!m.is_forbidden(&Domain::new("m.example.org")));
        assert!(!m.is_forbidden(&Domain::new("google.org")));
        assert!(!m.is_forbidden(&Domain::new("test.org")));
    }

    #[test]
    fn test_empty_matcher() {
        let m = DomainMatcher::new(Vec::new());
        assert!(m.is_empty());
        for name in [
            "example.com",
            "",
            "subexample.com",
            "google.com",
            "sub.example.com",
            "mail.google.com",
            "example.org",
            "m.example.org",
            "google.org",
            "test.org",
        ] {
            assert!(!m.is_forbidden(&Domain::new(name)), "name: {:?}", name);
        }
    }

    #[test]
    fn test_top_level_entry() {
        let m = matcher(&["com"]);
        assert!(m.is_forbidden(&Domain::new("google.com")));
        assert!(m.is_forbidden(&Domain::new("com")));
        assert!(!m.is_forbidden(&Domain::new("comcast.net")));
        assert!(!m.is_forbidden(&Domain::new("net")));
    }

    #[test]
    fn test_duplicates_collapse() {
        let m = matcher(&["example.com", "example.com", "example.com"]);
        assert_eq!(names(&m), vec!["example.com"]);
    }

    #[test]
    fn test_ancestor_listed_after_descendant() {
        let m = matcher(&["a.b.example.com", "b.example.com", "example.com"]);
        assert_eq!(names(&m), vec!["example.com"]);
    }

    #[test]
    fn test_sibling_with_dash_does_not_hide_ancestor() {
        // ".com.a-b." sorts before ".com.a." yet must not shadow "a.com"
        let m = matcher(&["a-b.com", "a.com"]);
        assert_eq!(m.len(), 2);
        assert!(m.is_forbidden(&Domain::new("x.a.com")));
        assert!(m.is_forbidden(&Domain::new("x.a-b.com")));
        assert!(!m.is_forbidden(&Domain::new("b.com")));
    }

    #[test]
    fn test_query_sorting_after_unrelated_descendant() {
        // Between "example.com" and the query sit no retained entries
        let m = matcher(&["example.com", "zzz.org"]);
        assert!(m.is_forbidden(&Domain::new("zzz.deep.example.com")));
        assert!(!m.is_forbidden(&Domain::new("example.net")));
    }

    #[test]
    fn test_root_forbids_everything() {
        let m = matcher(&["", "example.com", "org"]);
        assert_eq!(m.len(), 1);
        assert!(m.is_forbidden(&Domain::new("")));
        assert!(m.is_forbidden(&Domain::new("anything.com")));
        assert!(m.is_forbidden(&Domain::new("-leading.dash")));
    }

    #[test]
    fn test_blocking_entry() {
        let m = matcher(&["example.com", "google.com"]);
        let entry = m.blocking_entry(&Domain::new("a.b.example.com"));
        assert_eq!(entry.map(Domain::name), Some("example.com"));
        assert!(m.blocking_entry(&Domain::new("example.org")).is_none());
    }

    #[test]
    fn test_query_before_first_entry() {
        let m = matcher(&["mail.google.com"]);
        assert!(!m.is_forbidden(&Domain::new("com")));
        assert!(!m.is_forbidden(&Domain::new("google.com")));
        assert!(m.is_forbidden(&Domain::new("x.mail.google.com")));
    }

    #[test]
    fn test_from_blocklist() {
        let m = DomainMatcher::from_blocklist(
            "# ads\nads.example.com\n\n0.0.0.0 tracker.net\nsub.ads.example.com\n",
        )
        .unwrap();
        assert_eq!(names(&m), vec!["ads.example.com", "tracker.net"]);
        assert!(m.is_forbidden(&Domain::new("cdn.tracker.net")));
    }
}
