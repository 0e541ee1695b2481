//! Canonical domain names.
//!
//! A [`Domain`] keeps the raw name it was built from together with a
//! canonical key: the root delimiter followed by every label in root-first
//! order, each terminated by the delimiter.
//!
//! | Raw name | Canonical key |
//! |----------|---------------|
//! | `` (empty) | `.` |
//! | `com` | `.com.` |
//! | `mail.google.com` | `.com.google.mail.` |
//!
//! With this encoding byte-wise order of keys is hierarchical order, and
//! "key A is a prefix of key B" holds exactly when A is B or one of its
//! ancestors. The trailing delimiter keeps `.com.` from being a prefix of
//! `.comcast.`.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label delimiter, also used as the root marker of a canonical key.
pub const DELIMITER: char = '.';

/// A domain name with a hierarchy-ordered canonical key.
///
/// Equality, ordering and hashing only look at the canonical key.
#[derive(Debug, Clone)]
pub struct Domain {
    name: String,
    key: String,
}

impl Domain {
    /// Create a domain from a raw name.
    ///
    /// No validation is done: labels are opaque and case is preserved.
    /// The empty name is the root and is an ancestor of every domain.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = canonical_key(&name);
        Self { name, key }
    }

    /// The raw name this domain was built from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Labels in root-first order (`mail.google.com` yields `com`, `google`, `mail`).
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.key[DELIMITER.len_utf8()..].split_terminator(DELIMITER)
    }

    /// Number of labels; 0 for the root.
    pub fn depth(&self) -> usize {
        self.labels().count()
    }

    /// Whether this is the empty (root) domain
    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Check if `other` is this domain or one of its sub-domains.
    pub fn is_ancestor_of(&self, other: &Domain) -> bool {
        other.key.starts_with(&self.key)
    }

    /// Check if this domain is `other` or one of its sub-domains.
    pub fn is_subdomain_of(&self, other: &Domain) -> bool {
        other.is_ancestor_of(self)
    }
}

fn canonical_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 2);
    key.push(DELIMITER);
    if !name.is_empty() {
        for label in name.rsplit(DELIMITER) {
            key.push_str(label);
            key.push(DELIMITER);
        }
    }
    key
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Domain {}

impl Hash for Domain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Domain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Domain {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.as_bytes().cmp(other.key.as_bytes())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Domain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for Domain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
