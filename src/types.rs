use std::fmt;

/// Verdict rendered for one query domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Not covered by the forbidden set
    Good,
    /// Equal to, or a sub-domain of, a forbidden domain
    Bad,
}

impl Verdict {
    /// Check if this verdict blocks the domain
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Verdict::Bad)
    }

    /// Output token
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Good => "Good",
            Verdict::Bad => "Bad",
        }
    }
}

impl From<bool> for Verdict {
    fn from(forbidden: bool) -> Self {
        if forbidden {
            Verdict::Bad
        } else {
            Verdict::Good
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Forbidden domains read from the input
    pub forbidden: usize,
    /// Forbidden domains kept after minimization
    pub minimized: usize,
    /// Query domains checked
    pub queries: usize,
    /// Queries answered with `Bad`
    pub blocked: usize,
}
