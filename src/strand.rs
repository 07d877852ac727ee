//! Strand orientation for coding segments.

use std::fmt;

/// Strand orientation of a coding segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Parse from GTF column 7. "-" is reverse; everything else is forward.
    #[must_use]
    pub fn from_gtf(s: &str) -> Self {
        if s == "-" {
            Self::Reverse
        } else {
            Self::Forward
        }
    }

    #[must_use]
    pub fn is_reverse(self) -> bool {
        self == Self::Reverse
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_gtf() {
        assert_eq!(Strand::from_gtf("+"), Strand::Forward);
        assert_eq!(Strand::from_gtf("-"), Strand::Reverse);
        assert_eq!(Strand::from_gtf("."), Strand::Forward);
    }

    #[test]
    fn display() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
    }

    #[test]
    fn is_reverse() {
        assert!(!Strand::Forward.is_reverse());
        assert!(Strand::Reverse.is_reverse());
    }
}
