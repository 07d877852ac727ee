//! Nucleotide mutations attached to tree nodes.

use std::fmt;

/// A single nucleotide mutation at a 1-based genomic coordinate.
///
/// `par_nuc` is the base in the node's parent, `mut_nuc` the base in the
/// node itself. Ordering is by position first, for deterministic processing
/// within one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NucMutation {
    pub position: u32,
    pub par_nuc: u8,
    pub mut_nuc: u8,
}

impl NucMutation {
    #[must_use]
    pub fn new(position: u32, par_nuc: u8, mut_nuc: u8) -> Self {
        Self {
            position,
            par_nuc,
            mut_nuc,
        }
    }
}

impl fmt::Display for NucMutation {
    /// Conventional `<parent><position><mutant>` notation, e.g. `G4A`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.par_nuc as char, self.position, self.mut_nuc as char
        )
    }
}
