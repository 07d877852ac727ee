//! Error types for the Ramus library.

use thiserror::Error;

/// Errors that can occur during Ramus operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A parse error occurred while reading input data.
    #[error("{0}")]
    Parse(String),

    /// A file format error was detected.
    #[error("{0}")]
    Format(String),

    /// A validation constraint was violated.
    #[error("{0}")]
    Validation(String),

    /// A codon was asked to mutate a genomic position it does not cover.
    /// This indicates a bug in codon map construction, not bad input data.
    #[error("mutation position {position} is outside codon {gene}:{codon_start}")]
    CodonOutOfRange {
        gene: String,
        codon_start: u32,
        position: u32,
    },
}
