//! A single mutable coding triplet at a fixed genomic location.

use crate::error::Error;
use crate::genetic_code;

/// One codon of a coding region.
///
/// The triplet buffer is stored in transcription order: for a reverse-strand
/// codon, `start` is the highest genomic coordinate the codon covers and the
/// bases are complements of the reference read in decreasing coordinate
/// order. The cached amino acid is re-derived after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codon {
    gene: String,
    index: u32,
    start: u32,
    nucleotides: [u8; 3],
    amino_acid: u8,
}

impl Codon {
    /// Create a codon from its gene, 0-based codon index within the gene,
    /// 0-based genomic start position, and triplet in transcription order.
    #[must_use]
    pub fn new(gene: &str, index: u32, start: u32, nucleotides: [u8; 3]) -> Self {
        let amino_acid = genetic_code::translate(&nucleotides);
        Self {
            gene: gene.to_string(),
            index,
            start,
            nucleotides,
            amino_acid,
        }
    }

    #[must_use]
    pub fn gene(&self) -> &str {
        &self.gene
    }

    /// 0-based codon number within the gene.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// 0-based genomic position of the first nucleotide in transcription order.
    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[must_use]
    pub fn nucleotides(&self) -> &[u8; 3] {
        &self.nucleotides
    }

    #[must_use]
    pub fn amino_acid(&self) -> u8 {
        self.amino_acid
    }

    /// Replace the nucleotide at the given 0-based genomic position and
    /// re-derive the amino acid.
    ///
    /// The buffer slot is the absolute difference between the mutated
    /// position and the codon start, which also holds for reverse-strand
    /// codons whose start is their highest genomic coordinate. A position
    /// the codon does not cover is an error: it can only come from a codon
    /// map that registered this codon under the wrong position.
    pub fn mutate(&mut self, position: u32, base: u8) -> Result<(), Error> {
        let offset = position.abs_diff(self.start) as usize;
        if offset > 2 {
            return Err(Error::CodonOutOfRange {
                gene: self.gene.clone(),
                codon_start: self.start,
                position,
            });
        }
        self.nucleotides[offset] = base;
        self.amino_acid = genetic_code::translate(&self.nucleotides);
        Ok(())
    }

    /// Render as `"<genomic_start>:<nt0><nt1><nt2>=<amino_acid>"`.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{}:{}{}{}={}",
            self.start,
            self.nucleotides[0] as char,
            self.nucleotides[1] as char,
            self.nucleotides[2] as char,
            self.amino_acid as char
        )
    }
}
