//! Genomic position → codon mapping, built once per run and mutated in
//! place (codon internals only) during tree traversal.

use std::collections::{HashMap, HashSet};

use crate::codon::Codon;
use crate::error::Error;
use crate::genetic_code;
use crate::gtf::CodingSegment;

/// Stable handle into the codon arena.
///
/// The same codon is registered under every genomic position it covers, so
/// a mutation applied through any of those positions updates one canonical
/// codon state.
pub type CodonId = usize;

/// Maps each 0-based genomic position to the codons overlapping it.
///
/// Codons are owned by an internal arena; position entries hold handles,
/// never copies. A position carries more than one handle when overlapping
/// reading frames place several codons there. The map structure is fixed
/// after [`CodonMap::build`]; only codon internals change afterwards.
#[derive(Debug, Default)]
pub struct CodonMap {
    codons: Vec<Codon>,
    by_position: HashMap<u32, Vec<CodonId>>,
}

impl CodonMap {
    /// Build the codon map from a reference sequence and the annotation's
    /// ordered coding segments.
    ///
    /// The first segment seen per gene anchors that gene's reading frame
    /// and starts its codon numbering at zero. Later segments of the same
    /// gene continue the numbering and are built only when they declare a
    /// genuinely new frame (different start or strand from the anchor);
    /// exact anchor repeats are skipped. Segments of one gene are assumed
    /// to arrive in transcription order, and leftover bases of a
    /// non-multiple-of-3 segment are not carried into the next segment.
    pub fn build(reference: &[u8], segments: &[CodingSegment]) -> Result<Self, Error> {
        let mut map = Self::default();
        let mut anchored: HashSet<&str> = HashSet::new();

        for anchor in segments {
            if !anchored.insert(anchor.gene.as_str()) {
                continue;
            }

            let mut codon_counter: u32 = 0;
            map.add_segment(reference, anchor, &mut codon_counter)?;

            // Remaining CDS features of the same gene continue the codon
            // numbering; an exact anchor repeat is not a new frame.
            for segment in segments.iter().filter(|s| s.gene == anchor.gene) {
                if segment.start != anchor.start || segment.strand != anchor.strand {
                    map.add_segment(reference, segment, &mut codon_counter)?;
                }
            }
        }

        Ok(map)
    }

    fn add_segment(
        &mut self,
        reference: &[u8],
        segment: &CodingSegment,
        codon_counter: &mut u32,
    ) -> Result<(), Error> {
        if segment.stop as usize > reference.len() {
            return Err(Error::Validation(format!(
                "coding segment {}:{}..{} extends past the reference end ({} bases)",
                segment.gene,
                segment.start,
                segment.stop,
                reference.len()
            )));
        }

        if segment.strand.is_reverse() {
            // The codon's 5'→3' sequence corresponds to decreasing genomic
            // coordinates: bases are complements read downward from `pos`.
            // `pos > start` (1-based start) guarantees 3 bases remain.
            let mut pos = segment.stop as usize - 1;
            while pos > segment.start as usize {
                let nucleotides = [
                    genetic_code::complement(reference[pos]),
                    genetic_code::complement(reference[pos - 1]),
                    genetic_code::complement(reference[pos - 2]),
                ];
                let id = self.insert(Codon::new(
                    &segment.gene,
                    *codon_counter,
                    pos as u32,
                    nucleotides,
                ));
                self.register(pos as u32, id);
                self.register(pos as u32 - 1, id);
                self.register(pos as u32 - 2, id);
                *codon_counter += 1;

                match pos.checked_sub(3) {
                    Some(next) => pos = next,
                    None => break,
                }
            }
        } else {
            let mut pos = segment.start as usize - 1;
            while pos < segment.stop as usize {
                // A trailing partial codon borrows bases past the segment
                // end; stop early if the reference itself runs out.
                let Some(window) = reference.get(pos..pos + 3) else {
                    break;
                };
                let nucleotides = [window[0], window[1], window[2]];
                let id = self.insert(Codon::new(
                    &segment.gene,
                    *codon_counter,
                    pos as u32,
                    nucleotides,
                ));
                self.register(pos as u32, id);
                self.register(pos as u32 + 1, id);
                self.register(pos as u32 + 2, id);
                *codon_counter += 1;
                pos += 3;
            }
        }

        Ok(())
    }

    fn insert(&mut self, codon: Codon) -> CodonId {
        let id = self.codons.len();
        self.codons.push(codon);
        id
    }

    fn register(&mut self, position: u32, id: CodonId) {
        self.by_position.entry(position).or_default().push(id);
    }

    /// Handles of every codon covering a 0-based genomic position.
    /// Empty for non-coding positions.
    #[must_use]
    pub fn ids_at(&self, position: u32) -> &[CodonId] {
        self.by_position
            .get(&position)
            .map_or(&[], |ids| ids.as_slice())
    }

    #[must_use]
    pub fn codon(&self, id: CodonId) -> &Codon {
        &self.codons[id]
    }

    pub fn codon_mut(&mut self, id: CodonId) -> &mut Codon {
        &mut self.codons[id]
    }

    /// Number of codons in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }
}
