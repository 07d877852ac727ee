//! Forward and backward application of a node's nucleotide mutations to
//! the codon map, and rendering of amino-acid change summaries.

use std::fmt::Write;

use crate::codon_map::{CodonId, CodonMap};
use crate::error::Error;
use crate::mutation::NucMutation;

/// Output encoding for a node's change summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Tab-separated protein, nucleotide and codon-change fields, with
    /// synonymous codon events included.
    Full,
    /// Protein field only, with synonymous codon events omitted.
    Terse,
}

/// Per-codon bookkeeping for one node's mutations, in first-touch order.
struct TouchedCodon {
    id: CodonId,
    orig_amino_acid: u8,
    orig_nucleotides: [u8; 3],
    mutations: Vec<NucMutation>,
}

/// Apply a node's mutations to the codon map and render its change summary.
///
/// Mutations are processed sorted by position. For each affected codon the
/// parent-state amino acid and triplet are recorded on first touch, then
/// the codon is driven to its mutant state. Mutations outside any coding
/// region are skipped. On return every affected codon holds the node's
/// mutant state; the summary is empty when no coding mutation occurred (or,
/// in terse mode, when every touched codon was synonymous).
pub fn apply_mutations(
    mutations: &[NucMutation],
    map: &mut CodonMap,
    format: SummaryFormat,
) -> Result<String, Error> {
    let mut sorted = mutations.to_vec();
    sorted.sort_unstable();

    let mut touched: Vec<TouchedCodon> = Vec::new();

    for m in &sorted {
        if m.position == 0 {
            continue;
        }
        let pos = m.position - 1;
        let ids = map.ids_at(pos).to_vec();

        for id in ids {
            // First bring the codon to the parent state, so the recorded
            // original reflects the node's parent rather than the reference.
            map.codon_mut(id).mutate(pos, m.par_nuc)?;

            let codon = map.codon(id);
            match touched.iter_mut().find(|t| t.id == id) {
                Some(t) => {
                    if !t.mutations.contains(m) {
                        t.mutations.push(*m);
                    }
                }
                None => touched.push(TouchedCodon {
                    id,
                    orig_amino_acid: codon.amino_acid(),
                    orig_nucleotides: *codon.nucleotides(),
                    mutations: vec![*m],
                }),
            }

            map.codon_mut(id).mutate(pos, m.mut_nuc)?;
        }
    }

    Ok(render_summary(&touched, map, format))
}

/// Mutate every codon affected by these mutations back to the parent base.
///
/// The exact inverse of one node's [`apply_mutations`] nucleotide effects;
/// used to walk codon state back toward an ancestor.
pub fn revert_mutations(mutations: &[NucMutation], map: &mut CodonMap) -> Result<(), Error> {
    for m in mutations {
        if m.position == 0 {
            continue;
        }
        let pos = m.position - 1;
        let ids = map.ids_at(pos).to_vec();
        for id in ids {
            map.codon_mut(id).mutate(pos, m.par_nuc)?;
        }
    }
    Ok(())
}

fn triplet(nucleotides: &[u8; 3]) -> String {
    nucleotides.iter().map(|&b| b as char).collect()
}

fn render_summary(touched: &[TouchedCodon], map: &CodonMap, format: SummaryFormat) -> String {
    let mut prot = String::new();
    let mut nuc = String::new();
    let mut cchange = String::new();

    for t in touched {
        let codon = map.codon(t.id);
        let number = codon.index() + 1;
        let orig = t.orig_amino_acid as char;
        let new = codon.amino_acid() as char;

        match format {
            SummaryFormat::Terse => {
                if t.orig_amino_acid == codon.amino_acid() {
                    continue;
                }
                let _ = write!(prot, "{}:{}_{}_{};", codon.gene(), orig, number, new);
            }
            SummaryFormat::Full => {
                let _ = write!(prot, "{}:{}{}{};", codon.gene(), orig, number, new);

                // One entry per contributing mutation, all showing the
                // codon's end state.
                let end_state = triplet(codon.nucleotides());
                for (i, m) in t.mutations.iter().enumerate() {
                    let sep = if i == 0 { "" } else { "," };
                    let _ = write!(nuc, "{sep}{}:{}={}", m.position, end_state, new);
                }
                nuc.push(';');

                let _ = write!(cchange, "{}>{};", triplet(&t.orig_nucleotides), end_state);
            }
        }
    }

    prot.truncate(prot.trim_end_matches(';').len());
    if prot.is_empty() {
        return String::new();
    }

    match format {
        SummaryFormat::Terse => prot,
        SummaryFormat::Full => {
            nuc.truncate(nuc.trim_end_matches(';').len());
            cchange.truncate(cchange.trim_end_matches(';').len());
            format!("{prot}\t{nuc}\t{cchange}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon_map::CodonMap;
    use crate::gtf::CodingSegment;
    use crate::strand::Strand;

    fn orf1_map() -> CodonMap {
        let segments = [CodingSegment {
            gene: "orf1".to_string(),
            strand: Strand::Forward,
            start: 1,
            stop: 9,
        }];
        CodonMap::build(b"ATGGGCTAA", &segments).unwrap()
    }

    #[test]
    fn missense_full_summary() {
        let mut map = orf1_map();
        let muts = [NucMutation::new(4, b'G', b'A')];
        let summary = apply_mutations(&muts, &mut map, SummaryFormat::Full).unwrap();
        assert_eq!(summary, "orf1:G2S\t4:AGC=S\tGGC>AGC");
        // The map is left in the mutant state
        assert_eq!(map.codon(1).nucleotides(), b"AGC");
        assert_eq!(map.codon(1).amino_acid(), b'S');
    }

    #[test]
    fn missense_terse_summary() {
        let mut map = orf1_map();
        let muts = [NucMutation::new(4, b'G', b'A')];
        let summary = apply_mutations(&muts, &mut map, SummaryFormat::Terse).unwrap();
        assert_eq!(summary, "orf1:G_2_S");
    }

    #[test]
    fn synonymous_included_in_full_mode() {
        let mut map = orf1_map();
        // GGC → GGG is still glycine
        let muts = [NucMutation::new(6, b'C', b'G')];
        let summary = apply_mutations(&muts, &mut map, SummaryFormat::Full).unwrap();
        assert_eq!(summary, "orf1:G2G\t6:GGG=G\tGGC>GGG");
    }

    #[test]
    fn synonymous_omitted_in_terse_mode() {
        let mut map = orf1_map();
        let muts = [NucMutation::new(6, b'C', b'G')];
        let summary = apply_mutations(&muts, &mut map, SummaryFormat::Terse).unwrap();
        assert!(summary.is_empty());
        // Codon state is still advanced to the mutant state
        assert_eq!(map.codon(1).nucleotides(), b"GGG");
    }

    #[test]
    fn non_coding_mutation_skipped() {
        let mut map = orf1_map();
        let muts = [NucMutation::new(100, b'A', b'T')];
        let summary = apply_mutations(&muts, &mut map, SummaryFormat::Full).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn empty_mutation_list() {
        let mut map = orf1_map();
        let summary = apply_mutations(&[], &mut map, SummaryFormat::Full).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn two_mutations_in_one_codon_collapse_to_one_event() {
        let mut map = orf1_map();
        let muts = [
            NucMutation::new(4, b'G', b'A'),
            NucMutation::new(5, b'G', b'C'),
        ];
        let summary = apply_mutations(&muts, &mut map, SummaryFormat::Full).unwrap();
        // GGC → ACC = T: one protein event, two nucleotide entries
        assert_eq!(summary, "orf1:G2T\t4:ACC=T,5:ACC=T\tGGC>ACC");
    }

    #[test]
    fn mutations_sorted_before_processing() {
        let mut map_a = orf1_map();
        let mut map_b = orf1_map();
        let forward = [
            NucMutation::new(4, b'G', b'A'),
            NucMutation::new(5, b'G', b'C'),
        ];
        let reversed = [
            NucMutation::new(5, b'G', b'C'),
            NucMutation::new(4, b'G', b'A'),
        ];
        let a = apply_mutations(&forward, &mut map_a, SummaryFormat::Full).unwrap();
        let b = apply_mutations(&reversed, &mut map_b, SummaryFormat::Full).unwrap();
        assert_eq!(a, b);
        assert_eq!(map_a.codon(1), map_b.codon(1));
    }

    #[test]
    fn mutation_in_overlapping_frames_touches_every_codon() {
        let segments = [
            CodingSegment {
                gene: "orf1".to_string(),
                strand: Strand::Forward,
                start: 1,
                stop: 9,
            },
            CodingSegment {
                gene: "orf2".to_string(),
                strand: Strand::Forward,
                start: 2,
                stop: 7,
            },
        ];
        let mut map = CodonMap::build(b"ATGGGCTAA", &segments).unwrap();
        // 0-based position 3 sits in orf1 codon 2 (GGC) and orf2 codon 1 (TGG)
        let muts = [NucMutation::new(4, b'G', b'A')];
        let summary = apply_mutations(&muts, &mut map, SummaryFormat::Full).unwrap();
        assert_eq!(
            summary,
            "orf1:G2S;orf2:W1*\t4:AGC=S;4:TGA=*\tGGC>AGC;TGG>TGA"
        );
    }

    #[test]
    fn apply_then_revert_restores_codon_state() {
        let mut map = orf1_map();
        let before: Vec<_> = (0..map.len()).map(|id| map.codon(id).clone()).collect();

        let muts = [
            NucMutation::new(1, b'A', b'G'),
            NucMutation::new(4, b'G', b'A'),
            NucMutation::new(5, b'G', b'C'),
        ];
        apply_mutations(&muts, &mut map, SummaryFormat::Full).unwrap();
        revert_mutations(&muts, &mut map).unwrap();

        for (id, orig) in before.iter().enumerate() {
            assert_eq!(map.codon(id), orig);
        }
    }

    #[test]
    fn revert_ignores_non_coding_mutations() {
        let mut map = orf1_map();
        let muts = [NucMutation::new(500, b'A', b'T')];
        revert_mutations(&muts, &mut map).unwrap();
    }

    #[test]
    fn parent_state_recorded_not_reference_state() {
        // Simulate descent: an ancestor already mutated position 4 G→A,
        // and this node mutates it again A→T. The original amino acid for
        // this node's summary is the ancestor's S, not the reference G.
        let mut map = orf1_map();
        apply_mutations(
            &[NucMutation::new(4, b'G', b'A')],
            &mut map,
            SummaryFormat::Full,
        )
        .unwrap();

        let summary = apply_mutations(
            &[NucMutation::new(4, b'A', b'T')],
            &mut map,
            SummaryFormat::Full,
        )
        .unwrap();
        assert_eq!(summary, "orf1:S2C\t4:TGC=C\tAGC>TGC");
    }
}
