//! Genetic code lookup tables: codon translation and base complementation.
//!
//! Both tables are total functions. Triplets outside the table (ambiguity
//! codes that do not resolve to a single amino acid, gaps, garbage) translate
//! to [`UNKNOWN_AA`]; bases outside the complement table map to `N`. The
//! tables are built once on first use and are immutable afterwards, so they
//! are safe to share across concurrent codon maps.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Sentinel amino acid for triplets that cannot be resolved.
pub const UNKNOWN_AA: u8 = b'X';

/// Standard genetic code plus the IUPAC ambiguity triplets that still
/// resolve to exactly one amino acid (synonymous-only ambiguity).
static TRANSLATION_TABLE: LazyLock<HashMap<[u8; 3], u8>> = LazyLock::new(|| {
    #[rustfmt::skip]
    const ENTRIES: &[(&[u8; 3], u8)] = &[
        (b"GCT", b'A'), (b"GCC", b'A'), (b"GCA", b'A'), (b"GCG", b'A'), (b"GCN", b'A'),
        (b"TGT", b'C'), (b"TGC", b'C'), (b"TGY", b'C'),
        (b"GAT", b'D'), (b"GAC", b'D'), (b"GAY", b'D'),
        (b"GAA", b'E'), (b"GAG", b'E'), (b"GAR", b'E'),
        (b"TTT", b'F'), (b"TTC", b'F'), (b"TTY", b'F'),
        (b"GGT", b'G'), (b"GGC", b'G'), (b"GGA", b'G'), (b"GGG", b'G'), (b"GGN", b'G'),
        (b"CAT", b'H'), (b"CAC", b'H'), (b"CAY", b'H'),
        (b"ATT", b'I'), (b"ATC", b'I'), (b"ATA", b'I'), (b"ATH", b'I'),
        (b"AAA", b'K'), (b"AAG", b'K'), (b"AAR", b'K'),
        (b"TTA", b'L'), (b"TTG", b'L'), (b"CTT", b'L'), (b"CTC", b'L'), (b"CTA", b'L'),
        (b"CTG", b'L'), (b"YTR", b'L'), (b"CTN", b'L'),
        (b"ATG", b'M'),
        (b"AAT", b'N'), (b"AAC", b'N'), (b"AAY", b'N'),
        (b"CCT", b'P'), (b"CCC", b'P'), (b"CCA", b'P'), (b"CCG", b'P'), (b"CCN", b'P'),
        (b"CAA", b'Q'), (b"CAG", b'Q'), (b"CAR", b'Q'),
        (b"CGT", b'R'), (b"CGC", b'R'), (b"CGA", b'R'), (b"CGG", b'R'), (b"AGA", b'R'),
        (b"AGG", b'R'), (b"CGN", b'R'), (b"MGR", b'R'),
        (b"TCT", b'S'), (b"TCC", b'S'), (b"TCA", b'S'), (b"TCG", b'S'), (b"AGT", b'S'),
        (b"AGC", b'S'), (b"TCN", b'S'), (b"AGY", b'S'),
        (b"ACT", b'T'), (b"ACC", b'T'), (b"ACA", b'T'), (b"ACG", b'T'), (b"ACN", b'T'),
        (b"GTT", b'V'), (b"GTC", b'V'), (b"GTA", b'V'), (b"GTG", b'V'), (b"GTN", b'V'),
        (b"TGG", b'W'),
        (b"TAT", b'Y'), (b"TAC", b'Y'), (b"TAY", b'Y'),
        (b"TAG", b'*'), (b"TAA", b'*'), (b"TGA", b'*'),
    ];
    ENTRIES.iter().map(|&(nt, aa)| (*nt, aa)).collect()
});

/// Translate a nucleotide triplet to a single-letter amino acid.
///
/// Ambiguity codes are allowed; triplets that do not resolve to exactly one
/// amino acid yield [`UNKNOWN_AA`].
#[must_use]
pub fn translate(triplet: &[u8; 3]) -> u8 {
    TRANSLATION_TABLE
        .get(triplet)
        .copied()
        .unwrap_or(UNKNOWN_AA)
}

/// IUPAC-aware complement of a single nucleotide.
///
/// Unrecognized input maps to `N`.
#[must_use]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        b'M' => b'K',
        b'R' => b'Y',
        b'W' => b'W',
        b'S' => b'S',
        b'Y' => b'R',
        b'K' => b'M',
        b'V' => b'B',
        b'H' => b'D',
        b'D' => b'H',
        b'B' => b'V',
        b'N' => b'N',
        _ => b'N',
    }
}
