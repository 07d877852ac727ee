//! Ramus: amino-acid consequence annotation over mutation-annotated trees.
//!
//! Walks an externally supplied phylogenetic tree in depth-first order and
//! computes, for every node, the amino-acid changes implied by the
//! nucleotide mutations accumulated along the root→node path. Codon state
//! is mutated incrementally as the traversal moves between branches, with
//! lowest-common-ancestor rollback instead of per-node recomputation.

pub mod error;

pub mod annotate;
pub mod codon;
pub mod codon_map;
pub mod fasta;
pub mod genetic_code;
pub mod gtf;
pub mod mutation;
pub mod strand;
pub mod translate;
pub mod tree;
