//! Depth-first traversal driver: applies each node's mutations to the
//! shared codon map, rolling state back to the lowest common ancestor when
//! the traversal jumps between branches.

use std::path::Path;

use crate::annotate::{apply_mutations, revert_mutations, SummaryFormat};
use crate::codon_map::CodonMap;
use crate::error::Error;
use crate::fasta;
use crate::gtf;
use crate::tree::{NodeId, Tree};

/// Walk the tree in depth-first order and collect per-node amino-acid
/// change summaries as `(identifier, summary)` pairs.
///
/// At each step: if the previous node is not the new node's parent, the
/// traversal has jumped across branches, and the previous node is walked up
/// to the LCA of the two nodes, reverting each ancestor's own mutations on
/// the way. After the walk, every codon reflects the reference sequence
/// plus exactly the mutations on the root→node path. Nodes with an empty
/// summary are not recorded. On return the codon map is left in the state
/// of the last visited node.
pub fn translate_tree<T: Tree + ?Sized>(
    tree: &T,
    map: &mut CodonMap,
    format: SummaryFormat,
) -> Result<Vec<(String, String)>, Error> {
    let mut results = Vec::new();
    let mut last_visited: Option<NodeId> = None;

    for id in tree.depth_first_expansion() {
        let node = tree.node(id);

        if last_visited != node.parent {
            if let Some(last) = last_visited {
                let lca = tree.lca(id, last);
                let mut trace = last;
                while trace != lca {
                    revert_mutations(&tree.node(trace).mutations, map)?;
                    trace = tree.node(trace).parent.ok_or_else(|| {
                        Error::Validation(format!(
                            "node {} is not an ancestor of {}",
                            tree.node(lca).identifier,
                            tree.node(last).identifier
                        ))
                    })?;
                }
            }
        }

        let summary = apply_mutations(&node.mutations, map, format)?;
        if !summary.is_empty() {
            results.push((node.identifier.clone(), summary));
        }
        last_visited = Some(id);
    }

    Ok(results)
}

/// End-to-end convenience: read the reference and annotation (gzip-aware by
/// extension), build the codon map, and translate the whole tree.
pub fn translate_from_paths<T: Tree + ?Sized>(
    tree: &T,
    gtf_path: &Path,
    fasta_path: &Path,
    format: SummaryFormat,
) -> Result<Vec<(String, String)>, Error> {
    let reference = fasta::build_reference_from_path(fasta_path)?;
    let segments = gtf::parse_gtf_from_path(gtf_path)?;
    let mut map = CodonMap::build(&reference, &segments)?;
    translate_tree(tree, &mut map, format)
}
