//! Flat reference sequence construction from FASTA input.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::Error;

/// Build a flat reference sequence from FASTA-style input.
///
/// All non-header lines are concatenated in order, uppercased, with line
/// terminators stripped. Multiple records are concatenated as one sequence;
/// callers working with multi-record references should split upstream.
pub fn build_reference<R: BufRead>(reader: R) -> Result<Vec<u8>, Error> {
    let mut reference = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            continue;
        }
        let trimmed = line.trim_end();
        let start = reference.len();
        reference.extend_from_slice(trimmed.as_bytes());
        reference[start..].make_ascii_uppercase();
    }
    Ok(reference)
}

/// Build a flat reference from a gzip-compressed FASTA stream.
pub fn build_reference_gz<R: Read>(reader: R) -> Result<Vec<u8>, Error> {
    build_reference(BufReader::new(GzDecoder::new(reader)))
}

/// Build a flat reference from a file path, decompressing `.gz` inputs.
pub fn build_reference_from_path(path: &Path) -> Result<Vec<u8>, Error> {
    let file = File::open(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("could not open the fasta file {}: {e}", path.display()),
        ))
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        build_reference_gz(file)
    } else {
        build_reference(BufReader::new(file))
    }
}
