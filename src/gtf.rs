//! GTF annotation reading: extraction of coding-segment records.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::Error;
use crate::strand::Strand;

/// One CDS interval of a gene, as declared in the annotation.
///
/// Coordinates are 1-based inclusive. Multiple segments may share a gene
/// name; annotation order is preserved because the first segment seen per
/// gene anchors that gene's reading frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingSegment {
    pub gene: String,
    pub strand: Strand,
    pub start: u32,
    pub stop: u32,
}

/// Extract the ordered list of coding segments from a GTF stream.
///
/// Only `CDS` rows produce segments; all other feature types are ignored.
/// A row whose attribute column does not begin with `gene_id` is fatal:
/// the codon map cannot be built from a malformed annotation.
pub fn parse_gtf<R: BufRead>(reader: R) -> Result<Vec<CodingSegment>, Error> {
    let mut segments = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() <= 1 {
            continue;
        }
        if columns.len() < 9 {
            return Err(Error::Parse(format!(
                "GTF line {line_num} has {} columns, expected 9",
                columns.len()
            )));
        }
        if !columns[8].starts_with("gene_id") {
            return Err(Error::Format(format!(
                "GTF attribute column must begin with gene_id (line {line_num})"
            )));
        }

        if columns[2] != "CDS" {
            continue;
        }

        let gene = columns[8]
            .split('"')
            .nth(1)
            .ok_or_else(|| {
                Error::Format(format!("GTF gene_id value is not quoted (line {line_num})"))
            })?
            .to_string();

        let start: u32 = columns[3].parse().map_err(|e| {
            Error::Parse(format!("invalid start '{}' (line {line_num}): {e}", columns[3]))
        })?;
        let stop: u32 = columns[4].parse().map_err(|e| {
            Error::Parse(format!("invalid stop '{}' (line {line_num}): {e}", columns[4]))
        })?;
        if start == 0 || stop < start {
            return Err(Error::Parse(format!(
                "invalid CDS interval {start}..{stop} (line {line_num})"
            )));
        }

        segments.push(CodingSegment {
            gene,
            strand: Strand::from_gtf(columns[6]),
            start,
            stop,
        });
    }

    Ok(segments)
}

/// Extract coding segments from a gzip-compressed GTF stream.
pub fn parse_gtf_gz<R: Read>(reader: R) -> Result<Vec<CodingSegment>, Error> {
    parse_gtf(BufReader::new(GzDecoder::new(reader)))
}

/// Extract coding segments from a file path, decompressing `.gz` inputs.
pub fn parse_gtf_from_path(path: &Path) -> Result<Vec<CodingSegment>, Error> {
    let file = File::open(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("could not open the gtf file {}: {e}", path.display()),
        ))
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        parse_gtf_gz(file)
    } else {
        parse_gtf(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const GTF: &str = "\
#gtf-version 2.2
ref\tsource\tgene\t1\t9\t.\t+\t.\tgene_id \"orf1\"; transcript_id \"orf1.1\";
ref\tsource\tCDS\t1\t9\t.\t+\t.\tgene_id \"orf1\"; transcript_id \"orf1.1\";
ref\tsource\tCDS\t13\t21\t.\t-\t.\tgene_id \"orf2\"; transcript_id \"orf2.1\";
";

    #[test]
    fn keeps_only_cds_rows() {
        let segments = parse_gtf(Cursor::new(GTF)).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0],
            CodingSegment {
                gene: "orf1".to_string(),
                strand: Strand::Forward,
                start: 1,
                stop: 9,
            }
        );
        assert_eq!(segments[1].gene, "orf2");
        assert_eq!(segments[1].strand, Strand::Reverse);
    }

    #[test]
    fn comments_and_blank_lines_skipped() {
        let gtf = "# header\n\nref\tsource\tCDS\t1\t3\t.\t+\t.\tgene_id \"g\";\n";
        let segments = parse_gtf(Cursor::new(gtf)).unwrap();
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn missing_gene_id_tag_is_fatal() {
        let gtf = "ref\tsource\tCDS\t1\t9\t.\t+\t.\tID=orf1\n";
        let err = parse_gtf(Cursor::new(gtf)).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
        assert!(err.to_string().contains("gene_id"));
    }

    #[test]
    fn bad_coordinates_are_fatal() {
        let gtf = "ref\tsource\tCDS\tone\t9\t.\t+\t.\tgene_id \"orf1\";\n";
        assert!(matches!(
            parse_gtf(Cursor::new(gtf)).unwrap_err(),
            Error::Parse(_)
        ));

        let gtf = "ref\tsource\tCDS\t9\t1\t.\t+\t.\tgene_id \"orf1\";\n";
        assert!(matches!(
            parse_gtf(Cursor::new(gtf)).unwrap_err(),
            Error::Parse(_)
        ));
    }

    #[test]
    fn single_column_lines_skipped() {
        let gtf = "browser details\nref\tsource\tCDS\t1\t3\t.\t+\t.\tgene_id \"g\";\n";
        let segments = parse_gtf(Cursor::new(gtf)).unwrap();
        assert_eq!(segments.len(), 1);
    }
}
