//! Corpus loading from tab-separated sentence/label files.
//!
//! The expected on-disk form is one record per line, `sentence<TAB>label`,
//! with the label being `0` (negative) or `1` (positive). This is the export
//! format of the common public sentence-classification benchmarks. A header
//! line of `sentence<TAB>label` is tolerated and skipped.
//!
//! Dataset acquisition is out of scope: the file must already exist locally,
//! and an unreadable or malformed file is a fatal error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::corpus::{Corpus, LabeledDocument, Sentiment};
use crate::error::{PolarityError, Result};

/// Load a corpus from a `sentence<TAB>label` TSV file.
///
/// Blank lines are skipped. Any line without exactly one tab separator, or
/// with a label other than `0` or `1`, aborts the load with a
/// [`PolarityError::Corpus`] naming the offending line number.
pub fn load_tsv<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut corpus = Corpus::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        // Tolerate the conventional header row.
        if line_no == 0 && line == "sentence\tlabel" {
            continue;
        }

        let (text, label) = parse_record(&line).map_err(|e| {
            PolarityError::corpus(format!("line {}: {e}", line_no + 1))
        })?;
        corpus.push(LabeledDocument::new(text, label));
    }

    if corpus.is_empty() {
        return Err(PolarityError::corpus("corpus file contains no records"));
    }

    Ok(corpus)
}

fn parse_record(line: &str) -> std::result::Result<(&str, Sentiment), String> {
    let mut parts = line.splitn(2, '\t');
    let text = parts.next().unwrap_or("");
    let label_field = parts
        .next()
        .ok_or_else(|| "expected `sentence<TAB>label`".to_string())?;

    if text.is_empty() {
        return Err("empty sentence".to_string());
    }

    let label: u8 = label_field
        .trim()
        .parse()
        .map_err(|_| format!("label `{label_field}` is not an integer"))?;
    let sentiment =
        Sentiment::from_label(label).map_err(|_| format!("label must be 0 or 1, got {label}"))?;

    Ok((text, sentiment))
}
