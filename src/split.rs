use crate::error::FastaError;
use crate::record::FastaRecord;

use std::fmt;
use std::io::Write;

/// Which output a record is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Protein,
    SecondaryStructure,
}

/// `Protein` if `keyword` occurs anywhere in the header (case-sensitive).
#[inline]
pub fn classify(header: &str, keyword: &str) -> Partition {
    if header.contains(keyword) {
        Partition::Protein
    } else {
        Partition::SecondaryStructure
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitSummary {
    pub protein: usize,
    pub secondary_structure: usize,
}

impl SplitSummary {
    pub fn total(&self) -> usize {
        self.protein + self.secondary_structure
    }
}

impl fmt::Display for SplitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found {} protein sequences\nFound {} ss sequences",
            self.protein, self.secondary_structure
        )
    }
}

/// Write each record as `header\nsequence\n` to `protein` or `ss`,
/// keeping input order within each output.
pub fn split_records<'a, I, P, S>(
    records: I,
    keyword: &str,
    protein: &mut P,
    ss: &mut S,
) -> Result<SplitSummary, FastaError>
where
    I: IntoIterator<Item = &'a FastaRecord>,
    P: Write + ?Sized,
    S: Write + ?Sized,
{
    let mut summary = SplitSummary::default();
    for record in records {
        let entry = format!("{}\n{}\n", record.header, record.sequence);
        match classify(&record.header, keyword) {
            Partition::Protein => {
                protein
                    .write_all(entry.as_bytes())
                    .map_err(FastaError::write_err)?;
                summary.protein += 1;
            }
            Partition::SecondaryStructure => {
                ss.write_all(entry.as_bytes())
                    .map_err(FastaError::write_err)?;
                summary.secondary_structure += 1;
            }
        }
    }
    protein.flush().map_err(FastaError::write_err)?;
    ss.flush().map_err(FastaError::write_err)?;
    log::info!(
        "split {} records: {} protein, {} ss",
        summary.total(),
        summary.protein,
        summary.secondary_structure
    );
    Ok(summary)
}
