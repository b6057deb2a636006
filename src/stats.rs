//! Per-record nucleotide composition and the tab-separated report.

use crate::error::{FastaError, FormatError};
use crate::policy::{EmptySequencePolicy, ReportOptions};
use crate::record::FastaRecord;

use std::fmt;
use std::io::Write;

pub const REPORT_HEADER: &str = "Number\tAccession\tA's\tG's\tC's\tT's\tN's\tLength\tGC%";

/// The counted symbols, in report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    G,
    C,
    T,
    N,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 5] = [
        Nucleotide::A,
        Nucleotide::G,
        Nucleotide::C,
        Nucleotide::T,
        Nucleotide::N,
    ];

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::G => 'G',
            Nucleotide::C => 'C',
            Nucleotide::T => 'T',
            Nucleotide::N => 'N',
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = FormatError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Nucleotide::A),
            'G' => Ok(Nucleotide::G),
            'C' => Ok(Nucleotide::C),
            'T' => Ok(Nucleotide::T),
            'N' => Ok(Nucleotide::N),
            symbol => Err(FormatError::InvalidSymbol { symbol }),
        }
    }
}

/// Case-sensitive occurrence counts of A, G, C, T and N. Other characters
/// are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NucleotideCounts {
    counts: [usize; 5],
}

impl NucleotideCounts {
    pub fn from_sequence(seq: &str) -> Self {
        let mut counts = [0usize; 5];
        for c in seq.chars() {
            if let Ok(nt) = Nucleotide::try_from(c) {
                counts[nt.slot()] += 1;
            }
        }
        Self { counts }
    }

    #[inline]
    pub fn get(&self, nt: Nucleotide) -> usize {
        self.counts[nt.slot()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    #[inline]
    pub fn gc(&self) -> usize {
        self.get(Nucleotide::G) + self.get(Nucleotide::C)
    }
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceStats {
    /// 1-based position of the record in its input.
    pub number: usize,
    pub accession: String,
    pub counts: NucleotideCounts,
    pub length: usize,
    /// Unrounded; rows show one decimal place of the exact value.
    pub gc_percent: f64,
}

impl SequenceStats {
    pub fn from_record(
        number: usize,
        record: &FastaRecord,
        policy: EmptySequencePolicy,
    ) -> Result<Self, FormatError> {
        let accession = record.accession()?.to_string();
        let counts = NucleotideCounts::from_sequence(&record.sequence);
        let length = record.len();
        let gc_percent = if length == 0 {
            match policy {
                EmptySequencePolicy::Zero => {
                    log::warn!("record {number} ({accession}) has an empty sequence, GC% set to 0.0");
                    0.0
                }
                EmptySequencePolicy::Error => {
                    return Err(FormatError::EmptySequence {
                        header: record.header.clone(),
                    });
                }
            }
        } else {
            counts.gc() as f64 / length as f64 * 100.0
        };
        Ok(Self {
            number,
            accession,
            counts,
            length,
            gc_percent,
        })
    }
}

impl fmt::Display for SequenceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.number, self.accession)?;
        for nt in Nucleotide::ALL {
            write!(f, "\t{}", self.counts.get(nt))?;
        }
        write!(f, "\t{}\t{:.1}", self.length, self.gc_percent)
    }
}

/// Write the report header and one row per record, in record order.
///
/// Rows are streamed; on a failing record the rows before it have already
/// been handed to `out`. Returns the number of rows written.
pub fn write_report<'a, I, W>(
    records: I,
    out: &mut W,
    opts: &ReportOptions,
) -> Result<usize, FastaError>
where
    I: IntoIterator<Item = &'a FastaRecord>,
    W: Write + ?Sized,
{
    writeln!(out, "{REPORT_HEADER}").map_err(FastaError::write_err)?;
    let mut rows = 0usize;
    for (i, record) in records.into_iter().enumerate() {
        let number = i + 1;
        let stats = SequenceStats::from_record(number, record, opts.empty_sequence)
            .map_err(|e| FastaError::record_err(e, number))?;
        writeln!(out, "{stats}").map_err(FastaError::write_err)?;
        rows += 1;
    }
    out.flush().map_err(FastaError::write_err)?;
    log::info!("wrote {rows} report rows");
    Ok(rows)
}
