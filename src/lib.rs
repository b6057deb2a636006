//! FASTA tooling for PDB `seqres`-style dumps that interleave protein
//! sequences and secondary-structure strings.
//!
//! - One shared parser (`FastaReader`) producing an ordered `RecordSet`.
//! - Plain and `.gz` input (auto-detect).
//! - Per-record nucleotide statistics report (tab-separated).
//! - Keyword-based split of records into protein / secondary-structure outputs.
//! - Errors are returned, never turned into process exits inside the library.

pub mod error;
pub mod mode;
pub mod policy;
pub mod reader;
pub mod record;
pub mod split;
pub mod stats;
mod util;

pub use crate::error::{FastaError, FormatError, IoContext};
pub use crate::mode::OpenMode;
pub use crate::policy::{EmptySequencePolicy, ReportOptions, SplitOptions};
pub use crate::reader::{FastaReader, Source, parse_lines};
pub use crate::record::{FastaRecord, RecordSet, accession};
pub use crate::split::{Partition, SplitSummary, classify, split_records};
pub use crate::stats::{Nucleotide, NucleotideCounts, REPORT_HEADER, SequenceStats, write_report};
pub use crate::util::{FileHandle, open_handle, open_input, open_output};
