use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error(
        "the size of your sequences ({sequences}) and header ({headers}) lists is different; \
         are you sure the FASTA is in the correct format?"
    )]
    CountMismatch { headers: usize, sequences: usize },
    #[error("line {line} comes before the first '>' header")]
    SequenceBeforeHeader { line: u64 },
    #[error("no whitespace after the accession in header {header:?}")]
    MissingAccession { header: String },
    #[error("symbol {symbol:?} is not one of A, C, G, T, N")]
    InvalidSymbol { symbol: char },
    #[error("empty sequence for header {header:?}, GC% is undefined")]
    EmptySequence { header: String },
}

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("could not open the file: {} for type {mode}: {source}", .path.display())]
    Open {
        #[source]
        source: io::Error,
        path: PathBuf,
        mode: String,
    },
    #[error("could not open the file: {} for type '{mode}': unrecognized mode", .path.display())]
    InvalidMode { path: PathBuf, mode: String },
    #[error("I/O error at {ctx:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("write error: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
    #[error("format error at {ctx:?}: {source}")]
    Format {
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
    #[error("record {index}: {source}")]
    Record {
        #[source]
        source: FormatError,
        index: usize,
    },
}

impl FastaError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: IoContext) -> Self {
        Self::Format { source, ctx }
    }
    pub(crate) fn write_err(source: io::Error) -> Self {
        Self::Write { source }
    }
    pub(crate) fn record_err(source: FormatError, index: usize) -> Self {
        Self::Record { source, index }
    }

    /// Underlying format error, if this failure was caused by the input's content.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source, .. } | Self::Record { source, .. } => Some(source),
            _ => None,
        }
    }
}
