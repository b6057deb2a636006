/// What the statistics report does with a record whose sequence is empty,
/// where GC% would divide by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptySequencePolicy {
    /// Report GC% as 0.0 and log a warning.
    #[default]
    Zero,
    /// Abort the report with `FormatError::EmptySequence`.
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub empty_sequence: EmptySequencePolicy,
}

/// Output naming and classification keyword for the splitter.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub keyword: String,
    pub protein_file: String,
    pub ss_file: String,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            keyword: "sequence".to_string(),
            protein_file: "pdb_protein.fasta".to_string(),
            ss_file: "pdb_ss.fasta".to_string(),
        }
    }
}
