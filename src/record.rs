use crate::error::FormatError;

/// Header marker that opens every FASTA record.
pub const MARKER: char = '>';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Full header line including the leading `>`.
    pub header: String,
    /// All sequence lines of the record, joined without terminators.
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Sequence length in characters.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn accession(&self) -> Result<&str, FormatError> {
        accession(&self.header)
    }
}

/// Extract the accession: the text between the marker and the first
/// whitespace character.
///
/// `>1ABC_A mol:protein length:120 SOME PROTEIN` gives `1ABC_A`.
pub fn accession(header: &str) -> Result<&str, FormatError> {
    let missing = || FormatError::MissingAccession {
        header: header.to_string(),
    };
    let start = header.find(MARKER).ok_or_else(missing)? + MARKER.len_utf8();
    let rest = &header[start..];
    let end = rest.find(char::is_whitespace).ok_or_else(missing)?;
    Ok(&rest[..end])
}

/// Records in order of appearance. Only constructible from header and
/// sequence lists of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<FastaRecord>,
}

impl RecordSet {
    pub fn from_parts(headers: Vec<String>, sequences: Vec<String>) -> Result<Self, FormatError> {
        if headers.len() != sequences.len() {
            return Err(FormatError::CountMismatch {
                headers: headers.len(),
                sequences: sequences.len(),
            });
        }
        let records = headers
            .into_iter()
            .zip(sequences)
            .map(|(header, sequence)| FastaRecord { header, sequence })
            .collect();
        Ok(Self { records })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FastaRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[FastaRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FastaRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a FastaRecord;
    type IntoIter = std::slice::Iter<'a, FastaRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for RecordSet {
    type Item = FastaRecord;
    type IntoIter = std::vec::IntoIter<FastaRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
