use crate::error::{FastaError, FormatError, IoContext};
use crate::record::{MARKER, RecordSet};
use crate::util::open_input;

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Source {
    Path(PathBuf),
    Reader,
}

/// FASTA reader. Materializes the whole input into a `RecordSet`.
pub struct FastaReader {
    src: Source,
    rdr: Box<dyn BufRead + Send>,
    line_num: u64,
    byte_pos: u64,
}

/// Header and sequence lists as they are being assembled.
#[derive(Debug, Default)]
struct Accumulator {
    headers: Vec<String>,
    sequences: Vec<String>,
    current: String,
    lines_seen: u64,
}

impl Accumulator {
    fn push_line(&mut self, line: &str) -> Result<(), FormatError> {
        self.lines_seen += 1;
        if line.starts_with(MARKER) {
            // close the previous record, even when it has no sequence lines
            if !self.headers.is_empty() {
                self.sequences.push(std::mem::take(&mut self.current));
            }
            self.headers.push(line.to_string());
        } else if self.headers.is_empty() {
            return Err(FormatError::SequenceBeforeHeader {
                line: self.lines_seen,
            });
        } else {
            self.current.push_str(line);
        }
        Ok(())
    }

    fn finish(mut self) -> (Vec<String>, Vec<String>) {
        if !self.current.is_empty() {
            self.sequences.push(self.current);
        }
        (self.headers, self.sequences)
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parse already-split lines. Terminators, if present, are stripped.
pub fn parse_lines<I, S>(lines: I) -> Result<RecordSet, FastaError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut acc = Accumulator::default();
    let mut byte_pos = 0u64;
    for line in lines {
        let line = line.as_ref();
        byte_pos += line.len() as u64;
        let ctx = IoContext {
            byte_pos,
            line_num: acc.lines_seen + 1,
        };
        acc.push_line(strip_terminator(line))
            .map_err(|e| FastaError::fmt_err(e, ctx))?;
    }
    let ctx = IoContext {
        byte_pos,
        line_num: acc.lines_seen,
    };
    let (headers, sequences) = acc.finish();
    RecordSet::from_parts(headers, sequences).map_err(|e| FastaError::fmt_err(e, ctx))
}

impl FastaReader {
    /// Open from a file path. Auto-detect `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FastaError> {
        let path = path.as_ref();
        let rdr = open_input(path)?;
        Ok(Self {
            src: Source::Path(path.to_path_buf()),
            rdr,
            line_num: 0,
            byte_pos: 0,
        })
    }

    /// Wrap an arbitrary `BufRead` (stdin, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            src: Source::Reader,
            rdr: Box::new(reader),
            line_num: 0,
            byte_pos: 0,
        }
    }

    pub fn source(&self) -> &Source {
        &self.src
    }

    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        let n = self.rdr.read_line(buf)?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            if buf.ends_with('\n') {
                buf.pop();
            }
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(n)
    }

    /// Read the input to the end and pair headers with sequences.
    ///
    /// Fails with `FormatError::CountMismatch` when the number of headers
    /// and sequences differ, e.g. a trailing header with no sequence lines.
    pub fn read_all(mut self) -> Result<RecordSet, FastaError> {
        let mut acc = Accumulator::default();
        let mut line = String::with_capacity(256);
        loop {
            let n = self
                .read_line(&mut line)
                .map_err(|e| FastaError::io_err(e, self.ctx()))?;
            if n == 0 {
                break;
            }
            acc.push_line(&line)
                .map_err(|e| FastaError::fmt_err(e, self.ctx()))?;
        }

        let (headers, sequences) = acc.finish();
        log::debug!(
            "{:?}: {} lines, {} headers, {} sequences",
            self.src,
            self.line_num,
            headers.len(),
            sequences.len()
        );
        RecordSet::from_parts(headers, sequences).map_err(|e| FastaError::fmt_err(e, self.ctx()))
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}
