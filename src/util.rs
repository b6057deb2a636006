use crate::error::FastaError;
use crate::mode::OpenMode;

#[cfg(feature = "gzip")]
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Seek, SeekFrom};
use std::path::Path;

pub(crate) fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

/// An acquired file handle. Dropping it closes the file.
pub enum FileHandle {
    Read(Box<dyn BufRead + Send>),
    Write(BufWriter<File>),
}

impl std::fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileHandle::Read(_) => f.write_str("FileHandle::Read"),
            FileHandle::Write(w) => f.debug_tuple("FileHandle::Write").field(w.get_ref()).finish(),
        }
    }
}

/// Open `path` with a textual mode specifier (`"r"` or `"w"`).
///
/// An unrecognized specifier yields `FastaError::InvalidMode` before the
/// filesystem is touched; a path that cannot be opened yields
/// `FastaError::Open`.
pub fn open_handle<P: AsRef<Path>>(path: P, mode: &str) -> Result<FileHandle, FastaError> {
    let path = path.as_ref();
    let mode: OpenMode = mode.parse().map_err(|mode| {
        log::error!("could not open the file: {} for type '{mode}'", path.display());
        FastaError::InvalidMode {
            path: path.to_path_buf(),
            mode,
        }
    })?;
    match mode {
        OpenMode::Read => open_input(path).map(FileHandle::Read),
        OpenMode::Write => open_output(path).map(FileHandle::Write),
    }
}

fn open_failed(source: io::Error, path: &Path, mode: OpenMode) -> FastaError {
    log::error!("could not open the file: {} for type {mode}", path.display());
    FastaError::Open {
        source,
        path: path.to_path_buf(),
        mode: mode.to_string(),
    }
}

/// Open a file for reading; `.gz` is detected by extension or magic bytes.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead + Send>, FastaError> {
    let path = path.as_ref();
    let mut f = File::open(path).map_err(|e| open_failed(e, path, OpenMode::Read))?;

    let is_gz = path.extension().and_then(|s| s.to_str()) == Some("gz")
        || looks_like_gzip(&mut f).unwrap_or(false);

    if is_gz {
        #[cfg(feature = "gzip")]
        {
            log::debug!("reading {} as gzip", path.display());
            return Ok(Box::new(BufReader::with_capacity(
                256 * 1024,
                MultiGzDecoder::new(f),
            )));
        }
        #[cfg(not(feature = "gzip"))]
        {
            return Err(open_failed(
                io::Error::new(io::ErrorKind::Unsupported, "gzip support not enabled"),
                path,
                OpenMode::Read,
            ));
        }
    }
    Ok(Box::new(BufReader::with_capacity(256 * 1024, f)))
}

/// Create (or truncate) a file for writing.
pub fn open_output<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>, FastaError> {
    let path = path.as_ref();
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| open_failed(e, path, OpenMode::Write))
}
