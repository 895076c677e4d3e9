use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Position of a parsing error within the file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorPosition {
    line: u64,
    id: Option<String>,
}

impl ErrorPosition {
    pub fn new(line: u64, id: Option<String>) -> Self {
        ErrorPosition { line, id }
    }

    /// Line number where the error occurred (starting with 1)
    #[inline]
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Returns the name of the record where the error occurred, if the
    /// header was already parsed. Invalid UTF-8 bytes are replaced
    /// (see `String::from_utf8_lossy`).
    #[inline]
    pub fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for ErrorPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(id) = self.id.as_ref() {
            write!(f, "record '{}' at ", id)?;
        }
        write!(f, "line {}", self.line)
    }
}

#[derive(Debug)]
pub enum ErrorKind {
    /// `std::io::Error` raised by the underlying reader
    Io(io::Error),
    /// A FASTQ separator line (`+`) was found before any header line.
    MissingHeader {
        /// Position of the separator line
        pos: ErrorPosition,
    },
    /// The text following `+` does not match the record header.
    HeaderMismatch {
        /// Position of the separator line
        pos: ErrorPosition,
        /// Text found after the `+`
        found: String,
    },
    /// Sequence and quality lengths found to be different.
    UnequalLengths {
        /// Position of the quality line
        pos: ErrorPosition,
        /// Length of sequence
        seq: usize,
        /// Length of quality information
        qual: usize,
    },
    /// The input ended within a record.
    UnexpectedEnd {
        /// `ErrorPosition::line()` is the last line of the input.
        pos: ErrorPosition,
    },
    /// The operation is not supported by the underlying stream
    /// (e.g. rewinding a reader that cannot seek).
    Unsupported(&'static str),
    /// Writing failed after `written` bytes of the current call
    /// had been written successfully.
    Write {
        written: usize,
        err: io::Error,
    },
}

impl ErrorKind {
    /// Returns the position for this error, if one exists.
    pub fn position(&self) -> Option<&ErrorPosition> {
        match self {
            ErrorKind::MissingHeader { pos } => Some(pos),
            ErrorKind::HeaderMismatch { pos, .. } => Some(pos),
            ErrorKind::UnequalLengths { pos, .. } => Some(pos),
            ErrorKind::UnexpectedEnd { pos } => Some(pos),
            _ => None,
        }
    }

    /// `true` for structural violations of the record format. These are
    /// always fatal to the current read.
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            ErrorKind::MissingHeader { .. }
                | ErrorKind::HeaderMismatch { .. }
                | ErrorKind::UnequalLengths { .. }
        )
    }
}

/// Parsing / writing error
#[derive(Debug)]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl Error {
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Error {
            kind: Box::new(kind),
        }
    }

    #[inline]
    pub(crate) fn write(written: usize, err: io::Error) -> Self {
        Error::new(ErrorKind::Write { written, err })
    }

    /// Returns a reference to the [`ErrorKind`](ErrorKind)
    /// associated with the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the [`ErrorKind`](ErrorKind) associated with
    /// the error, thereby consuming the error.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        *self.kind
    }

    /// Returns the [`ErrorPosition`](ErrorPosition) of
    /// the error within file.
    #[inline]
    pub fn position(&self) -> Option<&ErrorPosition> {
        self.kind().position()
    }

    #[inline]
    pub fn is_protocol(&self) -> bool {
        self.kind().is_protocol()
    }

    /// Number of bytes that were written before a write error occurred.
    #[inline]
    pub fn bytes_written(&self) -> Option<usize> {
        match self.kind() {
            ErrorKind::Write { written, .. } => Some(*written),
            _ => None,
        }
    }

    /// Adds `n` bytes written by earlier calls to the count of a write
    /// error. Other errors are returned unchanged.
    pub(crate) fn add_written(mut self, n: usize) -> Self {
        if let ErrorKind::Write { written, .. } = &mut *self.kind {
            *written += n;
        }
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(ref e) => e.fmt(f),
            ErrorKind::MissingHeader { pos } => write!(
                f,
                "FASTQ parse error: no header line parsed before '+' line ({})",
                pos
            ),
            ErrorKind::HeaderMismatch { pos, found } => write!(
                f,
                "FASTQ parse error: quality header '{}' does not match sequence header ({})",
                found, pos
            ),
            ErrorKind::UnequalLengths { pos, seq, qual } => write!(
                f,
                "FASTQ parse error: sequence length is {}, but quality length is {} ({})",
                seq, qual, pos
            ),
            ErrorKind::UnexpectedEnd { pos } => {
                write!(f, "parse error: unexpected end of input ({})", pos)
            }
            ErrorKind::Unsupported(what) => write!(f, "unsupported operation: {}", what),
            ErrorKind::Write { written, err } => {
                write!(f, "write error after {} bytes: {}", written, err)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::new(ErrorKind::Io(e))
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err.into_kind() {
            ErrorKind::Io(e) | ErrorKind::Write { err: e, .. } => e,
            ErrorKind::Unsupported(what) => io::Error::new(io::ErrorKind::Unsupported, what),
            kind => io::Error::new(io::ErrorKind::InvalidData, Error::new(kind)),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(ref err) => Some(err),
            ErrorKind::Write { ref err, .. } => Some(err),
            _ => None,
        }
    }
}
