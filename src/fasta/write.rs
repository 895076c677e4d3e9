use std::fs::File;
use std::io;
use std::path::Path;

use log::debug;

use crate::codec::SeqWrite;
use crate::core::{write_head, CountingWriter};
use crate::error::Result;
use crate::record::Sequence;

/// FASTA writer, which wraps the sequence to lines of a fixed width.
///
/// # Example
///
/// ```
/// use seq_codec::fasta::Writer;
/// use seq_codec::OwnedSeq;
///
/// let record = OwnedSeq::new("id", None, b"ACGTAC");
///
/// let mut writer = Writer::new(vec![], 4);
/// writer.write(&record).unwrap();
/// assert_eq!(&writer.into_inner().unwrap()[..], b">id\nACGT\nAC\n");
/// ```
pub struct Writer<W: io::Write> {
    writer: W,
    head_prefix: Vec<u8>,
    seq_prefix: Vec<u8>,
    width: usize,
}

impl<W> Writer<W>
where
    W: io::Write,
{
    /// Creates a new writer wrapping sequences to `width` letters per line.
    ///
    /// Panics if `width` is 0.
    #[inline]
    pub fn new(writer: W, width: usize) -> Self {
        assert!(width > 0);
        Writer {
            writer,
            head_prefix: b">".to_vec(),
            seq_prefix: vec![],
            width,
        }
    }

    /// Sets the prefix written before the header (default: `>`).
    #[inline]
    pub fn set_head_prefix(mut self, prefix: &[u8]) -> Self {
        self.head_prefix = prefix.to_vec();
        self
    }

    /// Sets the prefix written before every sequence line (default: empty).
    #[inline]
    pub fn set_seq_prefix(mut self, prefix: &[u8]) -> Self {
        self.seq_prefix = prefix.to_vec();
        self
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Writes one record and returns the number of bytes written. At least
    /// one sequence line is written, which is empty for an empty sequence.
    pub fn write<S: Sequence + ?Sized>(&mut self, record: &S) -> Result<usize> {
        let mut out = CountingWriter::new(&mut self.writer);
        write_head(&mut out, &self.head_prefix, record)?;
        let seq = record.seq();
        let mut chunks = seq.chunks(self.width);
        let first = chunks.next().unwrap_or(&[][..]);
        for chunk in Some(first).into_iter().chain(chunks) {
            out.put(&self.seq_prefix)?;
            out.put(chunk)?;
            out.put(b"\n")?;
        }
        Ok(out.written())
    }

    #[inline]
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    #[inline]
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Flushes and closes the underlying writer by dropping it.
    pub fn close(self) -> Result<()> {
        let w = self.into_inner()?;
        debug!("FASTA writer closed");
        drop(w);
        Ok(())
    }
}

impl Writer<io::BufWriter<File>> {
    /// Creates a buffered writer to a file, truncating any existing file.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P, width: usize) -> io::Result<Self> {
        File::create(path).map(|f| Writer::new(io::BufWriter::new(f), width))
    }
}

impl<W, S> SeqWrite<S> for Writer<W>
where
    W: io::Write,
    S: Sequence + ?Sized,
{
    #[inline]
    fn write(&mut self, record: &S) -> Result<usize> {
        Writer::write(self, record)
    }
}
