use std::fs::File;
use std::io;
use std::iter;
use std::path::Path;

use log::debug;

use crate::codec::SeqWrite;
use crate::core::{write_head, CountingWriter};
use crate::error::Result;
use crate::qual::{Encoding, Qphred};
use crate::record::Sequence;

/// FASTQ writer.
///
/// # Example
///
/// ```
/// use seq_codec::fastq::Writer;
/// use seq_codec::qual::Qphred;
/// use seq_codec::OwnedSeq;
///
/// let record = OwnedSeq::with_qual("id", Some("desc"), b"ACG", &[Qphred(0), Qphred(10), Qphred(40)]);
///
/// let mut writer = Writer::new(vec![]);
/// let n = writer.write(&record).unwrap();
/// let out = writer.into_inner().unwrap();
/// assert_eq!(&out[..], b"@id desc\nACG\n+\n!+I\n");
/// assert_eq!(n, out.len());
/// ```
pub struct Writer<W: io::Write> {
    writer: W,
    encoding: Encoding,
    qual_header: bool,
    qual: Vec<u8>,
}

impl<W> Writer<W>
where
    W: io::Write,
{
    #[inline]
    pub fn new(writer: W) -> Self {
        Writer {
            writer,
            encoding: Encoding::Sanger,
            qual_header: false,
            qual: vec![],
        }
    }

    /// Returns a writer encoding quality scores with the given encoding
    /// (default: `Encoding::Sanger`).
    #[inline]
    pub fn set_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// If `true`, the header is repeated after the `+` separator.
    #[inline]
    pub fn set_qual_header(mut self, qual_header: bool) -> Self {
        self.qual_header = qual_header;
        self
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Writes one record and returns the number of bytes written.
    /// Records without quality information are written with the lowest
    /// score at every position.
    pub fn write<S: Sequence + ?Sized>(&mut self, record: &S) -> Result<usize> {
        let enc = self.encoding;
        self.qual.clear();
        match record.qual() {
            Some(qual) => self.qual.extend(qual.iter().map(|&q| enc.encode(q))),
            None => self
                .qual
                .extend(iter::repeat(enc.encode(Qphred(0))).take(record.len())),
        }

        let mut out = CountingWriter::new(&mut self.writer);
        write_head(&mut out, b"@", record)?;
        out.put(record.seq())?;
        out.put(b"\n")?;
        if self.qual_header {
            write_head(&mut out, b"+", record)?;
        } else {
            out.put(b"+\n")?;
        }
        out.put(&self.qual)?;
        out.put(b"\n")?;
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
        debug!("FASTQ writer closed");
        drop(w);
        Ok(())
    }
}

impl Writer<io::BufWriter<File>> {
    /// Creates a buffered writer to a file, truncating any existing file.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        File::create(path).map(|f| Writer::new(io::BufWriter::new(f)))
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
