use std::fs::File;
use std::io::{self, Seek};
use std::path::Path;

use log::{debug, trace};

use crate::codec::SeqRead;
use crate::core::{extend_stripped, split_head, trim_space, LineReader, BUFSIZE};
use crate::error::{Error, ErrorKind, Result};
use crate::record::{OwnedSeq, SequenceMut};

type RewindFn<R> = fn(&mut LineReader<R>) -> io::Result<()>;

/// FASTA parser.
///
/// A record ends where the next header line begins. Since this header line
/// has to be read before the end of the current record is known, it is kept
/// by the reader and used as the header of the record returned by the next
/// call to [`next()`](Reader::next).
pub struct Reader<R: io::Read, S = OwnedSeq> {
    line_reader: LineReader<R>,
    // set only by constructors that require `R: Seek`
    rewind_fn: Option<RewindFn<R>>,
    head_prefix: Vec<u8>,
    seq_prefix: Vec<u8>,
    // header of the next record, already consumed from the input
    lookahead: Option<Vec<u8>>,
    template: S,
    line: Vec<u8>,
    seq: Vec<u8>,
}

impl<R> Reader<R, OwnedSeq>
where
    R: io::Read,
{
    /// Creates a new reader with the default buffer size of 64 KiB.
    /// The reader cannot be rewound, use [`new_seekable`](Reader::new_seekable)
    /// if this is needed.
    ///
    /// # Example:
    ///
    /// ```
    /// use seq_codec::fasta::Reader;
    /// use seq_codec::Sequence;
    ///
    /// let fasta = b">id\nSEQUENCE\n>id2\nSEQ\nUENCE\n";
    ///
    /// let mut reader = Reader::new(&fasta[..]);
    /// let record = reader.next().unwrap().unwrap();
    /// assert_eq!(record.name(), "id");
    /// let record = reader.next().unwrap().unwrap();
    /// assert_eq!(record.seq(), b"SEQUENCE");
    /// assert!(reader.next().is_none());
    /// ```
    #[inline]
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, BUFSIZE)
    }

    /// Creates a new reader with a given buffer capacity. The minimum allowed
    /// capacity is 3.
    #[inline]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Reader {
            line_reader: LineReader::with_capacity(reader, capacity),
            rewind_fn: None,
            head_prefix: b">".to_vec(),
            seq_prefix: vec![],
            lookahead: None,
            template: OwnedSeq::default(),
            line: vec![],
            seq: vec![],
        }
    }
}

impl<R> Reader<R, OwnedSeq>
where
    R: io::Read + Seek,
{
    /// Creates a new reader, which supports [`rewind()`](Reader::rewind).
    #[inline]
    pub fn new_seekable(reader: R) -> Self {
        Self::seekable_with_capacity(reader, BUFSIZE)
    }

    #[inline]
    pub fn seekable_with_capacity(reader: R, capacity: usize) -> Self {
        let mut rdr = Self::with_capacity(reader, capacity);
        rdr.rewind_fn = Some(LineReader::<R>::seek_to_start as RewindFn<R>);
        rdr
    }
}

impl Reader<File, OwnedSeq> {
    /// Creates a reader from a file path. Files can be rewound.
    ///
    /// # Example:
    ///
    /// ```no_run
    /// use seq_codec::fasta::Reader;
    ///
    /// let mut reader = Reader::from_path("seqs.fasta").unwrap();
    ///
    /// // (... do something with the reader)
    /// ```
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Reader<File>> {
        File::open(path).map(Reader::new_seekable)
    }
}

impl<R, S> Reader<R, S>
where
    R: io::Read,
    S: SequenceMut,
{
    /// Sets the prefix that identifies header lines (default: `>`).
    #[inline]
    pub fn set_head_prefix(mut self, prefix: &[u8]) -> Self {
        self.head_prefix = prefix.to_vec();
        self
    }

    /// Sets the prefix that identifies sequence lines (default: empty,
    /// meaning that every non-empty line that is not a header belongs to
    /// the sequence). Lines matching neither prefix are ignored.
    #[inline]
    pub fn set_seq_prefix(mut self, prefix: &[u8]) -> Self {
        self.seq_prefix = prefix.to_vec();
        self
    }

    /// Returns a reader producing clones of `template`. Each clone is
    /// emptied with [`SequenceMut::clear`] before it is filled.
    #[inline]
    pub fn set_template<T: SequenceMut>(self, template: T) -> Reader<R, T> {
        Reader {
            line_reader: self.line_reader,
            rewind_fn: self.rewind_fn,
            head_prefix: self.head_prefix,
            seq_prefix: self.seq_prefix,
            lookahead: self.lookahead,
            template,
            line: self.line,
            seq: self.seq,
        }
    }

    /// Returns `true` if the reader was constructed with a seekable input.
    #[inline]
    pub fn is_seekable(&self) -> bool {
        self.rewind_fn.is_some()
    }

    /// Reads the next record. At the end of the input, the last record is
    /// returned if a header was found, otherwise `None`.
    pub fn next(&mut self) -> Option<Result<S>> {
        let mut head = self.lookahead.take();
        self.seq.clear();

        loop {
            if !try_opt!(self.line_reader.read_line(&mut self.line)) {
                return head.map(|h| Ok(self.new_record(&h)));
            }

            let line = trim_space(&self.line);
            if line.is_empty() {
                continue;
            }

            if line.starts_with(&self.head_prefix) {
                let label = line[self.head_prefix.len()..].to_vec();
                if head.is_none() {
                    head = Some(label);
                } else {
                    trace!(
                        "header at line {} kept for the next record",
                        self.line_reader.line()
                    );
                    self.lookahead = Some(label);
                    break;
                }
            } else if line.starts_with(&self.seq_prefix) {
                extend_stripped(&mut self.seq, &line[self.seq_prefix.len()..]);
            }
        }

        head.map(|h| Ok(self.new_record(&h)))
    }

    fn new_record(&self, head: &[u8]) -> S {
        let mut record = self.template.clone();
        record.clear();
        let (name, desc) = split_head(head);
        record.set_name(&String::from_utf8_lossy(name));
        record.set_desc(desc.map(String::from_utf8_lossy).as_deref());
        record.append_letters(&self.seq);
        record
    }

    /// Moves the reader back to the start of the input. Fails with
    /// `ErrorKind::Unsupported` without changing the reader if the input
    /// is not seekable.
    ///
    /// # Example
    ///
    /// ```
    /// use seq_codec::fasta::Reader;
    /// use std::io::Cursor;
    ///
    /// let fasta = b">id1\nACGT\n>id2\nTGCA\n";
    ///
    /// let mut reader = Reader::new_seekable(Cursor::new(&fasta[..]));
    /// let first = reader.next().unwrap().unwrap();
    /// reader.next().unwrap().unwrap();
    ///
    /// reader.rewind().unwrap();
    /// assert_eq!(reader.next().unwrap().unwrap(), first);
    /// ```
    pub fn rewind(&mut self) -> Result<()> {
        let rewind = self
            .rewind_fn
            .ok_or_else(|| Error::new(ErrorKind::Unsupported("input is not seekable")))?;
        rewind(&mut self.line_reader)?;
        self.lookahead = None;
        debug!("FASTA reader rewound");
        Ok(())
    }

    /// Returns a borrowed iterator over all FASTA records.
    #[inline]
    pub fn records(&mut self) -> RecordsIter<'_, R, S> {
        RecordsIter { rdr: self }
    }

    /// Returns an iterator over all FASTA records like `Reader::records()`,
    /// but with the difference that it owns the underlying reader.
    #[inline]
    pub fn into_records(self) -> RecordsIntoIter<R, S> {
        RecordsIntoIter { rdr: self }
    }

    /// Returns the underlying reader. Buffered data not yet parsed is lost.
    #[inline]
    pub fn into_inner(self) -> R {
        self.line_reader.into_inner()
    }

    /// Closes the underlying reader by dropping it.
    #[inline]
    pub fn close(self) -> Result<()> {
        drop(self.into_inner());
        Ok(())
    }
}

impl<R, S> SeqRead for Reader<R, S>
where
    R: io::Read,
    S: SequenceMut,
{
    type Seq = S;

    #[inline]
    fn read(&mut self) -> Option<Result<S>> {
        self.next()
    }
}

/// Borrowed iterator of records
pub struct RecordsIter<'a, R, S = OwnedSeq>
where
    R: io::Read,
{
    rdr: &'a mut Reader<R, S>,
}

impl<'a, R, S> Iterator for RecordsIter<'a, R, S>
where
    R: io::Read,
    S: SequenceMut,
{
    type Item = Result<S>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.rdr.next()
    }
}

/// Iterator of records that owns the underlying reader
pub struct RecordsIntoIter<R: io::Read, S = OwnedSeq> {
    rdr: Reader<R, S>,
}

impl<R, S> Iterator for RecordsIntoIter<R, S>
where
    R: io::Read,
    S: SequenceMut,
{
    type Item = Result<S>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.rdr.next()
    }
}
