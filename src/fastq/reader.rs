use std::fs::File;
use std::io;
use std::path::Path;

use log::trace;

use crate::codec::SeqRead;
use crate::core::{extend_stripped, split_head, trim_space, LineReader, BUFSIZE};
use crate::error::{Error, ErrorKind, ErrorPosition, Result};
use crate::qual::Encoding;
use crate::record::{OwnedSeq, QLetter, SequenceMut};

// Parser state within one call to `Reader::next()`
enum State<S> {
    // no header seen yet
    Head,
    // header seen, collecting sequence lines until '+'
    Seq(S),
    // separator seen, waiting for the quality line
    Qual(S),
}

/// FASTQ parser.
///
/// Each call to [`next()`](Reader::next) assembles one record by cloning the
/// reader's template and filling it.
pub struct Reader<R: io::Read, S = OwnedSeq> {
    line_reader: LineReader<R>,
    encoding: Encoding,
    template: S,
    // reused buffers
    line: Vec<u8>,
    head: Vec<u8>,
    seq: Vec<u8>,
    qual: Vec<u8>,
    qletters: Vec<QLetter>,
}

impl<R> Reader<R, OwnedSeq>
where
    R: io::Read,
{
    /// Creates a new reader with the default buffer size of 64 KiB
    ///
    /// # Example:
    ///
    /// ```
    /// use seq_codec::fastq::Reader;
    /// use seq_codec::qual::{Encoding, Qphred};
    /// use seq_codec::Sequence;
    ///
    /// let fastq = b"@id desc\nACGT\n+\nIIII\n";
    ///
    /// let mut reader = Reader::new(&fastq[..]).set_encoding(Encoding::Sanger);
    /// let record = reader.next().unwrap().unwrap();
    /// assert_eq!(record.name(), "id");
    /// assert_eq!(record.desc(), Some("desc"));
    /// assert_eq!(record.qual().unwrap()[0], Qphred(40));
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
            encoding: Encoding::None,
            template: OwnedSeq::default(),
            line: vec![],
            head: vec![],
            seq: vec![],
            qual: vec![],
            qletters: vec![],
        }
    }
}

impl Reader<File, OwnedSeq> {
    /// Creates a reader from a file path.
    ///
    /// # Example:
    ///
    /// ```no_run
    /// use seq_codec::fastq::Reader;
    ///
    /// let mut reader = Reader::from_path("seqs.fastq").unwrap();
    ///
    /// // (... do something with the reader)
    /// ```
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Reader<File>> {
        File::open(path).map(Reader::new)
    }
}

impl<R, S> Reader<R, S>
where
    R: io::Read,
    S: SequenceMut,
{
    /// Returns a reader decoding quality bytes with the given encoding.
    /// The default is `Encoding::None`: bytes are taken as scores unchanged.
    #[inline]
    pub fn set_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Returns a reader producing clones of `template`. Each clone is
    /// emptied with [`SequenceMut::clear`] before it is filled.
    #[inline]
    pub fn set_template<T: SequenceMut>(self, template: T) -> Reader<R, T> {
        Reader {
            line_reader: self.line_reader,
            encoding: self.encoding,
            template,
            line: self.line,
            head: self.head,
            seq: self.seq,
            qual: self.qual,
            qletters: self.qletters,
        }
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Reads the next record. Returns `None` if the input ended without
    /// any part of a new record, and an error of kind
    /// `ErrorKind::UnexpectedEnd` if it ended within a record.
    ///
    /// Empty lines are skipped anywhere, and sequence lines may be
    /// broken, but the quality scores must be on one single line.
    pub fn next(&mut self) -> Option<Result<S>> {
        let mut state = State::Head;
        self.seq.clear();

        loop {
            if !try_opt!(self.line_reader.read_line(&mut self.line)) {
                if let State::Head = state {
                    if self.seq.is_empty() {
                        return None;
                    }
                }
                let pos = self.error_pos(&state);
                return Some(Err(Error::new(ErrorKind::UnexpectedEnd { pos })));
            }

            let line = trim_space(&self.line);
            if line.is_empty() {
                continue;
            }

            state = match state {
                State::Qual(mut record) => {
                    self.qual.clear();
                    extend_stripped(&mut self.qual, line);
                    if self.qual.len() != self.seq.len() {
                        return Some(Err(Error::new(ErrorKind::UnequalLengths {
                            pos: ErrorPosition::new(
                                self.line_reader.line(),
                                Some(record.name().to_string()),
                            ),
                            seq: self.seq.len(),
                            qual: self.qual.len(),
                        })));
                    }
                    let enc = self.encoding;
                    self.qletters.clear();
                    self.qletters.extend(
                        self.seq
                            .iter()
                            .zip(&self.qual)
                            .map(|(&l, &q)| QLetter::new(l, enc.decode(q))),
                    );
                    record.append_qletters(&self.qletters);
                    return Some(Ok(record));
                }
                State::Head | State::Seq(_) if line[0] == b'@' => {
                    if let State::Seq(ref prev) = state {
                        trace!(
                            "header at line {} replaces incomplete record '{}'",
                            self.line_reader.line(),
                            prev.name()
                        );
                    }
                    self.head.clear();
                    self.head.extend_from_slice(&line[1..]);
                    self.seq.clear();
                    State::Seq(new_record(&self.template, &self.head))
                }
                State::Head if line[0] == b'+' => {
                    return Some(Err(Error::new(ErrorKind::MissingHeader {
                        pos: ErrorPosition::new(self.line_reader.line(), None),
                    })));
                }
                State::Seq(record) if line[0] == b'+' => {
                    let rest = &line[1..];
                    if !rest.is_empty() && rest != &self.head[..] && rest != split_head(&self.head).0 {
                        return Some(Err(Error::new(ErrorKind::HeaderMismatch {
                            pos: ErrorPosition::new(
                                self.line_reader.line(),
                                Some(record.name().to_string()),
                            ),
                            found: String::from_utf8_lossy(rest).into_owned(),
                        })));
                    }
                    State::Qual(record)
                }
                other => {
                    extend_stripped(&mut self.seq, line);
                    other
                }
            };
        }
    }

    fn error_pos(&self, state: &State<S>) -> ErrorPosition {
        let id = match state {
            State::Seq(r) | State::Qual(r) => Some(r.name().to_string()),
            State::Head => None,
        };
        ErrorPosition::new(self.line_reader.line(), id)
    }

    /// Returns a borrowed iterator over all FASTQ records.
    ///
    /// # Example
    ///
    /// ```
    /// use seq_codec::fastq::Reader;
    /// use seq_codec::OwnedSeq;
    ///
    /// let fastq = b"@id1\nACGT\n+\nIIII\n@id2\nTGCA\n+\nIIII\n";
    ///
    /// let mut reader = Reader::new(&fastq[..]);
    /// let records: Result<Vec<OwnedSeq>, _> = reader.records().collect();
    /// let names: Vec<_> = records.unwrap().into_iter().map(|r| r.name).collect();
    /// assert_eq!(names, vec!["id1", "id2"]);
    /// ```
    #[inline]
    pub fn records(&mut self) -> RecordsIter<'_, R, S> {
        RecordsIter { rdr: self }
    }

    /// Returns an iterator over all FASTQ records like `Reader::records()`,
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

    #[inline]
    pub fn close(self) -> Result<()> {
        drop(self);
        Ok(())
    }
}

fn new_record<S: SequenceMut>(template: &S, head: &[u8]) -> S {
    let mut record = template.clone();
    record.clear();
    let (name, desc) = split_head(head);
    record.set_name(&String::from_utf8_lossy(name));
    record.set_desc(desc.map(String::from_utf8_lossy).as_deref());
    record
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
