//! Reading and writing whole collections of records
//!
//! [`Reader`](Reader) and [`Writer`](Writer) wrap any single-record reader or
//! writer (FASTA or FASTQ) and transfer all records at once.
//!
//! # Example
//!
//! ```
//! use seq_codec::alignment;
//! use seq_codec::fasta;
//!
//! let input = b">a\nACGT\n>b\nTTTT\n";
//!
//! let mut reader = alignment::Reader::new(fasta::Reader::new(&input[..]));
//! let aln = reader.read().unwrap();
//! assert_eq!(aln.len(), 2);
//!
//! let mut writer = alignment::Writer::new(fasta::Writer::new(vec![], 60));
//! let n = writer.write(&aln).unwrap();
//! assert_eq!(n, input.len());
//! ```

use std::ops::Index;
use std::slice;
use std::vec;

use crate::codec::{SeqRead, SeqWrite};
use crate::error::Result;
use crate::record::OwnedSeq;

/// An ordered collection of records in the order they were read.
/// Neither names nor sequence lengths are checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment<S = OwnedSeq> {
    records: Vec<S>,
}

impl<S> Alignment<S> {
    #[inline]
    pub fn new() -> Self {
        Alignment { records: vec![] }
    }

    #[inline]
    pub fn push(&mut self, record: S) {
        self.records.push(record);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&S> {
        self.records.get(i)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.records.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.records
    }

    #[inline]
    pub fn into_inner(self) -> Vec<S> {
        self.records
    }
}

impl<S> Default for Alignment<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> From<Vec<S>> for Alignment<S> {
    fn from(records: Vec<S>) -> Self {
        Alignment { records }
    }
}

impl<S> Index<usize> for Alignment<S> {
    type Output = S;

    #[inline]
    fn index(&self, i: usize) -> &S {
        &self.records[i]
    }
}

impl<S> FromIterator<S> for Alignment<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Alignment {
            records: iter.into_iter().collect(),
        }
    }
}

impl<S> IntoIterator for Alignment<S> {
    type Item = S;
    type IntoIter = vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Alignment<S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Reads all remaining records of a single-record reader.
pub struct Reader<R> {
    rdr: R,
}

impl<R: SeqRead> Reader<R> {
    #[inline]
    pub fn new(rdr: R) -> Self {
        Reader { rdr }
    }

    /// Reads records until the end of the input. The first error aborts
    /// reading, and records read until then are discarded.
    pub fn read(&mut self) -> Result<Alignment<R::Seq>> {
        let mut aln = Alignment::new();
        while let Some(res) = self.rdr.read() {
            aln.push(res?);
        }
        Ok(aln)
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.rdr
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.rdr
    }
}

/// Writes all records of a collection to a single-record writer.
pub struct Writer<W> {
    wtr: W,
}

impl<W> Writer<W> {
    #[inline]
    pub fn new(wtr: W) -> Self {
        Writer { wtr }
    }

    /// Writes the records in order and returns the total number of bytes
    /// written. On error, [`Error::bytes_written`](crate::Error::bytes_written)
    /// returns the total for all records up to the failure.
    pub fn write<S>(&mut self, aln: &Alignment<S>) -> Result<usize>
    where
        W: SeqWrite<S>,
    {
        let mut n = 0;
        for record in aln {
            let written = self.wtr.write(record).map_err(|e| e.add_written(n))?;
            n += written;
        }
        Ok(n)
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.wtr
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.wtr
    }
}
