//! Single-record reading and writing, shared by the FASTA and FASTQ codecs.
//!
//! The result of a single read is `Option<Result<S>>`:
//! `Some(Ok(record))` for a complete record, `None` at the end of the input
//! and `Some(Err(e))` for any other problem. End of input is therefore never
//! reported as an error.

use crate::error::Result;

/// Reads one record per call.
pub trait SeqRead {
    type Seq;

    /// Returns the next record, or `None` if the input is exhausted.
    fn read(&mut self) -> Option<Result<Self::Seq>>;
}

impl<'a, R: SeqRead + ?Sized> SeqRead for &'a mut R {
    type Seq = R::Seq;

    #[inline]
    fn read(&mut self) -> Option<Result<Self::Seq>> {
        (**self).read()
    }
}

/// Writes one record per call.
pub trait SeqWrite<S: ?Sized> {
    /// Writes `record` and returns the number of bytes written. On failure,
    /// the bytes written so far are available from
    /// [`Error::bytes_written`](crate::Error::bytes_written).
    fn write(&mut self, record: &S) -> Result<usize>;
}

impl<'a, S: ?Sized, W: SeqWrite<S> + ?Sized> SeqWrite<S> for &'a mut W {
    #[inline]
    fn write(&mut self, record: &S) -> Result<usize> {
        (**self).write(record)
    }
}
