#![allow(dead_code)]

use seq_codec::qual::Qphred;
use seq_codec::{OwnedSeq, QLetter, Sequence, SequenceMut};
use std::io;

/// Accepts `limit` bytes, then fails with every write.
pub struct FailingWriter {
    pub data: Vec<u8>,
    limit: usize,
}

impl FailingWriter {
    pub fn new(limit: usize) -> Self {
        FailingWriter {
            data: vec![],
            limit,
        }
    }
}

impl io::Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let remaining = self.limit - self.data.len();
        if remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "sink full"));
        }
        let n = remaining.min(buf.len());
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Returns `data` up to `fail_at`, then fails.
pub struct FailingReader {
    data: Vec<u8>,
    pos: usize,
    fail_at: usize,
}

impl FailingReader {
    pub fn new(data: &[u8], fail_at: usize) -> Self {
        FailingReader {
            data: data.to_vec(),
            pos: 0,
            fail_at,
        }
    }
}

impl io::Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.fail_at {
            return Err(io::Error::new(io::ErrorKind::Other, "read failed"));
        }
        let end = self.fail_at.min(self.data.len()).min(self.pos + buf.len());
        let n = end - self.pos;
        buf[..n].copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(n)
    }
}

/// Record type carrying an extra field, which is copied from the template
/// of a reader into every record.
#[derive(Debug, Clone, Default)]
pub struct Tagged {
    pub tag: String,
    pub inner: OwnedSeq,
}

impl Sequence for Tagged {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn desc(&self) -> Option<&str> {
        self.inner.desc()
    }

    fn seq(&self) -> &[u8] {
        self.inner.seq()
    }

    fn qual(&self) -> Option<&[Qphred]> {
        self.inner.qual()
    }
}

impl SequenceMut for Tagged {
    fn set_name(&mut self, name: &str) {
        self.inner.set_name(name)
    }

    fn set_desc(&mut self, desc: Option<&str>) {
        self.inner.set_desc(desc)
    }

    fn append_letters(&mut self, letters: &[u8]) {
        self.inner.append_letters(letters)
    }

    fn append_qletters(&mut self, letters: &[QLetter]) {
        self.inner.append_qletters(letters)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }
}

pub fn quals(q: &[u8]) -> Vec<Qphred> {
    q.iter().map(|&q| Qphred(q)).collect()
}
