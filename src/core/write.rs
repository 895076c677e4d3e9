use crate::error::{Error, Result};
use crate::record::Sequence;
use std::io;

/// Writes to an `io::Write` instance, keeping count of the bytes that were
/// accepted. A failure is reported as `ErrorKind::Write` together with the
/// count reached so far.
pub(crate) struct CountingWriter<'a, W: io::Write> {
    inner: &'a mut W,
    written: usize,
}

impl<'a, W: io::Write> CountingWriter<'a, W> {
    #[inline]
    pub fn new(inner: &'a mut W) -> Self {
        CountingWriter { inner, written: 0 }
    }

    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    // same as io::Write::write_all, but counts partial writes
    pub fn put(&mut self, mut data: &[u8]) -> Result<()> {
        while !data.is_empty() {
            match self.inner.write(data) {
                Ok(0) => {
                    let err = io::Error::new(io::ErrorKind::WriteZero, "failed to write whole buffer");
                    return Err(Error::write(self.written, err));
                }
                Ok(n) => {
                    self.written += n;
                    data = &data[n..];
                }
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::write(self.written, e)),
            }
        }
        Ok(())
    }
}

/// Writes `prefix`, the record name, optionally a space and the description,
/// and a newline.
pub(crate) fn write_head<W, S>(out: &mut CountingWriter<W>, prefix: &[u8], record: &S) -> Result<()>
where
    W: io::Write,
    S: Sequence + ?Sized,
{
    out.put(prefix)?;
    out.put(record.name().as_bytes())?;
    if let Some(desc) = record.desc() {
        if !desc.is_empty() {
            out.put(b" ")?;
            out.put(desc.as_bytes())?;
        }
    }
    out.put(b"\n")
}
