use memchr::memchr;
use std::io::{self, BufRead, Seek};

/// The default initial buffer size for readers.
pub const BUFSIZE: usize = 64 * 1024;

/// Wraps `buffer_redux::BufReader` and hands out whole lines, regardless of
/// whether a line fits into the buffer or not. Keeps track of the number of
/// lines returned so far.
pub struct LineReader<R>
where
    R: io::Read,
{
    buf_reader: buffer_redux::BufReader<R>,
    // Number of lines returned so far
    line: u64,
}

impl<R> LineReader<R>
where
    R: io::Read,
{
    /// Creates a new line reader with a given buffer capacity. The minimum
    /// allowed capacity is 3.
    #[inline]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        assert!(capacity >= 3);
        LineReader {
            buf_reader: buffer_redux::BufReader::with_capacity(capacity, reader),
            line: 0,
        }
    }

    /// Number of the line returned by the last call to `read_line`
    /// (starting with 1), or 0 if nothing was read yet.
    #[inline]
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Reads the next line into `out` (which is cleared first), including
    /// its line terminator if there is one. Lines longer than the buffer
    /// are assembled from multiple buffer fills.
    ///
    /// Returns `Ok(false)` at the end of the input.
    pub fn read_line(&mut self, out: &mut Vec<u8>) -> io::Result<bool> {
        out.clear();
        loop {
            let (complete, used) = {
                let buf = match self.buf_reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if buf.is_empty() {
                    // EOF: a final line without terminator is still a line
                    if out.is_empty() {
                        return Ok(false);
                    }
                    self.line += 1;
                    return Ok(true);
                }
                match memchr(b'\n', buf) {
                    Some(pos) => {
                        out.extend_from_slice(&buf[..pos + 1]);
                        (true, pos + 1)
                    }
                    None => {
                        out.extend_from_slice(buf);
                        (false, buf.len())
                    }
                }
            };
            self.buf_reader.consume(used);
            if complete {
                self.line += 1;
                return Ok(true);
            }
        }
    }

    /// Returns the underlying reader. Buffered data not yet consumed is lost.
    #[inline]
    pub fn into_inner(self) -> R {
        self.buf_reader.into_inner()
    }
}

impl<R> LineReader<R>
where
    R: io::Read + Seek,
{
    /// Seeks the underlying reader back to its start, discarding the buffer.
    #[inline]
    pub fn seek_to_start(&mut self) -> io::Result<()> {
        self.buf_reader.seek(io::SeekFrom::Start(0))?;
        self.line = 0;
        Ok(())
    }
}
