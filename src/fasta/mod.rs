//! FASTA reading and writing
//!
//! # Example
//!
//! ```rust
//! use seq_codec::fasta::{Reader, Writer};
//! use seq_codec::Sequence;
//!
//! # fn main() {
//! let seq = b">id1 some description
//! SEQUE
//! NCE
//! >id2
//! SEQUENCE
//! ";
//!
//! let mut reader = Reader::new(&seq[..]);
//! // write with a line width of 4
//! let mut writer = Writer::new(vec![], 4);
//!
//! while let Some(result) = reader.next() {
//!     let rec = result.unwrap();
//!     assert_eq!(rec.seq(), b"SEQUENCE");
//!     writer.write(&rec).unwrap();
//! }
//!
//! let expected = b">id1 some description
//! SEQU
//! ENCE
//! >id2
//! SEQU
//! ENCE
//! ";
//! assert_eq!(&expected[..], writer.into_inner().unwrap().as_slice());
//! # }
//! ```
//!
//! # Details on parsing and writing
//!
//! * The reader handles UNIX (LF) and Windows (CRLF) line endings. Writing
//!   always uses UNIX line endings.
//! * Leading and trailing whitespace of every line is removed and empty lines
//!   are skipped.
//! * A line starting with the header prefix (`>` by default) starts a record.
//!   The header text is split into name and description at the first
//!   whitespace.
//! * A line starting with the sequence prefix (empty by default) belongs to
//!   the sequence of the current record. The prefix and any whitespace are
//!   removed, and the lines are joined. Sequence lines before the first
//!   header are added to the first record. Other lines are ignored.
//! * Records do not carry quality information.
//! * Empty input, or input without any header, results in `None` being
//!   returned immediately by `Reader::next()`.

mod reader;
mod write;

pub use self::reader::*;
pub use self::write::*;
