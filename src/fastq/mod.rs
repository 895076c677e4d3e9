//! FASTQ reading and writing
//!
//! # Example
//!
//! ```rust
//! use seq_codec::fastq::{Reader, Writer};
//! use seq_codec::qual::Encoding;
//! use seq_codec::Sequence;
//!
//! # fn main() {
//! let seq = b"@id1 some description
//! SEQUENCE
//! +
//! IIIIIIII
//! @id2
//! SEQUENCE
//! +
//! IIIIIIII
//! ";
//!
//! let mut reader = Reader::new(&seq[..]).set_encoding(Encoding::Sanger);
//! let mut writer = Writer::new(vec![]).set_encoding(Encoding::Sanger);
//!
//! while let Some(result) = reader.next() {
//!     let rec = result.unwrap();
//!     println!("ID: {}, description: {:?}", rec.name(), rec.desc());
//!     writer.write(&rec).unwrap();
//! }
//!
//! // The output is identical
//! assert_eq!(&seq[..], writer.into_inner().unwrap().as_slice());
//! # }
//! ```
//!
//! # Details on parsing and writing
//!
//! * The reader handles UNIX (LF) and Windows (CRLF) line endings. Writing
//!   always uses UNIX line endings.
//! * Leading and trailing whitespace of every line is removed and empty lines
//!   are skipped, before, between and within records.
//! * Before the `+` separator, a line starting with `@` starts a new record.
//!   Any other line is a sequence line; whitespace inside sequence lines is
//!   removed and the lines are joined.
//! * If the `+` line repeats the header, it must be identical to the full
//!   header or to the record name. Otherwise, an error of kind
//!   `ErrorKind::HeaderMismatch` is returned. A `+` line without any
//!   preceding header gives `ErrorKind::MissingHeader`.
//! * The first non-empty line after the separator holds the quality scores
//!   and is never interpreted as header, even if it starts with `@`. Its
//!   length must equal the sequence length, otherwise `ErrorKind::UnequalLengths`
//!   is returned. Quality scores broken into multiple lines are therefore
//!   not supported.
//! * Quality bytes are decoded with the reader's [`Encoding`](crate::qual::Encoding),
//!   which is `Encoding::None` unless set with `Reader::set_encoding()`.
//!   Writers use `Encoding::Sanger` by default.
//! * Input ending within a record results in `ErrorKind::UnexpectedEnd`.
//!   Input ending between records results in `None`.

mod reader;
mod write;

pub use self::reader::*;
pub use self::write::*;
