//! Streaming readers and writers for FASTQ and FASTA records.
//!
//! Both readers work line by line on any `std::io::Read` source and return
//! one record per call to `next()`. Records are owned values implementing
//! the [`Sequence`](Sequence) trait ([`OwnedSeq`](OwnedSeq) by default).
//! The [`alignment`](alignment) module collects whole files into an
//! [`Alignment`](alignment::Alignment) and writes them back.
//!
//! # More detailed documentation
//!
//! Please refer to the module docs for more information on how to use the
//! reading and writing functions, as well as information on the exact
//! parsing behaviour:
//!
//! * [`fastq module`](fastq) and [`fastq::Reader`](fastq::Reader)
//! * [`fasta module`](fasta) and [`fasta::Reader`](fasta::Reader)
//! * [`qual module`](qual) for quality encodings
//!
//! # Example FASTQ parser:
//!
//! This code prints the name of each FASTQ record and its mean quality.
//!
//! ```no_run
//! use seq_codec::fastq::Reader;
//! use seq_codec::qual::Encoding;
//! use seq_codec::Sequence;
//!
//! let mut reader = Reader::from_path("seqs.fastq")
//!     .unwrap()
//!     .set_encoding(Encoding::Sanger);
//!
//! while let Some(record) = reader.next() {
//!     let record = record.expect("Error reading record");
//!     let qual = record.qual().unwrap();
//!     let sum: f64 = qual.iter().map(|q| q.0 as f64).sum();
//!     println!("{}: {:.1}", record.name(), sum / qual.len() as f64);
//! }
//! ```
//!
//! # Quality encodings
//!
//! Quality scores are decoded when reading and encoded when writing. The
//! encoding is chosen when constructing the reader or writer. Readers
//! default to [`Encoding::None`](qual::Encoding::None) (the raw byte values),
//! writers to [`Encoding::Sanger`](qual::Encoding::Sanger).
//!
//! # Errors
//!
//! The end of the input is never an error: `next()` returns `None`.
//! Structural problems are reported as [`Error`](Error) with an
//! [`ErrorKind`](ErrorKind) describing the problem and, for parsing errors,
//! an [`ErrorPosition`](ErrorPosition). Nothing is logged on error; the
//! `log` crate is only used for debug and trace messages.

#[macro_use]
extern crate serde_derive;

#[macro_use]
pub mod core;
pub mod alignment;
pub mod codec;
mod error;
pub mod fasta;
pub mod fastq;
pub mod prelude;
pub mod qual;
mod record;

pub use crate::codec::{SeqRead, SeqWrite};
pub use crate::error::*;
pub use crate::record::*;
