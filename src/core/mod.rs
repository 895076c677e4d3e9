//! Contains core routines and types shared by the FASTA and FASTQ parsers.
//!
//! [`LineReader`](crate::core::LineReader) is the line tokenizer that both
//! readers are built on. It is public so that it can be used for writing
//! other line-based parsers, but its API may still change.
#[macro_use]
mod util;
mod bufreader;
mod write;

pub(crate) use self::util::*;
pub(crate) use self::write::*;

pub use self::bufreader::*;
