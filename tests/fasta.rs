#[macro_use]
extern crate matches;

mod common;

use common::{FailingReader, FailingWriter, Tagged};
use seq_codec::fasta::{Reader, Writer};
use seq_codec::prelude::*;
use seq_codec::{ErrorKind, OwnedSeq};
use std::io::{self, Cursor};

const FASTA: &[u8] = b">id desc
ACCGTAGGCT
CCGTAGGCTG
CGTAGGCTGA
GTAGGCTGAA
CCCC
>id2
ATTGTTGTTT
ATTGTTGTTT
ATTGTTGTTT
GGGG
";

// hides `Seek`
struct NoSeek<R>(R);

impl<R: io::Read> io::Read for NoSeek<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

fn expected() -> Vec<OwnedSeq> {
    vec![
        OwnedSeq::new(
            "id",
            Some("desc"),
            b"ACCGTAGGCTCCGTAGGCTGCGTAGGCTGAGTAGGCTGAACCCC",
        ),
        OwnedSeq::new("id2", None, b"ATTGTTGTTTATTGTTGTTTATTGTTGTTTGGGG"),
    ]
}

#[test]
fn reader() {
    for cap in 3..8 {
        let mut reader = Reader::with_capacity(FASTA, cap);
        for exp in expected() {
            let record = reader.next().unwrap().unwrap();
            assert_eq!(record, exp);
            assert!(record.qual().is_none());
        }
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }
}

#[test]
fn lookahead() {
    let mut reader = Reader::new(&b">a\nACGT\n>b\nTTTT\n"[..]);
    let a = reader.next().unwrap().unwrap();
    assert_eq!(a.name(), "a");
    assert_eq!(a.seq(), b"ACGT");
    let b = reader.next().unwrap().unwrap();
    assert_eq!(b.name(), "b");
    assert_eq!(b.seq(), b"TTTT");
    assert!(reader.next().is_none());
}

#[test]
fn empty() {
    assert!(Reader::new(&b""[..]).next().is_none());
    assert!(Reader::new(&b"\n\n \r\n"[..]).next().is_none());
    // no header at all
    assert!(Reader::new(&b"ACGT\nACGT\n"[..]).next().is_none());
}

#[test]
fn empty_records() {
    let mut reader = Reader::new(&b">a\n>b\n\n>c"[..]);
    for name in &["a", "b", "c"] {
        let rec = reader.next().unwrap().unwrap();
        assert_eq!(rec.name(), *name);
        assert!(rec.seq().is_empty());
    }
    assert!(reader.next().is_none());
}

#[test]
fn sequence_before_header() {
    // belongs to the first record
    let mut reader = Reader::new(&b"NNNN\n>a\nAC\n>b\nG\n"[..]);
    let rec = reader.next().unwrap().unwrap();
    assert_eq!(rec.name(), "a");
    assert_eq!(rec.seq(), b"NNNNAC");
    let rec = reader.next().unwrap().unwrap();
    assert_eq!(rec.seq(), b"G");
    assert!(reader.next().is_none());
}

#[test]
fn line_endings_and_whitespace() {
    let fa = &b"\r\n>id  some  desc\r\n AC GT \r\n\r\nA\tC\r\n>id2\r\nG"[..];
    let mut reader = Reader::new(fa);
    let rec = reader.next().unwrap().unwrap();
    assert_eq!(rec.name(), "id");
    assert_eq!(rec.desc(), Some("some  desc"));
    assert_eq!(rec.seq(), b"ACGTAC");
    let rec = reader.next().unwrap().unwrap();
    assert_eq!(rec.name(), "id2");
    assert_eq!(rec.seq(), b"G");
}

#[test]
fn prefixes() {
    let fa = &b"#a\nS:AC\nX:ignored\nS: GT\n#b\nS:T\n"[..];
    let mut reader = Reader::new(fa)
        .set_head_prefix(b"#")
        .set_seq_prefix(b"S:");
    let rec = reader.next().unwrap().unwrap();
    assert_eq!(rec.name(), "a");
    assert_eq!(rec.seq(), b"ACGT");
    let rec = reader.next().unwrap().unwrap();
    assert_eq!(rec.seq(), b"T");
    assert!(reader.next().is_none());
}

#[test]
fn io_error() {
    let mut reader = Reader::new(FailingReader::new(FASTA, 20));
    let err = reader.next().unwrap().err().expect("Should be an error");
    assert_matches!(err.kind(), ErrorKind::Io(_));
}

#[test]
fn rewind_unsupported() {
    let mut reader = Reader::new(NoSeek(&b">a\nAC\n>b\nGT\n"[..]));
    assert!(!reader.is_seekable());
    assert_eq!(reader.next().unwrap().unwrap().name(), "a");
    let err = reader.rewind().err().expect("Should be an error");
    assert_matches!(err.kind(), ErrorKind::Unsupported(_));
    // the pending header of 'b' is still there
    let rec = reader.next().unwrap().unwrap();
    assert_eq!(rec.name(), "b");
    assert_eq!(rec.seq(), b"GT");
    assert!(reader.next().is_none());
}

#[test]
fn rewind() {
    let mut reader = Reader::new_seekable(Cursor::new(FASTA));
    assert!(reader.is_seekable());
    let first = reader.next().unwrap().unwrap();
    // stop within the file, the header of 'id2' is pending
    reader.rewind().unwrap();
    let records: Result<Vec<_>, _> = reader.records().collect();
    let records = records.unwrap();
    assert_eq!(records, expected());
    assert_eq!(records[0], first);
    reader.rewind().unwrap();
    assert_eq!(reader.next().unwrap().unwrap(), first);
}

#[test]
fn template() {
    let template = Tagged {
        tag: "t".to_string(),
        inner: OwnedSeq::new("old", Some("old desc"), b"XXXX"),
    };
    let mut reader = Reader::new(FASTA).set_template(template);
    for exp in expected() {
        let rec = reader.next().unwrap().unwrap();
        assert_eq!(rec.tag, "t");
        assert_eq!(rec.inner, exp);
    }
    assert!(reader.next().is_none());
}

fn write_one(width: usize, record: &OwnedSeq) -> (Vec<u8>, usize) {
    let mut writer = Writer::new(vec![], width);
    let n = writer.write(record).unwrap();
    (writer.into_inner().unwrap(), n)
}

#[test]
fn write_wrap() {
    let rec = OwnedSeq::new("x", None, b"ACGTAC");
    let (out, n) = write_one(3, &rec);
    assert_eq!(out.as_slice(), &b">x\nACG\nTAC\n"[..]);
    assert_eq!(n, out.len());
    let (out, _) = write_one(4, &rec);
    assert_eq!(out.as_slice(), &b">x\nACGT\nAC\n"[..]);
    let (out, _) = write_one(100, &rec);
    assert_eq!(out.as_slice(), &b">x\nACGTAC\n"[..]);
}

#[test]
fn write_empty() {
    let (out, n) = write_one(3, &OwnedSeq::new("x", Some("d"), b""));
    assert_eq!(out.as_slice(), &b">x d\n\n"[..]);
    assert_eq!(n, 6);
}

#[test]
#[should_panic]
fn zero_width() {
    Writer::new(vec![], 0);
}

#[test]
fn write_prefixes() {
    let mut writer = Writer::new(vec![], 2)
        .set_head_prefix(b"#")
        .set_seq_prefix(b"S:");
    writer.write(&OwnedSeq::new("a", None, b"ACG")).unwrap();
    let out = writer.into_inner().unwrap();
    assert_eq!(out.as_slice(), &b"#a\nS:AC\nS:G\n"[..]);

    let mut reader = Reader::new(out.as_slice())
        .set_head_prefix(b"#")
        .set_seq_prefix(b"S:");
    assert_eq!(reader.next().unwrap().unwrap().seq(), b"ACG");
}

#[test]
fn write_error() {
    let mut writer = Writer::new(FailingWriter::new(6), 3);
    let err = writer
        .write(&OwnedSeq::new("id", None, b"ACGTAC"))
        .err()
        .expect("Should be an error");
    assert_eq!(err.bytes_written(), Some(6));
}

#[test]
fn round_trip() {
    for width in 1..12 {
        let mut writer = Writer::new(vec![], width);
        for rec in expected() {
            writer.write(&rec).unwrap();
        }
        let out = writer.into_inner().unwrap();
        let records: Result<Vec<_>, _> = Reader::new(out.as_slice()).records().collect();
        assert_eq!(records.unwrap(), expected());
    }
}

#[test]
fn files() {
    let path = std::env::temp_dir().join(format!("seq_codec_test_{}.fasta", std::process::id()));
    let mut writer = Writer::from_path(&path, 10).unwrap();
    for rec in expected() {
        writer.write(&rec).unwrap();
    }
    writer.close().unwrap();

    let mut reader = Reader::from_path(&path).unwrap();
    assert!(reader.is_seekable());
    assert_eq!(reader.next().unwrap().unwrap(), expected()[0]);
    reader.rewind().unwrap();
    let records: Result<Vec<_>, _> = reader.records().collect();
    assert_eq!(records.unwrap(), expected());
    reader.close().unwrap();
    std::fs::remove_file(&path).unwrap();
}
