use seq_codec::qual::{Encoding, Qphred, UnknownEncoding};

const ALL: [Encoding; 7] = [
    Encoding::None,
    Encoding::Sanger,
    Encoding::Solexa,
    Encoding::Illumina1_3,
    Encoding::Illumina1_5,
    Encoding::Illumina1_8,
    Encoding::Illumina1_9,
];

#[test]
fn offsets() {
    assert_eq!(Encoding::Sanger.decode(b'!'), Qphred(0));
    assert_eq!(Encoding::Sanger.decode(b'I'), Qphred(40));
    assert_eq!(Encoding::Illumina1_8.decode(b'J'), Qphred(41));
    assert_eq!(Encoding::Illumina1_3.decode(b'@'), Qphred(0));
    assert_eq!(Encoding::Illumina1_5.decode(b'h'), Qphred(40));
    assert_eq!(Encoding::Sanger.encode(Qphred(30)), b'?');
    assert_eq!(Encoding::Illumina1_5.encode(Qphred(2)), b'B');
    assert_eq!(Encoding::default(), Encoding::Sanger);
}

#[test]
fn no_encoding() {
    for b in 0..=255u8 {
        assert_eq!(Encoding::None.decode(b), Qphred(b));
        assert_eq!(Encoding::None.encode(Qphred(b)), b);
    }
}

#[test]
fn saturation() {
    assert_eq!(Encoding::Sanger.decode(b' '), Qphred(0));
    assert_eq!(Encoding::Illumina1_5.decode(b'!'), Qphred(0));
    assert_eq!(Encoding::Sanger.encode(Qphred(200)), b'~');
    assert_eq!(Encoding::Illumina1_5.encode(Qphred(255)), b'~');
    assert_eq!(Encoding::Solexa.encode(Qphred(255)), b'~');
}

#[test]
fn phred_round_trip() {
    for &enc in &ALL {
        let max = b'~' - enc.offset();
        for q in 0..=max {
            if enc == Encoding::Solexa {
                continue;
            }
            assert_eq!(enc.decode(enc.encode(Qphred(q))), Qphred(q), "{} {}", enc, q);
        }
    }
}

#[test]
fn solexa() {
    // the scales converge for higher scores
    for q in 10..=60 {
        let b = Encoding::Solexa.encode(Qphred(q));
        assert_eq!(Encoding::Solexa.decode(b), Qphred(q));
    }
    assert_eq!(Encoding::Solexa.encode(Qphred(40)), b'h');
    // lowest Solexa score (-5) is about Phred 1
    assert_eq!(Encoding::Solexa.decode(b';'), Qphred(1));
    assert_eq!(Encoding::Solexa.encode(Qphred(0)), b';');
    assert_eq!(Encoding::Solexa.decode(b'@'), Qphred(3));
}

#[test]
fn names() {
    for &enc in &ALL {
        let parsed: Encoding = enc.to_string().parse().unwrap();
        assert_eq!(parsed, enc);
    }
    assert_eq!("ILLUMINA1.8".parse(), Ok(Encoding::Illumina1_8));
    assert_eq!("phred64".parse(), Ok(Encoding::Illumina1_5));
    assert_eq!(
        "illumina2".parse::<Encoding>(),
        Err(UnknownEncoding("illumina2".to_string()))
    );
}

#[test]
fn error_probability() {
    assert!((Qphred(10).prob_err() - 0.1).abs() < 1e-12);
    assert!((Qphred(30).prob_err() - 0.001).abs() < 1e-12);
    assert_eq!(Qphred(0).prob_err(), 1.);
}
