//! Quality score encodings
//!
//! FASTQ stores one quality score per sequence letter as a single printable
//! byte. How a byte maps to a Phred score depends on the encoding scheme,
//! which has to be chosen by the user when constructing a reader or writer.
//!
//! ```
//! use seq_codec::qual::{Encoding, Qphred};
//!
//! assert_eq!(Encoding::Sanger.decode(b'I'), Qphred(40));
//! assert_eq!(Encoding::Illumina1_5.encode(Qphred(40)), b'h');
//! ```

use std::fmt;
use std::str::FromStr;

/// A Phred quality score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Qphred(pub u8);

impl Qphred {
    /// Probability of the letter being wrong.
    pub fn prob_err(self) -> f64 {
        10f64.powf(-(self.0 as f64) / 10.)
    }
}

/// Quality encoding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// No encoding: bytes are taken as scores unchanged.
    None,
    /// Phred+33
    Sanger,
    /// Solexa+64, converted from / to the Phred scale
    Solexa,
    /// Phred+64
    Illumina1_3,
    /// Phred+64
    Illumina1_5,
    /// Phred+33
    Illumina1_8,
    /// Phred+33
    Illumina1_9,
}

// highest printable byte
const MAX_BYTE: u8 = b'~';

impl Encoding {
    /// The byte that represents score 0.
    pub fn offset(self) -> u8 {
        match self {
            Encoding::None => 0,
            Encoding::Sanger | Encoding::Illumina1_8 | Encoding::Illumina1_9 => 33,
            Encoding::Solexa | Encoding::Illumina1_3 | Encoding::Illumina1_5 => 64,
        }
    }

    /// Decodes a quality byte. Bytes below the offset give a score of 0.
    #[inline]
    pub fn decode(self, b: u8) -> Qphred {
        match self {
            Encoding::None => Qphred(b),
            Encoding::Solexa => Qphred(solexa_to_phred(b as i32 - 64)),
            _ => Qphred(b.saturating_sub(self.offset())),
        }
    }

    /// Encodes a score, saturating at the highest printable byte (`~`).
    #[inline]
    pub fn encode(self, q: Qphred) -> u8 {
        match self {
            Encoding::None => q.0,
            Encoding::Solexa => {
                let b = phred_to_solexa(q.0) + 64;
                b.max(0).min(MAX_BYTE as i32) as u8
            }
            _ => q.0.saturating_add(self.offset()).min(MAX_BYTE),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Encoding::None => "none",
            Encoding::Sanger => "sanger",
            Encoding::Solexa => "solexa",
            Encoding::Illumina1_3 => "illumina1.3",
            Encoding::Illumina1_5 => "illumina1.5",
            Encoding::Illumina1_8 => "illumina1.8",
            Encoding::Illumina1_9 => "illumina1.9",
        }
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Sanger
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown encoding name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEncoding(pub String);

impl fmt::Display for UnknownEncoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown quality encoding: '{}'", self.0)
    }
}

impl std::error::Error for UnknownEncoding {}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let enc = match s.to_ascii_lowercase().as_str() {
            "none" => Encoding::None,
            "sanger" | "phred33" => Encoding::Sanger,
            "solexa" => Encoding::Solexa,
            "illumina1.3" => Encoding::Illumina1_3,
            "illumina1.5" | "phred64" => Encoding::Illumina1_5,
            "illumina1.8" => Encoding::Illumina1_8,
            "illumina1.9" => Encoding::Illumina1_9,
            _ => return Err(UnknownEncoding(s.to_string())),
        };
        Ok(enc)
    }
}

// Q_phred = 10 * log10(10^(Q_solexa / 10) + 1)
fn solexa_to_phred(q: i32) -> u8 {
    let p = 10. * (10f64.powf(q as f64 / 10.) + 1.).log10();
    p.round().max(0.).min(u8::MAX as f64) as u8
}

// Q_solexa = 10 * log10(10^(Q_phred / 10) - 1), lowest Solexa score is -5
fn phred_to_solexa(q: u8) -> i32 {
    if q == 0 {
        return -5;
    }
    let s = 10. * (10f64.powf(q as f64 / 10.) - 1.).log10();
    (s.round() as i32).max(-5)
}
