use crate::qual::Qphred;
use std::fmt;

/// A sequence letter together with its quality score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QLetter {
    pub l: u8,
    pub q: Qphred,
}

impl QLetter {
    #[inline]
    pub fn new(l: u8, q: Qphred) -> Self {
        QLetter { l, q }
    }
}

/// Read access to a sequence record, implemented by [`OwnedSeq`](OwnedSeq)
/// and by any custom type that readers should produce.
pub trait Sequence {
    /// Record name (ID): the header text up to the first whitespace
    fn name(&self) -> &str;

    /// Optional description: the header text following the name
    fn desc(&self) -> Option<&str>;

    /// The sequence letters
    fn seq(&self) -> &[u8];

    /// The quality scores, if present. When present, the number of scores
    /// always equals the sequence length.
    fn qual(&self) -> Option<&[Qphred]>;

    /// Returns the sequence length
    #[inline]
    fn len(&self) -> usize {
        self.seq().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the letter and quality at position `i`. The quality is 0
    /// if the sequence has no quality information.
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    fn at(&self, i: usize) -> QLetter {
        let q = self.qual().map(|q| q[i]).unwrap_or_default();
        QLetter::new(self.seq()[i], q)
    }

    /// Returns the full header (name and description separated by a space)
    fn head(&self) -> String {
        match self.desc() {
            Some(desc) => format!("{} {}", self.name(), desc),
            None => self.name().to_string(),
        }
    }
}

/// Mutable access used by the readers to construct records.
///
/// Readers clone a template value for each record and fill it using
/// these methods, so the template's own content should normally be empty.
pub trait SequenceMut: Sequence + Clone {
    fn set_name(&mut self, name: &str);

    fn set_desc(&mut self, desc: Option<&str>);

    /// Appends letters without quality information.
    fn append_letters(&mut self, letters: &[u8]);

    /// Appends letters with their quality scores.
    fn append_qletters(&mut self, letters: &[QLetter]);

    /// Removes name, description, letters and quality. Readers call this on
    /// each clone of their template, so other fields survive.
    fn clear(&mut self);
}

/// A sequence record that owns its data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedSeq {
    pub name: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
    pub qual: Option<Vec<Qphred>>,
}

impl OwnedSeq {
    /// Creates a new record without quality information.
    pub fn new(name: &str, desc: Option<&str>, seq: &[u8]) -> Self {
        OwnedSeq {
            name: name.to_string(),
            desc: desc.map(|d| d.to_string()),
            seq: seq.to_vec(),
            qual: None,
        }
    }

    /// Creates a new record with quality scores.
    ///
    /// Panics if sequence and quality lengths differ.
    pub fn with_qual(name: &str, desc: Option<&str>, seq: &[u8], qual: &[Qphred]) -> Self {
        assert_eq!(seq.len(), qual.len(), "sequence and quality lengths differ");
        let mut s = Self::new(name, desc, seq);
        s.qual = Some(qual.to_vec());
        s
    }
}

impl Sequence for OwnedSeq {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    #[inline]
    fn seq(&self) -> &[u8] {
        &self.seq
    }

    #[inline]
    fn qual(&self) -> Option<&[Qphred]> {
        self.qual.as_deref()
    }
}

impl SequenceMut for OwnedSeq {
    fn set_name(&mut self, name: &str) {
        self.name.clear();
        self.name.push_str(name);
    }

    fn set_desc(&mut self, desc: Option<&str>) {
        self.desc = desc.map(|d| d.to_string());
    }

    fn append_letters(&mut self, letters: &[u8]) {
        if letters.is_empty() {
            return;
        }
        // the scores would no longer cover the whole sequence
        self.qual = None;
        self.seq.extend_from_slice(letters);
    }

    fn append_qletters(&mut self, letters: &[QLetter]) {
        if letters.is_empty() {
            return;
        }
        if self.seq.is_empty() && self.qual.is_none() {
            self.qual = Some(Vec::with_capacity(letters.len()));
        }
        if let Some(qual) = self.qual.as_mut() {
            qual.extend(letters.iter().map(|ql| ql.q));
        }
        self.seq.extend(letters.iter().map(|ql| ql.l));
    }

    fn clear(&mut self) {
        self.name.clear();
        self.desc = None;
        self.seq.clear();
        self.qual = None;
    }
}

impl fmt::Display for OwnedSeq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.head(), String::from_utf8_lossy(&self.seq))
    }
}

