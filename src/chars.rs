use std::ops::{Bound, RangeBounds};

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// A string indexed by display character rather than by byte.
///
/// The input is decomposed to NFKD and grouped into clusters: a base
/// character plus any combining marks that decompose from it count as one
/// display character. All indices on this type are character indices, so
/// slicing and truncation can never split a multi-byte encoding.
///
/// ```rust,ignore
/// let mut s = CharIndex::new("cafés");
/// assert_eq!(s.len(), 5);               // c a f é s (é is e + U+0301)
/// s.truncate(4);
/// assert_eq!(s.bytes(), "cafe\u{301}".as_bytes());
/// ```
///
/// Cluster boundaries are extended grapheme clusters of the decomposed text.
/// For plain and accented Latin text this groups exactly one base plus its
/// marks per character; emoji and other multi-codepoint sequences follow
/// UAX #29 segmentation.
pub struct CharIndex {
    /// All bytes of the decomposed string, in order.
    sequence: Vec<u8>,
    /// Byte offset of the start of each character within `sequence`.
    offsets: Vec<usize>,
}

impl CharIndex {
    /// Decomposes `s` and records the byte span of each display character.
    ///
    /// Never fails; the empty string produces zero characters.
    pub fn new(s: &str) -> Self {
        let decomposed: String = s.nfkd().collect();
        let mut sequence = Vec::with_capacity(decomposed.len());
        let mut offsets = Vec::new();
        for cluster in decomposed.graphemes(true) {
            offsets.push(sequence.len());
            sequence.extend_from_slice(cluster.as_bytes());
        }
        Self { sequence, offsets }
    }

    /// Number of display characters.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The bytes that encode the `i`th character, or `None` out of range.
    pub fn get(&self, i: usize) -> Option<&[u8]> {
        let start = *self.offsets.get(i)?;
        match self.offsets.get(i + 1) {
            Some(&end) => Some(&self.sequence[start..end]),
            None => Some(&self.sequence[start..]),
        }
    }

    /// The entire byte sequence, as currently sized.
    pub fn bytes(&self) -> &[u8] {
        &self.sequence
    }

    /// The bytes spanning a character range.
    ///
    /// The end bound is clamped to the character count, and a start bound at
    /// or past it yields an empty slice, so any range is safe to pass.
    /// Use an unbounded end (`i..`) for "through the end of the string".
    pub fn slice(&self, range: impl RangeBounds<usize>) -> &[u8] {
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&j) => j + 1,
            Bound::Excluded(&j) => j,
            Bound::Unbounded => self.len(),
        };

        if start >= self.len() || end <= start {
            return &[];
        }

        let lo = self.offsets[start];
        match self.offsets.get(end) {
            Some(&hi) => &self.sequence[lo..hi],
            None => &self.sequence[lo..],
        }
    }

    /// Truncates to at most `n` characters. No-op when `n >= len()`.
    pub fn truncate(&mut self, n: usize) {
        if n >= self.len() {
            return;
        }
        self.sequence.truncate(self.offsets[n]);
        self.offsets.truncate(n);
    }

    /// Iterates over the byte span of each character in order.
    pub fn chars(&self) -> impl Iterator<Item = &[u8]> {
        let ends = self
            .offsets
            .iter()
            .skip(1)
            .copied()
            .chain(std::iter::once(self.sequence.len()));
        self.offsets
            .iter()
            .copied()
            .zip(ends)
            .map(|(lo, hi)| &self.sequence[lo..hi])
    }
}
