//! Fixed-width coverage bit vector over probe-point indices.
//!
//! Bits are packed into `u64` words so the optimizer's per-candidate
//! scoring (OR, popcount) runs a word at a time. Bits past `len` in the
//! last word are always zero, which keeps `popcount` and equality exact
//! without masking.

use sieve_core::errors::CoverageError;

const WORD_BITS: usize = 64;

/// Bit `i` set means probe point `i` was exercised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageBits {
    len: usize,
    words: Vec<u64>,
}

#[inline]
fn word_count(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

impl CoverageBits {
    /// All-zero vector of `len` probe points.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            words: vec![0; word_count(len)],
        }
    }

    /// Build a vector of `len` probe points with the given indices set.
    pub fn from_indices<I>(len: usize, indices: I) -> Result<Self, CoverageError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut bits = Self::new(len);
        for index in indices {
            bits.set(index)?;
        }
        Ok(bits)
    }

    /// Build a vector from one flag per probe point.
    pub fn from_bools(flags: &[bool]) -> Self {
        let mut bits = Self::new(flags.len());
        for (index, _) in flags.iter().enumerate().filter(|(_, hit)| **hit) {
            bits.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
        }
        bits
    }

    /// Number of probe points in the universe this vector spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for a zero-length vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when no probe point is set.
    pub fn none(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Mark probe point `index` as covered.
    pub fn set(&mut self, index: usize) -> Result<(), CoverageError> {
        if index >= self.len {
            return Err(CoverageError::ProbeOutOfRange {
                index,
                size: self.len,
            });
        }
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
        Ok(())
    }

    /// Whether probe point `index` is covered. Out-of-range reads are `false`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        index < self.len && self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Number of covered probe points.
    pub fn popcount(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// `self |= other`.
    pub fn or_in_place(&mut self, other: &CoverageBits) {
        debug_assert_eq!(self.len, other.len, "coverage vectors span different universes");
        for (dst, src) in self.words.iter_mut().zip(&other.words) {
            *dst |= *src;
        }
    }

    /// `popcount(self | other)` without modifying `self`.
    pub fn or_popcount(&self, other: &CoverageBits) -> usize {
        debug_assert_eq!(self.len, other.len, "coverage vectors span different universes");
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a | b).count_ones() as usize)
            .sum()
    }

    /// Number of probe points set in `other` but not in `self`.
    pub fn difference_count(&self, other: &CoverageBits) -> usize {
        debug_assert_eq!(self.len, other.len, "coverage vectors span different universes");
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (b & !a).count_ones() as usize)
            .sum()
    }

    /// `self ^ other` as a new vector.
    pub fn xor(&self, other: &CoverageBits) -> CoverageBits {
        let mut out = self.clone();
        out.xor_in_place(other);
        out
    }

    /// `self ^= other`.
    pub fn xor_in_place(&mut self, other: &CoverageBits) {
        debug_assert_eq!(self.len, other.len, "coverage vectors span different universes");
        for (dst, src) in self.words.iter_mut().zip(&other.words) {
            *dst ^= *src;
        }
    }

    /// Indices of covered probe points, ascending.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(w * WORD_BITS + bit)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_zero() {
        let bits = CoverageBits::new(130);
        assert_eq!(bits.len(), 130);
        assert_eq!(bits.popcount(), 0);
        assert!(bits.none());
    }

    #[test]
    fn test_from_indices_sets_bits_across_words() {
        let bits = CoverageBits::from_indices(130, [0, 63, 64, 129]).unwrap();
        assert_eq!(bits.popcount(), 4);
        assert!(bits.get(63) && bits.get(64) && bits.get(129));
        assert!(!bits.get(1));
        assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![0, 63, 64, 129]);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let err = CoverageBits::from_indices(10, [3, 10]).unwrap_err();
        assert_eq!(err, CoverageError::ProbeOutOfRange { index: 10, size: 10 });
        assert!(!CoverageBits::new(10).get(10));
    }

    #[test]
    fn test_or_popcount_does_not_mutate() {
        let covered = CoverageBits::from_indices(10, [0, 1, 2]).unwrap();
        let candidate = CoverageBits::from_indices(10, [2, 3, 4, 5]).unwrap();
        assert_eq!(covered.or_popcount(&candidate), 6);
        assert_eq!(covered.popcount(), 3);
        assert_eq!(covered.difference_count(&candidate), 3);
    }

    #[test]
    fn test_xor_differs_from_marginal_gain() {
        // Probe 0 is covered but absent from the candidate: XOR flips it on
        // again, so an XOR-based score would count it as new.
        let covered = CoverageBits::from_indices(8, [0, 1]).unwrap();
        let candidate = CoverageBits::from_indices(8, [1, 2]).unwrap();
        assert_eq!(covered.xor(&candidate).popcount(), 2);
        assert_eq!(covered.or_popcount(&candidate) - covered.popcount(), 1);
    }

    #[test]
    fn test_xor_in_place_round_trips() {
        let original = CoverageBits::from_indices(70, [1, 65]).unwrap();
        let other = CoverageBits::from_indices(70, [1, 2, 69]).unwrap();
        let mut bits = original.clone();
        bits.xor_in_place(&other);
        assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![2, 65, 69]);
        bits.xor_in_place(&other);
        assert_eq!(bits, original);
    }

    #[test]
    fn test_from_bools_matches_from_indices() {
        let flags = [true, false, false, true, true];
        assert_eq!(
            CoverageBits::from_bools(&flags),
            CoverageBits::from_indices(5, [0, 3, 4]).unwrap()
        );
    }

    #[test]
    fn test_word_count_at_boundaries() {
        assert_eq!(word_count(0), 0);
        assert_eq!(word_count(1), 1);
        assert_eq!(word_count(64), 1);
        assert_eq!(word_count(65), 2);
        assert_eq!(word_count(128), 2);
        let full = CoverageBits::from_indices(64, 0..64).unwrap();
        assert_eq!(full.popcount(), 64);
    }

    #[test]
    fn test_zero_length_vector() {
        let bits = CoverageBits::new(0);
        assert!(bits.is_empty());
        assert!(bits.none());
        assert_eq!(bits.popcount(), 0);
        assert_eq!(bits.iter_ones().count(), 0);
    }
}
