use super::gf2::{Gf2, Gf2Construct};
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Gf2Vector {
    n: usize,        // number of bits
    words: Vec<u64>, // bit-packed, LSB-first
}

impl Gf2Vector {
    #[inline]
    pub fn word_len(n: usize) -> usize {
        (n + 63) / 64
    }
    #[inline]
    fn last_mask(n: usize) -> u64 {
        let r = n & 63; // n % 64
        if r == 0 { !0u64 } else { (1u64 << r) - 1 }
    }
    #[inline]
    fn mask_tail(&mut self) {
        if let Some(last) = self.words.last_mut() {
            *last &= Self::last_mask(self.n);
        }
    }

    /// Build from set indices (e.g. n=4, [0,2] -> 1010).
    /// Indices outside `0..n` are ignored, repeated indices cancel.
    pub fn from_indices(n: usize, idxs: &[usize]) -> Self {
        let mut words = vec![0u64; Self::word_len(n)];
        for &i in idxs {
            if i >= n {
                continue;
            }
            words[i / 64] ^= 1u64 << (i & 63);
        }
        let mut obj = Self { n, words };
        obj.mask_tail();
        obj
    }

    pub fn from_bits(bits: &[bool]) -> Self {
        let mut out = Self::zero_with_len(bits.len());
        for (i, &b) in bits.iter().enumerate() {
            if b {
                out.set(i);
            }
        }
        out
    }

    /// Build from 0/1 entries. Returns the position of the first entry that is
    /// neither 0 nor 1.
    pub fn try_from_ints(bits: &[i64]) -> Result<Self, usize> {
        let mut out = Self::zero_with_len(bits.len());
        for (i, &b) in bits.iter().enumerate() {
            match b {
                0 => {}
                1 => out.set(i),
                _ => return Err(i),
            }
        }
        Ok(out)
    }

    /// Build from packed words; bits beyond `n` are dropped.
    pub fn from_words(n: usize, mut words: Vec<u64>) -> Self {
        words.resize(Self::word_len(n), 0);
        let mut obj = Self { n, words };
        obj.mask_tail();
        obj
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Hamming weight.
    pub fn weight(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    pub fn get(&self, i: usize) -> bool {
        if i >= self.n {
            return false;
        }
        (self.words[i / 64] >> (i & 63)) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, i: usize) {
        if i >= self.n {
            return;
        }
        self.words[i / 64] |= 1u64 << (i & 63);
    }

    #[inline]
    pub fn xor_in_place(&mut self, other: &Self) {
        assert_eq!(self.n, other.n, "length mismatch");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a ^= *b;
        }
        self.mask_tail();
    }

    /// Inner product over GF(2): parity of `self AND other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> bool {
        assert_eq!(self.n, other.n, "length mismatch");
        let ones: u32 = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones())
            .sum();
        ones & 1 == 1
    }

    /// Indices of set bits, ascending.
    pub fn ones_indices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.weight());
        for (wi, mut w) in self.words.iter().copied().enumerate() {
            while w != 0 {
                let b = w.trailing_zeros() as usize;
                out.push(wi * 64 + b);
                w &= w - 1;
            }
        }
        out
    }

    /// Bits separated by `sep`, e.g. `"1 0 1"`.
    pub fn to_bit_string(&self, sep: &str) -> String {
        let bits: Vec<&str> = (0..self.n).map(|i| if self.get(i) { "1" } else { "0" }).collect();
        bits.join(sep)
    }
}

impl Gf2 for Gf2Vector {
    fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.xor_in_place(other);
        out
    }

    fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }
}

impl Gf2Construct for Gf2Vector {
    fn zero_with_len(n: usize) -> Self {
        Self {
            n,
            words: vec![0u64; Self::word_len(n)],
        }
    }
}

/// Lexicographic on the bit sequence: shorter vectors first, then the first
/// differing position decides with 0 < 1.
impl Ord for Gf2Vector {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.n.cmp(&other.n) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.words.iter().zip(&other.words) {
            let diff = a ^ b;
            if diff != 0 {
                let bit = diff.trailing_zeros();
                return if (a >> bit) & 1 == 0 {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Gf2Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Gf2Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // {:#}
        if f.alternate() {
            write!(f, "Gf2Vector(n={}, words=[", self.n)?;
            for (i, w) in self.words.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:#018x}", w)?;
            }
            return write!(f, "])");
        }
        for i in 0..self.n {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
