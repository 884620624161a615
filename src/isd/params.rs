use crate::gf::{Gf2Matrix, Gf2Vector};
use crate::hash::{xof::Shake256Xof, Domain};
use super::error::{InstanceError, ParamError};

/// A validated syndrome decoding instance: find e with |e| = w and H·e = s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyndromeInstance {
    h: Gf2Matrix,
    s: Gf2Vector,
    w: usize,
}

impl SyndromeInstance {
    pub fn new(h: Gf2Matrix, s: Gf2Vector, w: usize) -> Result<Self, InstanceError> {
        if s.len() != h.row_count() {
            return Err(InstanceError::SyndromeLength { expected: h.row_count(), got: s.len() });
        }
        if w > h.col_count() {
            return Err(InstanceError::WeightTooLarge { n: h.col_count(), w });
        }
        Ok(Self { h, s, w })
    }

    /// Builds an instance from unchecked 0/1 rows. `n` is the declared column
    /// count, which is the only source of the width when `h_rows` is empty.
    pub fn from_raw(n: usize, h_rows: &[Vec<i64>], s: &[i64], w: i64) -> Result<Self, InstanceError> {
        let h = Gf2Matrix::from_bit_rows(n, h_rows)?;
        if s.len() != h.row_count() {
            return Err(InstanceError::SyndromeLength { expected: h.row_count(), got: s.len() });
        }
        let s = Gf2Vector::try_from_ints(s).map_err(InstanceError::NonBinarySyndrome)?;
        if w < 0 {
            return Err(InstanceError::NegativeWeight(w));
        }
        let w = usize::try_from(w).unwrap_or(usize::MAX);
        Self::new(h, s, w)
    }

    /// Code length n (columns of H).
    #[inline]
    pub fn n(&self) -> usize {
        self.h.col_count()
    }

    /// n - k (rows of H).
    #[inline]
    pub fn redundancy(&self) -> usize {
        self.h.row_count()
    }

    #[inline]
    pub fn h(&self) -> &Gf2Matrix {
        &self.h
    }

    #[inline]
    pub fn s(&self) -> &Gf2Vector {
        &self.s
    }

    #[inline]
    pub fn w(&self) -> usize {
        self.w
    }

    /// (w1, w2) = (⌊w/2⌋, w - ⌊w/2⌋)
    #[inline]
    pub fn split_weights(&self) -> (usize, usize) {
        let w1 = self.w / 2;
        (w1, self.w - w1)
    }

    pub fn syndrome_of(&self, e: &Gf2Vector) -> Gf2Vector {
        self.h.mul_vec(e)
    }

    /// true iff `e` has length n, weight w and H·e = s.
    pub fn is_solution(&self, e: &Gf2Vector) -> bool {
        e.len() == self.n() && e.weight() == self.w && self.syndrome_of(e) == self.s
    }
}

/// Random instance in systematic form H = [I_r | A], r = ⌊n/2⌋, with a random
/// syndrome and the target weight set slightly above the Gilbert–Varshamov distance.
pub struct SdExperimentParams {
    pub n: usize,
    pub seed: Vec<u8>,
}

impl SdExperimentParams {
    pub fn new(n: usize, seed: impl Into<Vec<u8>>) -> Self {
        Self { n, seed: seed.into() }
    }

    /// Seed bytes taken from the decimal form of `seed`.
    pub fn with_numeric_seed(n: usize, seed: u64) -> Self {
        Self::new(n, seed.to_string().into_bytes())
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        if self.n < 2 {
            return Err(ParamError::InvalidN(self.n));
        }
        Ok(())
    }

    #[inline]
    pub fn redundancy(&self) -> usize {
        self.n / 2
    }

    /// min(n, ⌈1.05 · d_GV⌉)
    pub fn target_weight(&self) -> usize {
        let d = gv_distance(self.n, self.redundancy());
        let w = (1.05 * d as f64).ceil() as usize;
        w.min(self.n)
    }

    pub fn generate(&self) -> Result<SyndromeInstance, ParamError> {
        self.validate()?;
        let n = self.n;
        let r = self.redundancy();
        let mut ctx_h = Shake256Xof::new(&self.seed, Domain::ParityCheck);
        let mut ctx_s = Shake256Xof::new(&self.seed, Domain::Syndrome);

        let mut h = Gf2Matrix::zero(r, n);
        for i in 0..r {
            h.set(i, i);
            for j in ctx_h.sample_vect(n - r).ones_indices() {
                h.set(i, r + j);
            }
        }
        let s = ctx_s.sample_vect(r);

        // w <= n by construction of target_weight
        Ok(SyndromeInstance { h, s, w: self.target_weight() })
    }
}

/// Smallest d with Σ_{i<d} C(n, i) > 2^(n - k).
///
/// Exact while the partial sums fit in a u128, compared in log space beyond that.
pub fn gv_distance(n: usize, k: usize) -> usize {
    let r = n - k.min(n);
    match gv_distance_exact(n as u64, r) {
        Some(d) => d,
        None => gv_distance_ln(n as u64, r),
    }
}

fn gv_distance_exact(n: u64, r: usize) -> Option<usize> {
    if r >= 127 {
        return None;
    }
    let bound = 1u128 << r;
    let mut sum: u128 = 0;
    let mut b: u128 = 1; // C(n, d)
    let mut d = 0u64;
    while sum <= bound && d <= n {
        sum = sum.checked_add(b)?;
        b = b.checked_mul(u128::from(n - d))? / u128::from(d + 1);
        d += 1;
    }
    Some(d as usize)
}

fn gv_distance_ln(n: u64, r: usize) -> usize {
    let bound = r as f64 * std::f64::consts::LN_2;
    let mut ln_sum = f64::NEG_INFINITY;
    let mut ln_b = 0f64; // ln C(n, d)
    let mut d = 0u64;
    while ln_sum <= bound && d <= n {
        ln_sum = ln_add_exp(ln_sum, ln_b);
        ln_b += ((n - d) as f64).ln() - ((d + 1) as f64).ln();
        d += 1;
    }
    d as usize
}

/// ln(e^a + e^b)
fn ln_add_exp(a: f64, b: f64) -> f64 {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    if lo == f64::NEG_INFINITY {
        return hi;
    }
    hi + (lo - hi).exp().ln_1p()
}
