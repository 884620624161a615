use crate::gf::Gf2Vector;
use rand::Rng;
use std::ops::ControlFlow;

// combinations

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

/// Every k-subset of `0..n` as an ascending support, in lexicographic order.
///
/// Advancing bumps the rightmost position that can still grow and resets the
/// positions to its right to consecutive values. `k = 0` yields one empty
/// support, `k > n` yields nothing.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    idx: Vec<usize>,
    state: State,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            idx: (0..k).collect(),
            state: State::Fresh,
        }
    }

    /// Lending form of `next`: the returned slice is only valid until the next call.
    pub fn next_support(&mut self) -> Option<&[usize]> {
        let n = self.n;
        let k = self.idx.len();
        match self.state {
            State::Done => return None,
            State::Fresh => {
                if k > n {
                    self.state = State::Done;
                    return None;
                }
                self.state = State::Running;
                return Some(&self.idx);
            }
            State::Running => {}
        }

        let mut i = k;
        loop {
            if i == 0 {
                self.state = State::Done;
                return None;
            }
            i -= 1;
            if self.idx[i] < i + n - k {
                break;
            }
        }
        self.idx[i] += 1;
        for j in i + 1..k {
            self.idx[j] = self.idx[j - 1] + 1;
        }
        Some(&self.idx)
    }

    /// Same enumeration as full-length bit vectors.
    pub fn vectors(self) -> CombinationVectors {
        CombinationVectors { inner: self }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_support().map(<[usize]>::to_vec)
    }
}

pub struct CombinationVectors {
    inner: Combinations,
}

impl Iterator for CombinationVectors {
    type Item = Gf2Vector;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.inner.n;
        self.inner.next_support().map(|s| Gf2Vector::from_indices(n, s))
    }
}

/// All length-`n` vectors of weight `k`.
pub fn combinations(n: usize, k: usize) -> CombinationVectors {
    Combinations::new(n, k).vectors()
}

/// Enumerate all k-combinations from [0..n),
/// calling `f` for each combination.
pub fn for_each_combination_cf(
    n: usize,
    k: usize,
    mut f: impl FnMut(&[usize]) -> ControlFlow<()>,
) -> ControlFlow<()> {
    let mut combs = Combinations::new(n, k);
    while let Some(support) = combs.next_support() {
        if let ControlFlow::Break(()) = f(support) {
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}

// column split

/// Two-way partition of the columns `0..n`, each half ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSplit {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl ColumnSplit {
    /// `left` as given, `right` is its complement in `0..n`.
    pub fn from_left(n: usize, left: &[usize]) -> Self {
        let mut in_left = vec![false; n];
        for &c in left {
            if c < n {
                in_left[c] = true;
            }
        }
        let left = (0..n).filter(|&c| in_left[c]).collect();
        let right = (0..n).filter(|&c| !in_left[c]).collect();
        Self { left, right }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Disjoint halves covering exactly `0..n`.
    pub fn is_partition_of(&self, n: usize) -> bool {
        let mut seen = vec![false; n];
        for &c in self.left.iter().chain(&self.right) {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        seen.into_iter().all(|b| b)
    }
}

/// Partial Fisher-Yates: moves a uniform random k-subset of `perm` to its front.
#[inline]
pub fn sample_cols<R: Rng>(rng: &mut R, perm: &mut [usize], k: usize) {
    let total = perm.len();
    debug_assert!(k <= total);
    for i in 0..k {
        let j = rng.gen_range(i..total);
        perm.swap(i, j);
    }
}

/// Uniformly random split with ⌊n/2⌋ columns on the left.
pub fn random_split<R: Rng>(n: usize, rng: &mut R) -> ColumnSplit {
    let half = n / 2;
    let mut perm: Vec<usize> = (0..n).collect();
    sample_cols(rng, &mut perm, half);
    let mut left = perm[..half].to_vec();
    let mut right = perm[half..].to_vec();
    left.sort_unstable();
    right.sort_unstable();
    ColumnSplit { left, right }
}

// attempt budget

/// C(n, k), or None if it does not fit in a u128.
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc = C(n, i) here, so the division is exact
        acc = acc.checked_mul((n - i) as u128)? / (i + 1) as u128;
    }
    Some(acc)
}

/// ln C(n, k); -inf when k > n.
pub fn ln_binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    (0..k).map(|i| ((n - i) as f64).ln() - ((i + 1) as f64).ln()).sum()
}

/// Heuristic probability that a random split puts ⌊w/2⌋ error bits on the
/// left: P = C(⌊n/2⌋, ⌊w/2⌋)² / C(n, w).
pub fn split_probability(n: usize, w: usize) -> f64 {
    let (n, w) = (n as u64, w as u64);
    let (half, w1) = (n / 2, w / 2);
    if let (Some(c), Some(total)) = (binomial(half, w1), binomial(n, w)) {
        if let Some(c2) = c.checked_mul(c) {
            if total == 0 {
                return 0.0;
            }
            return c2 as f64 / total as f64;
        }
    }
    (2.0 * ln_binomial(half, w1) - ln_binomial(n, w)).exp()
}

/// ⌈1 / P⌉ attempts, at least 1, saturating at u64::MAX.
///
/// Evaluated as ⌈C(n, w) / C(⌊n/2⌋, w1)²⌉, exactly whenever the binomials fit in u128.
pub fn attempt_budget(n: usize, w: usize) -> u64 {
    let (n, w) = (n as u64, w as u64);
    let (half, w1) = (n / 2, w / 2);
    if let (Some(c), Some(total)) = (binomial(half, w1), binomial(n, w)) {
        if let Some(c2) = c.checked_mul(c) {
            if c2 == 0 {
                return u64::MAX;
            }
            let q = total / c2 + u128::from(total % c2 != 0);
            return u64::try_from(q).unwrap_or(u64::MAX).max(1);
        }
    }
    let ratio = (ln_binomial(n, w) - 2.0 * ln_binomial(half, w1)).exp().ceil();
    // float -> int casts saturate
    (ratio as u64).max(1)
}

/// Number of left patterns the candidate table holds: C(⌊n/2⌋, ⌊w/2⌋).
pub fn table_entries(n: usize, w: usize) -> u128 {
    binomial((n / 2) as u64, (w / 2) as u64).unwrap_or(u128::MAX)
}
