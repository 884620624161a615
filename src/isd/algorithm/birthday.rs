//! Birthday (meet-in-the-middle) decoding.
//!
//! Each attempt splits the columns of H at random into a left half of ⌊n/2⌋
//! columns and a right half, then looks for e = (e1, e2) with |e1| = ⌊w/2⌋,
//! |e2| = w - ⌊w/2⌋ and H1·e1 = H2·e2 + s. All left partial syndromes go into a
//! hash table first; each right candidate then probes it once.
//!
//! Memory, not time, is what limits this attack: the table holds
//! C(⌊n/2⌋, ⌊w/2⌋) patterns per attempt. `Birthday::with_max_table_entries`
//! refuses instances above a chosen bound.

use super::*;
use crate::gf::{Gf2Construct, Gf2Matrix, Gf2Vector};
use crate::isd::attack::{AttemptObserver, AttemptProgress, CancelToken, NoopObserver};
use crate::isd::params::SyndromeInstance;
use crate::isd::solutions::SolutionSet;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::ops::ControlFlow;

/// When the attempt loop stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopPolicy {
    /// Run all ⌈1/P⌉ attempts and collect every solution met on the way.
    Exhaustive,
    /// Return the first solution, or `NotFound` after `max_attempts`.
    FirstMatch { max_attempts: u64 },
}

impl StopPolicy {
    fn budget(&self, n: usize, w: usize) -> u64 {
        match *self {
            StopPolicy::Exhaustive => attempt_budget(n, w),
            StopPolicy::FirstMatch { max_attempts } => max_attempts,
        }
    }

    #[inline]
    fn stops_on_accept(&self) -> bool {
        matches!(self, StopPolicy::FirstMatch { .. })
    }
}

/// Packed partial syndrome, ⌈(n-k)/64⌉ words.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SyndromeKey(Box<[u64]>);

impl Borrow<[u64]> for SyndromeKey {
    fn borrow(&self) -> &[u64] {
        &self.0
    }
}

/// Left-half patterns bucketed by partial syndrome. One per attempt.
struct CandidateTable {
    w1: usize,
    // supports of all stored patterns back to back, w1 entries each
    supports: Vec<usize>,
    buckets: HashMap<SyndromeKey, Vec<usize>>,
}

impl CandidateTable {
    fn new(w1: usize) -> Self {
        Self {
            w1,
            supports: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    fn insert(&mut self, key: &[u64], support: &[usize]) {
        debug_assert_eq!(support.len(), self.w1);
        let id = self.len();
        self.supports.extend_from_slice(support);
        match self.buckets.get_mut(key) {
            Some(bucket) => bucket.push(id),
            None => {
                self.buckets.insert(SyndromeKey(Box::from(key)), vec![id]);
            }
        }
    }

    fn bucket(&self, key: &[u64]) -> Option<&[usize]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    #[inline]
    fn support(&self, id: usize) -> &[usize] {
        &self.supports[id * self.w1..(id + 1) * self.w1]
    }

    /// Number of stored patterns.
    fn len(&self) -> usize {
        if self.w1 == 0 {
            self.buckets.values().map(Vec::len).sum()
        } else {
            self.supports.len() / self.w1
        }
    }
}

/// key ^= XOR of the selected rows of `cols`.
#[inline]
fn xor_rows_into(cols: &Gf2Matrix, support: &[usize], key: &mut [u64]) {
    for &j in support {
        for (k, w) in key.iter_mut().zip(cols.row(j).words()) {
            *k ^= *w;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Halt {
    /// The accept callback asked to stop.
    Satisfied,
    Cancelled,
}

/// Matches the two halves of one column split against each other.
pub struct BirthdayMatcher<'a> {
    instance: &'a SyndromeInstance,
    // H^T: row j is column j of H
    columns: Gf2Matrix,
}

impl<'a> BirthdayMatcher<'a> {
    pub fn new(instance: &'a SyndromeInstance) -> Self {
        Self {
            instance,
            columns: instance.h().transpose(),
        }
    }

    /// Every accepted error vector reachable from `split`, in discovery order.
    pub fn match_split(&self, split: &ColumnSplit) -> Vec<Gf2Vector> {
        let mut out = Vec::new();
        let _ = self.run(split, &CancelToken::new(), |e| {
            out.push(e);
            ControlFlow::Continue(())
        });
        out
    }

    pub(crate) fn run(
        &self,
        split: &ColumnSplit,
        cancel: &CancelToken,
        mut accept: impl FnMut(Gf2Vector) -> ControlFlow<()>,
    ) -> ControlFlow<Halt> {
        let inst = self.instance;
        let (n, w) = (inst.n(), inst.w());
        let (w1, w2) = inst.split_weights();
        debug_assert!(split.is_partition_of(n), "split is not a partition of 0..n");

        // transposed sub-matrices: row i is column split.left[i] (split.right[i]) of H
        let left_sub = self.columns.select_rows(&split.left);
        let right_sub = self.columns.select_rows(&split.right);
        let mut key = vec![0u64; Gf2Vector::word_len(inst.redundancy())];

        let mut table = CandidateTable::new(w1);
        let mut left = Combinations::new(split.left.len(), w1);
        while let Some(e1) = left.next_support() {
            if cancel.is_cancelled() {
                return ControlFlow::Break(Halt::Cancelled);
            }
            key.fill(0);
            xor_rows_into(&left_sub, e1, &mut key);
            table.insert(&key, e1);
        }
        log::trace!("table: {} patterns in {} buckets", table.len(), table.buckets.len());

        let mut right = Combinations::new(split.right.len(), w2);
        while let Some(e2) = right.next_support() {
            if cancel.is_cancelled() {
                return ControlFlow::Break(Halt::Cancelled);
            }
            key.copy_from_slice(inst.s().words());
            xor_rows_into(&right_sub, e2, &mut key);
            let Some(bucket) = table.bucket(&key) else {
                continue;
            };
            for &id in bucket {
                let mut e = Gf2Vector::zero_with_len(n);
                for &p in table.support(id) {
                    e.set(split.left[p]);
                }
                for &p in e2 {
                    e.set(split.right[p]);
                }
                if e.weight() != w || !inst.is_solution(&e) {
                    continue;
                }
                if let ControlFlow::Break(()) = accept(e) {
                    return ControlFlow::Break(Halt::Satisfied);
                }
            }
        }
        ControlFlow::Continue(())
    }
}

pub struct Birthday {
    seed: Option<u64>,
    attempt_limit: Option<u64>,
    max_table_entries: Option<u64>,
    first_match_attempts: u64,
    cancel: CancelToken,
}

impl Birthday {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the exhaustive budget. Not applied to `FirstMatch`, which has its own cap.
    pub fn with_attempt_limit(mut self, limit: u64) -> Self {
        self.attempt_limit = Some(limit);
        self
    }

    /// Refuse instances whose candidate table would exceed `limit` patterns;
    /// `None` disables the check.
    pub fn with_max_table_entries(mut self, limit: Option<u64>) -> Self {
        self.max_table_entries = limit;
        self
    }

    /// Attempt cap used by [`Attack::solve`].
    pub fn with_first_match_attempts(mut self, attempts: u64) -> Self {
        self.first_match_attempts = attempts;
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    fn rng(&self) -> StdRng {
        let seed = match self.seed {
            Some(v) => v,
            None => OsRng.next_u64(),
        };
        StdRng::seed_from_u64(seed)
    }

    /// Runs the attempt loop under `policy`, reporting each finished attempt to `observer`.
    pub fn run<O: AttemptObserver + ?Sized>(
        &self,
        instance: &SyndromeInstance,
        policy: StopPolicy,
        observer: &mut O,
    ) -> Result<SolutionSet, AttackError> {
        let (n, w) = (instance.n(), instance.w());
        let entries = table_entries(n, w);
        if let Some(limit) = self.max_table_entries {
            if entries > u128::from(limit) {
                return Err(AttackError::TableTooLarge { entries, limit: u128::from(limit) });
            }
        }

        let mut budget = policy.budget(n, w);
        if let (StopPolicy::Exhaustive, Some(limit)) = (policy, self.attempt_limit) {
            if budget > limit {
                log::warn!("attempt budget {budget} capped at {limit}");
                budget = limit;
            }
        }
        let stop_early = policy.stops_on_accept();
        log::debug!(
            "n={n} n-k={} w={w} P={:.6e} attempts={budget} table={entries}",
            instance.redundancy(),
            split_probability(n, w),
        );

        let mut rng = self.rng();
        let matcher = BirthdayMatcher::new(instance);
        let mut solutions = SolutionSet::new();

        for attempt in 0..budget {
            if self.cancel.is_cancelled() {
                return Err(AttackError::Cancelled { attempts: attempt });
            }
            let split = random_split(n, &mut rng);
            let flow = matcher.run(&split, &self.cancel, |e| {
                solutions.insert(e);
                if stop_early {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
            if let ControlFlow::Break(Halt::Cancelled) = flow {
                return Err(AttackError::Cancelled { attempts: attempt });
            }

            log::trace!("attempt {} done, {} unique solutions", attempt + 1, solutions.len());
            observer.on_attempt(AttemptProgress {
                attempt: attempt + 1,
                budget,
                solutions: solutions.len(),
            });
            if stop_early && !solutions.is_empty() {
                log::debug!("solution found in attempt {}", attempt + 1);
                break;
            }
        }

        Ok(solutions)
    }

    /// Exhaustive policy: every solution found in ⌈1/P⌉ attempts, canonical order.
    pub fn decode_all(&self, instance: &SyndromeInstance) -> Result<Vec<Gf2Vector>, AttackError> {
        self.run(instance, StopPolicy::Exhaustive, &mut NoopObserver)
            .map(SolutionSet::into_vec)
    }

    /// Early-exit policy: the first solution within `max_attempts`, else `NotFound`.
    pub fn decode_first(
        &self,
        instance: &SyndromeInstance,
        max_attempts: u64,
    ) -> Result<Gf2Vector, AttackError> {
        self.run(instance, StopPolicy::FirstMatch { max_attempts }, &mut NoopObserver)?
            .into_iter()
            .next()
            .ok_or(AttackError::NotFound { attempts: max_attempts })
    }
}

impl Default for Birthday {
    fn default() -> Self {
        Self {
            seed: None,
            attempt_limit: None,
            max_table_entries: Some(1 << 27),
            first_match_attempts: 10_000,
            cancel: CancelToken::new(),
        }
    }
}

impl Attack for Birthday {
    fn name(&self) -> &'static str {
        "Birthday"
    }

    fn solve(&self, instance: &SyndromeInstance) -> Result<Option<Gf2Vector>, AttackError> {
        match self.decode_first(instance, self.first_match_attempts) {
            Ok(e) => Ok(Some(e)),
            Err(AttackError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isd::algorithm::helper::ColumnSplit;

    fn instance() -> SyndromeInstance {
        SyndromeInstance::from_raw(
            6,
            &[
                vec![1, 0, 0, 1, 1, 0],
                vec![0, 1, 0, 1, 0, 1],
                vec![0, 0, 1, 0, 1, 1],
            ],
            &[1, 0, 1],
            2,
        )
        .unwrap()
    }

    #[test]
    fn cancelled_token_stops_left_pass() {
        let inst = instance();
        let matcher = BirthdayMatcher::new(&inst);
        let split = ColumnSplit::from_left(6, &[0, 1, 3]);
        let cancel = CancelToken::new();
        cancel.cancel();

        let mut accepted = 0;
        let flow = matcher.run(&split, &cancel, |_| {
            accepted += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(flow, ControlFlow::Break(Halt::Cancelled));
        assert_eq!(accepted, 0);
    }

    #[test]
    fn cancel_during_right_pass() {
        let inst = instance();
        let matcher = BirthdayMatcher::new(&inst);
        // right = {2, 4, 5}; (0, 2) matches on the first right pattern
        let split = ColumnSplit::from_left(6, &[0, 1, 3]);
        let cancel = CancelToken::new();

        let mut accepted = Vec::new();
        let flow = matcher.run(&split, &cancel, |e| {
            accepted.push(e);
            cancel.cancel();
            ControlFlow::Continue(())
        });
        assert_eq!(flow, ControlFlow::Break(Halt::Cancelled));
        assert_eq!(accepted, vec![Gf2Vector::from_indices(6, &[0, 2])]);
    }

    #[test]
    fn uncancelled_run_completes() {
        let inst = instance();
        let matcher = BirthdayMatcher::new(&inst);
        let split = ColumnSplit::from_left(6, &[0, 1, 3]);
        let flow = matcher.run(&split, &CancelToken::new(), |_| ControlFlow::Continue(()));
        assert_eq!(flow, ControlFlow::Continue(()));
    }
}
