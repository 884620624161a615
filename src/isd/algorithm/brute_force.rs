use super::{Attack, AttackError, Combinations};
use crate::gf::Gf2Vector;
use crate::isd::params::SyndromeInstance;
use crate::isd::solutions::SolutionSet;

/// Tries every weight-w vector in combination order. Exact, exponential.
pub struct BruteForce {
    pub max_iters: Option<u64>,
}

impl BruteForce {
    pub fn new(max_iters: Option<u64>) -> Self {
        Self { max_iters }
    }

    /// Every solution among the first `max_iters` candidates (all of them if uncapped).
    pub fn solve_all(&self, instance: &SyndromeInstance) -> SolutionSet {
        let mut out = SolutionSet::new();
        self.scan(instance, |e| {
            out.insert(e);
            false
        });
        out
    }

    /// Calls `found` for each solution until it returns true.
    fn scan(&self, instance: &SyndromeInstance, mut found: impl FnMut(Gf2Vector) -> bool) {
        let n = instance.n();
        let mut iters: u64 = 0;
        let mut comb = Combinations::new(n, instance.w());

        while let Some(support) = comb.next_support() {
            if let Some(cap) = self.max_iters {
                if iters >= cap {
                    return;
                }
            }
            iters += 1;

            let e = Gf2Vector::from_indices(n, support);
            if instance.is_solution(&e) && found(e) {
                return;
            }
        }
    }
}

impl Attack for BruteForce {
    fn name(&self) -> &'static str {
        "Brute Force"
    }

    fn solve(&self, instance: &SyndromeInstance) -> Result<Option<Gf2Vector>, AttackError> {
        let mut answer = None;
        self.scan(instance, |e| {
            answer = Some(e);
            true
        });
        Ok(answer)
    }
}
