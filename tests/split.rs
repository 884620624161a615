use isd_birthday::{random_split, ColumnSplit};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

#[test]
fn seeded_split_is_reproducible() {
    let a = random_split(50, &mut StdRng::seed_from_u64(9));
    let b = random_split(50, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn tiny_sizes() {
    let mut rng = StdRng::seed_from_u64(0);
    let s = random_split(0, &mut rng);
    assert!(s.left.is_empty() && s.right.is_empty());
    let s = random_split(1, &mut rng);
    assert!(s.left.is_empty());
    assert_eq!(s.right, vec![0]);
}

#[test]
fn every_partition_is_reachable() {
    // C(4, 2) = 6 possible left halves
    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen: HashMap<Vec<usize>, usize> = HashMap::new();
    for _ in 0..600 {
        *seen.entry(random_split(4, &mut rng).left).or_default() += 1;
    }
    assert_eq!(seen.len(), 6);
    assert!(seen.values().all(|&c| c > 50), "{seen:?}");
}

#[test]
fn from_left_builds_complement() {
    let s = ColumnSplit::from_left(7, &[5, 1, 2]);
    assert_eq!(s.left, vec![1, 2, 5]);
    assert_eq!(s.right, vec![0, 3, 4, 6]);
    assert!(s.is_partition_of(7));
    assert!(!s.is_partition_of(8));
}

proptest! {
    #[test]
    fn split_is_a_balanced_partition(n in 0usize..300, seed in any::<u64>()) {
        let s = random_split(n, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(s.left.len(), n / 2);
        prop_assert_eq!(s.right.len(), n - n / 2);
        prop_assert!(s.is_partition_of(n));
        prop_assert!(s.left.windows(2).all(|p| p[0] < p[1]));
        prop_assert!(s.right.windows(2).all(|p| p[0] < p[1]));
    }
}
