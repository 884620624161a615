pub mod error;
pub mod params;
pub mod attack;
pub mod solutions;
pub mod algorithm;
pub use error::*;
pub use params::{SdExperimentParams, SyndromeInstance};
pub use attack::{Attack, AttemptObserver, AttemptProgress, CancelToken, LogObserver, NoopObserver};
pub use solutions::SolutionSet;
pub use algorithm::{
    birthday::{Birthday, BirthdayMatcher, StopPolicy},
    brute_force::BruteForce,
    helper::{attempt_budget, combinations, random_split, split_probability, ColumnSplit, Combinations},
};
