#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstanceError {
    #[error("ragged parity-check matrix: row {row} has {got} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },
    #[error("syndrome has length {got}, H has {expected} rows")]
    SyndromeLength { expected: usize, got: usize },
    #[error("weight must be >= 0, got w={0}")]
    NegativeWeight(i64),
    #[error("weight must be <= n, got w={w}, n={n}")]
    WeightTooLarge { n: usize, w: usize },
    #[error("H[{row}][{col}] is not 0 or 1")]
    NonBinaryMatrix { row: usize, col: usize },
    #[error("s[{0}] is not 0 or 1")]
    NonBinarySyndrome(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("invalid n (must be >= 2): {0}")]
    InvalidN(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InstanceError),
    #[error("no solution found in {attempts} attempts")]
    NotFound { attempts: u64 },
    #[error("candidate table would hold {entries} patterns, limit is {limit}")]
    TableTooLarge { entries: u128, limit: u128 },
    #[error("attack cancelled after {attempts} completed attempts")]
    Cancelled { attempts: u64 },
}
