pub mod gf2;
pub mod matrix;
pub mod vector;

pub use gf2::*;
pub use matrix::Gf2Matrix;
pub use vector::Gf2Vector;

/// result[i] = XOR_j (vector[j] AND matrix[i][j]), i.e. `matrix · vector`.
///
/// Panics if `vector.len() != matrix.col_count()`.
pub fn multiply(vector: &Gf2Vector, matrix: &Gf2Matrix) -> Gf2Vector {
    matrix.mul_vec(vector)
}

/// Hamming weight.
pub fn weight(vector: &Gf2Vector) -> usize {
    vector.weight()
}
