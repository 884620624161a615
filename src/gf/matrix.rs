use super::gf2::Gf2Construct;
use super::vector::Gf2Vector;
use crate::isd::error::InstanceError;

/// Row-major bit matrix. The column count is stored explicitly so a matrix
/// with zero rows still knows its width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gf2Matrix {
    cols: usize,
    rows: Vec<Gf2Vector>,
}

impl Gf2Matrix {
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            rows: (0..rows).map(|_| Gf2Vector::zero_with_len(cols)).collect(),
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n, n);
        for i in 0..n {
            m.set(i, i);
        }
        m
    }

    /// Fails with `RaggedRow` if any row is not `cols` bits long.
    pub fn from_rows(cols: usize, rows: Vec<Gf2Vector>) -> Result<Self, InstanceError> {
        for (row, r) in rows.iter().enumerate() {
            if r.len() != cols {
                return Err(InstanceError::RaggedRow { row, expected: cols, got: r.len() });
            }
        }
        Ok(Self { cols, rows })
    }

    /// Rows of 0/1 entries, each exactly `cols` long.
    pub fn from_bit_rows(cols: usize, rows: &[Vec<i64>]) -> Result<Self, InstanceError> {
        let mut out = Vec::with_capacity(rows.len());
        for (row, bits) in rows.iter().enumerate() {
            if bits.len() != cols {
                return Err(InstanceError::RaggedRow { row, expected: cols, got: bits.len() });
            }
            let v = Gf2Vector::try_from_ints(bits)
                .map_err(|col| InstanceError::NonBinaryMatrix { row, col })?;
            out.push(v);
        }
        Ok(Self { cols, rows: out })
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn col_count(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> &[Gf2Vector] {
        &self.rows
    }

    #[inline]
    pub fn row(&self, i: usize) -> &Gf2Vector {
        &self.rows[i]
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> bool {
        self.rows[r].get(c)
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize) {
        self.rows[r].set(c)
    }

    /// `self · v`, one parity per row.
    pub fn mul_vec(&self, v: &Gf2Vector) -> Gf2Vector {
        assert_eq!(v.len(), self.cols, "vector length != column count");
        let mut out = Gf2Vector::zero_with_len(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            if row.dot(v) {
                out.set(i);
            }
        }
        out
    }

    /// Sub-matrix made of the given columns, in the given order. Row order is kept.
    pub fn select_columns(&self, cols: &[usize]) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut out = Gf2Vector::zero_with_len(cols.len());
                for (k, &c) in cols.iter().enumerate() {
                    if row.get(c) {
                        out.set(k);
                    }
                }
                out
            })
            .collect();
        Self { cols: cols.len(), rows }
    }

    /// Sub-matrix made of the given rows, in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        Self {
            cols: self.cols,
            rows: rows.iter().map(|&r| self.rows[r].clone()).collect(),
        }
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::zero(self.cols, self.rows.len());
        for (r, row) in self.rows.iter().enumerate() {
            for c in row.ones_indices() {
                out.set(c, r);
            }
        }
        out
    }
}
