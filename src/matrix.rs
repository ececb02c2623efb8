//! Sparse and dense matrix types for term-document data.
//!
//! A term-document matrix is overwhelmingly sparse, so the vectorizers
//! produce a [`SparseMatrix`]: one sorted `(column, value)` list per document
//! row. The SVD reducer produces a [`DenseMatrix`]. The [`FeatureMatrix`]
//! trait is the seam that lets the classifier consume either representation
//! without caring which stage produced it.

use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};

/// A row-major sparse matrix.
///
/// Each row holds `(column, value)` pairs sorted by column index. Absent
/// entries are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseMatrix {
    rows: Vec<Vec<(usize, f64)>>,
    n_cols: usize,
}

impl SparseMatrix {
    /// Create a sparse matrix from per-row `(column, value)` pairs.
    ///
    /// Rows are sorted by column index on construction. A column index at or
    /// beyond `n_cols` is an error.
    pub fn from_rows(mut rows: Vec<Vec<(usize, f64)>>, n_cols: usize) -> Result<Self> {
        for (i, row) in rows.iter_mut().enumerate() {
            row.sort_unstable_by_key(|&(col, _)| col);
            if let Some(&(col, _)) = row.last()
                && col >= n_cols
            {
                return Err(PolarityError::invalid_argument(format!(
                    "row {i} references column {col}, but the matrix has {n_cols} columns"
                )));
            }
        }
        Ok(SparseMatrix { rows, n_cols })
    }

    /// An empty matrix with the given column count and no rows.
    pub fn empty(n_cols: usize) -> Self {
        SparseMatrix {
            rows: Vec::new(),
            n_cols,
        }
    }

    /// Matrix shape as `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.n_cols)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Total number of explicitly stored entries.
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }

    /// The `(column, value)` entries of a row, sorted by column.
    pub fn row(&self, i: usize) -> &[(usize, f64)] {
        &self.rows[i]
    }

    /// Value at `(row, col)`, zero when not stored.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row]
            .binary_search_by_key(&col, |&(c, _)| c)
            .map(|idx| self.rows[row][idx].1)
            .unwrap_or(0.0)
    }

    /// Materialize the matrix as dense rows. Intended for tests and small
    /// diagnostic output, not for large corpora.
    pub fn to_dense(&self) -> DenseMatrix {
        let mut data = vec![0.0; self.rows.len() * self.n_cols];
        for (i, row) in self.rows.iter().enumerate() {
            for &(col, value) in row {
                data[i * self.n_cols + col] = value;
            }
        }
        DenseMatrix::from_vec(data, self.rows.len(), self.n_cols)
            .expect("dense shape is derived from the sparse shape")
    }

    /// Multiply a dense column vector: `y = A x`.
    pub(crate) fn matvec(&self, x: &[f64]) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&(col, v)| v * x[col]).sum())
            .collect()
    }

    /// Multiply the transpose by a dense column vector: `y = Aᵀ x`.
    pub(crate) fn matvec_transposed(&self, x: &[f64]) -> Vec<f64> {
        let mut y = vec![0.0; self.n_cols];
        for (i, row) in self.rows.iter().enumerate() {
            for &(col, v) in row {
                y[col] += v * x[i];
            }
        }
        y
    }
}

/// A row-major dense matrix of `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl DenseMatrix {
    /// Create a dense matrix from row-major data.
    pub fn from_vec(data: Vec<f64>, n_rows: usize, n_cols: usize) -> Result<Self> {
        if data.len() != n_rows * n_cols {
            return Err(PolarityError::invalid_argument(format!(
                "data length {} does not match shape ({n_rows}, {n_cols})",
                data.len()
            )));
        }
        Ok(DenseMatrix {
            data,
            n_rows,
            n_cols,
        })
    }

    /// A zero matrix of the given shape.
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        DenseMatrix {
            data: vec![0.0; n_rows * n_cols],
            n_rows,
            n_cols,
        }
    }

    /// Matrix shape as `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// A row as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Mutable access to a row.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n_cols + col]
    }
}

/// Row-oriented access shared by sparse and dense feature matrices.
///
/// The classifier only ever needs two operations per row: a dot product with
/// its weight vector and a scaled accumulation into its gradient. Keeping
/// the seam this narrow lets sparse rows stay sparse through training.
pub trait FeatureMatrix {
    /// Number of rows (documents).
    fn n_rows(&self) -> usize;

    /// Number of columns (features).
    fn n_cols(&self) -> usize;

    /// Dot product of row `i` with a dense weight vector.
    fn row_dot(&self, i: usize, weights: &[f64]) -> f64;

    /// Accumulate `coef * row(i)` into `acc`.
    fn add_row_scaled(&self, i: usize, coef: f64, acc: &mut [f64]);
}

impl FeatureMatrix for SparseMatrix {
    fn n_rows(&self) -> usize {
        self.rows.len()
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn row_dot(&self, i: usize, weights: &[f64]) -> f64 {
        self.rows[i].iter().map(|&(col, v)| v * weights[col]).sum()
    }

    fn add_row_scaled(&self, i: usize, coef: f64, acc: &mut [f64]) {
        for &(col, v) in &self.rows[i] {
            acc[col] += coef * v;
        }
    }
}

impl FeatureMatrix for DenseMatrix {
    fn n_rows(&self) -> usize {
        self.n_rows
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn row_dot(&self, i: usize, weights: &[f64]) -> f64 {
        self.row(i).iter().zip(weights).map(|(a, b)| a * b).sum()
    }

    fn add_row_scaled(&self, i: usize, coef: f64, acc: &mut [f64]) {
        for (slot, v) in acc.iter_mut().zip(self.row(i)) {
            *slot += coef * v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_matrix_shape_and_get() {
        let m = SparseMatrix::from_rows(
            vec![vec![(0, 1.0), (2, 3.0)], vec![(1, 2.0)]],
            4,
        )
        .unwrap();

        assert_eq!(m.shape(), (2, 4));
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 1), 2.0);
    }

    #[test]
    fn test_sparse_matrix_sorts_rows() {
        let m = SparseMatrix::from_rows(vec![vec![(3, 1.0), (0, 2.0)]], 4).unwrap();
        assert_eq!(m.row(0), &[(0, 2.0), (3, 1.0)]);
    }

    #[test]
    fn test_sparse_matrix_rejects_out_of_range_column() {
        assert!(SparseMatrix::from_rows(vec![vec![(4, 1.0)]], 4).is_err());
    }

    #[test]
    fn test_sparse_to_dense() {
        let m = SparseMatrix::from_rows(vec![vec![(1, 5.0)], vec![]], 2).unwrap();
        let d = m.to_dense();
        assert_eq!(d.shape(), (2, 2));
        assert_eq!(d.row(0), &[0.0, 5.0]);
        assert_eq!(d.row(1), &[0.0, 0.0]);
    }

    #[test]
    fn test_matvec_and_transpose() {
        // [[1, 2], [0, 3]]
        let m =
            SparseMatrix::from_rows(vec![vec![(0, 1.0), (1, 2.0)], vec![(1, 3.0)]], 2).unwrap();

        assert_eq!(m.matvec(&[1.0, 1.0]), vec![3.0, 3.0]);
        assert_eq!(m.matvec_transposed(&[1.0, 1.0]), vec![1.0, 5.0]);
    }

    #[test]
    fn test_dense_matrix_rows() {
        let d = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(d.row(0), &[1.0, 2.0]);
        assert_eq!(d.row(1), &[3.0, 4.0]);
        assert_eq!(d.get(1, 0), 3.0);

        assert!(DenseMatrix::from_vec(vec![1.0], 2, 2).is_err());
    }

    #[test]
    fn test_feature_matrix_agreement() {
        let sparse =
            SparseMatrix::from_rows(vec![vec![(0, 1.0), (2, 2.0)], vec![(1, 4.0)]], 3).unwrap();
        let dense = sparse.to_dense();
        let w = [0.5, 1.5, 2.5];

        for i in 0..2 {
            assert_eq!(sparse.row_dot(i, &w), dense.row_dot(i, &w));

            let mut acc_s = vec![0.0; 3];
            let mut acc_d = vec![0.0; 3];
            sparse.add_row_scaled(i, 2.0, &mut acc_s);
            dense.add_row_scaled(i, 2.0, &mut acc_d);
            assert_eq!(acc_s, acc_d);
        }
    }
}
