//! Truncated singular value decomposition for dimensionality reduction.
//!
//! [`TruncatedSvd`] projects a sparse term-document matrix onto its top-k
//! right-singular vectors, producing a dense `(n_documents × k)`
//! representation that preserves maximal variance at rank k.
//!
//! The decomposition is computed by power iteration with deflation on the
//! implicit Gram matrix `AᵀA`: each component is extracted by repeatedly
//! applying `v ← Aᵀ(A v)` while orthogonalizing against the components
//! already found. The matrix is only ever touched through sparse
//! matrix-vector products, so the term-document matrix stays sparse
//! throughout.
//!
//! When the matrix has fewer than k non-trivial singular directions the
//! remaining components are zero vectors; the transform still returns a
//! well-formed `(n × k)` matrix.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};
use crate::matrix::{DenseMatrix, SparseMatrix};

/// Directions with residual norm below this are treated as rank-exhausted.
const RANK_EPSILON: f64 = 1e-10;

/// Configuration for the truncated SVD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruncatedSvdConfig {
    /// Number of power iterations per component.
    pub n_iter: usize,
    /// Relative change in the iterate below which iteration stops early.
    pub tolerance: f64,
    /// Seed for the random initialization; `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for TruncatedSvdConfig {
    fn default() -> Self {
        TruncatedSvdConfig {
            n_iter: 100,
            tolerance: 1e-9,
            seed: None,
        }
    }
}

/// A fitted rank-k projection of a term-document matrix.
#[derive(Debug, Clone)]
pub struct TruncatedSvd {
    /// Right-singular vectors, one row per component (k × n_features).
    components: DenseMatrix,
    /// Singular values in extraction order.
    singular_values: Vec<f64>,
    n_features: usize,
}

impl TruncatedSvd {
    /// Fit a rank-k decomposition of the given matrix.
    pub fn fit(matrix: &SparseMatrix, k: usize, config: &TruncatedSvdConfig) -> Result<Self> {
        if k == 0 {
            return Err(PolarityError::invalid_argument(
                "number of components must be at least 1",
            ));
        }
        if matrix.n_rows() == 0 {
            return Err(PolarityError::invalid_argument(
                "cannot fit SVD on a matrix with no rows",
            ));
        }

        let n_features = matrix.n_cols();
        let mut components: Vec<Vec<f64>> = Vec::with_capacity(k);
        let mut singular_values = Vec::with_capacity(k);

        match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Self::extract_components(
                    matrix,
                    k,
                    config,
                    &mut rng,
                    &mut components,
                    &mut singular_values,
                );
            }
            None => {
                let mut rng = rand::rng();
                Self::extract_components(
                    matrix,
                    k,
                    config,
                    &mut rng,
                    &mut components,
                    &mut singular_values,
                );
            }
        }

        let data: Vec<f64> = components.into_iter().flatten().collect();
        Ok(TruncatedSvd {
            components: DenseMatrix::from_vec(data, k, n_features)?,
            singular_values,
            n_features,
        })
    }

    fn extract_components<R: Rng>(
        matrix: &SparseMatrix,
        k: usize,
        config: &TruncatedSvdConfig,
        rng: &mut R,
        components: &mut Vec<Vec<f64>>,
        singular_values: &mut Vec<f64>,
    ) {
        let n_features = matrix.n_cols();

        for _ in 0..k {
            let mut v: Vec<f64> = (0..n_features).map(|_| rng.random_range(-1.0..1.0)).collect();
            orthogonalize(&mut v, components);

            if normalize(&mut v) < RANK_EPSILON {
                // Rank exhausted; pad with a zero component.
                components.push(vec![0.0; n_features]);
                singular_values.push(0.0);
                continue;
            }

            let mut exhausted = false;
            for _ in 0..config.n_iter {
                // One step of v ← Aᵀ(A v) on the implicit Gram matrix.
                let mut w = matrix.matvec_transposed(&matrix.matvec(&v));
                orthogonalize(&mut w, components);

                if normalize(&mut w) < RANK_EPSILON {
                    exhausted = true;
                    break;
                }

                let delta: f64 = v
                    .iter()
                    .zip(&w)
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f64>()
                    .sqrt();
                v = w;
                if delta < config.tolerance {
                    break;
                }
            }

            if exhausted {
                components.push(vec![0.0; n_features]);
                singular_values.push(0.0);
                continue;
            }

            let sigma = l2_norm(&matrix.matvec(&v));
            if sigma < RANK_EPSILON {
                components.push(vec![0.0; n_features]);
                singular_values.push(0.0);
            } else {
                components.push(v);
                singular_values.push(sigma);
            }
        }
    }

    /// Project a matrix onto the fitted components, yielding `(n × k)`.
    ///
    /// The input must have the same column count the decomposition was fit
    /// on.
    pub fn transform(&self, matrix: &SparseMatrix) -> Result<DenseMatrix> {
        if matrix.n_cols() != self.n_features {
            return Err(PolarityError::invalid_argument(format!(
                "matrix has {} columns, but the decomposition was fit on {}",
                matrix.n_cols(),
                self.n_features
            )));
        }

        let k = self.n_components();
        let mut out = DenseMatrix::zeros(matrix.n_rows(), k);
        for i in 0..matrix.n_rows() {
            let row = matrix.row(i);
            let out_row = out.row_mut(i);
            for (c, slot) in out_row.iter_mut().enumerate() {
                let component = self.components.row(c);
                *slot = row.iter().map(|&(col, v)| v * component[col]).sum();
            }
        }
        Ok(out)
    }

    /// Fit on the matrix, then transform it.
    pub fn fit_transform(
        matrix: &SparseMatrix,
        k: usize,
        config: &TruncatedSvdConfig,
    ) -> Result<(Self, DenseMatrix)> {
        let svd = Self::fit(matrix, k, config)?;
        let reduced = svd.transform(matrix)?;
        Ok((svd, reduced))
    }

    /// Number of fitted components.
    pub fn n_components(&self) -> usize {
        self.singular_values.len()
    }

    /// Singular values in extraction order.
    pub fn singular_values(&self) -> &[f64] {
        &self.singular_values
    }

    /// Right-singular vectors, one row per component.
    pub fn components(&self) -> &DenseMatrix {
        &self.components
    }
}

fn orthogonalize(v: &mut [f64], components: &[Vec<f64>]) {
    for component in components {
        let proj: f64 = v.iter().zip(component).map(|(a, b)| a * b).sum();
        for (slot, &c) in v.iter_mut().zip(component) {
            *slot -= proj * c;
        }
    }
}

fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn normalize(v: &mut [f64]) -> f64 {
    let norm = l2_norm(v);
    if norm >= RANK_EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
    norm
}
