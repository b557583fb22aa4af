//! Truncated singular-value decomposition by deflated power iteration.
//!
//! Factorizes `A ≈ U · Σ · Vᵀ` one singular triplet at a time: power
//! iteration on `AᵀA` (applied as two mat-vec products) with Gram–Schmidt
//! deflation against previously found right singular vectors. Singular
//! values come out in descending order; iteration stops at the effective
//! rank. Initialization is deterministic (normalized all-ones direction
//! with a canonical-basis fallback), so repeated runs on the same matrix
//! produce identical factors.

use ndarray::{Array1, Array2};

use crate::error::SummarizeError;

/// Iteration budget before reporting non-convergence.
pub const DEFAULT_MAX_ITERATIONS: usize = 25_000;

/// Relative stabilization tolerance on the iterated eigenvalue of `AᵀA`.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Singular values below `σ₀ ·` this ratio terminate the factorization.
const RANK_CUTOFF: f64 = 1e-9;

/// Absolute floor below which a singular value is treated as zero.
const ZERO_SIGMA: f64 = 1e-12;

/// Convergence controls for [`truncated_svd_with`].
#[derive(Debug, Clone, Copy)]
pub struct SvdOptions {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for SvdOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SvdOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// The factors of a truncated SVD.
///
/// `u` is `(rows × k)`, `v` is `(cols × k)`, and `singular_values` holds
/// the `k` singular values in descending order, where `k` is the effective
/// rank (at least 1 for a non-empty input matrix, even when it is all
/// zeros).
#[derive(Debug, Clone)]
pub struct TruncatedSvd {
    pub u: Array2<f64>,
    pub singular_values: Vec<f64>,
    pub v: Array2<f64>,
}

impl TruncatedSvd {
    /// Number of singular triplets retained.
    pub fn rank(&self) -> usize {
        self.singular_values.len()
    }
}

/// Factorize `a` with default convergence options.
pub fn truncated_svd(a: &Array2<f64>) -> Result<TruncatedSvd, SummarizeError> {
    truncated_svd_with(a, &SvdOptions::default())
}

/// Factorize `a`, one deflated power iteration per singular triplet.
pub fn truncated_svd_with(
    a: &Array2<f64>,
    options: &SvdOptions,
) -> Result<TruncatedSvd, SummarizeError> {
    let (rows, cols) = a.dim();
    let max_rank = rows.min(cols);

    let mut sigmas: Vec<f64> = Vec::new();
    let mut left: Vec<Array1<f64>> = Vec::new();
    let mut right: Vec<Array1<f64>> = Vec::new();

    for _ in 0..max_rank {
        let Some(mut v) = initial_direction(cols, &right) else {
            break;
        };

        let mut previous = f64::INFINITY;
        let mut converged = false;
        for _ in 0..options.max_iterations {
            let w = a.dot(&v);
            let mut z = a.t().dot(&w);
            orthogonalize(&mut z, &right);
            let lambda = norm(&z);
            if lambda <= ZERO_SIGMA {
                // The remaining subspace is numerically null.
                converged = true;
                break;
            }
            z.mapv_inplace(|x| x / lambda);
            v = z;
            if (lambda - previous).abs() <= options.tolerance * lambda {
                converged = true;
                break;
            }
            previous = lambda;
        }
        if !converged {
            return Err(SummarizeError::SvdNonConvergence {
                iterations: options.max_iterations,
            });
        }

        let w = a.dot(&v);
        let sigma = norm(&w);
        if let Some(&leading) = sigmas.first() {
            if sigma <= leading * RANK_CUTOFF {
                break;
            }
        }
        let u = if sigma > ZERO_SIGMA {
            w.mapv(|x| x / sigma)
        } else {
            Array1::zeros(rows)
        };
        left.push(u);
        right.push(v);
        sigmas.push(sigma);
        if sigma <= ZERO_SIGMA {
            // All-zero matrix: keep the single zero triplet as rank 1.
            break;
        }
    }

    let k = sigmas.len();
    let mut u = Array2::zeros((rows, k));
    let mut v = Array2::zeros((cols, k));
    for (j, column) in left.iter().enumerate() {
        u.column_mut(j).assign(column);
    }
    for (j, column) in right.iter().enumerate() {
        v.column_mut(j).assign(column);
    }

    Ok(TruncatedSvd {
        u,
        singular_values: sigmas,
        v,
    })
}

fn norm(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}

/// Subtract the projections of `v` onto each basis vector.
fn orthogonalize(v: &mut Array1<f64>, basis: &[Array1<f64>]) {
    for b in basis {
        let projection = v.dot(b);
        v.zip_mut_with(b, |x, &y| *x -= projection * y);
    }
}

/// Deterministic unit start vector outside the span of `basis`.
fn initial_direction(len: usize, basis: &[Array1<f64>]) -> Option<Array1<f64>> {
    let mut candidate = Array1::from_elem(len, 1.0 / (len as f64).sqrt());
    orthogonalize(&mut candidate, basis);
    let n = norm(&candidate);
    if n > 1e-6 {
        candidate.mapv_inplace(|x| x / n);
        return Some(candidate);
    }
    for i in 0..len {
        let mut e: Array1<f64> = Array1::zeros(len);
        e[i] = 1.0;
        orthogonalize(&mut e, basis);
        let n = norm(&e);
        if n > 1e-6 {
            e.mapv_inplace(|x| x / n);
            return Some(e);
        }
    }
    None
}
