//! Residue polarity tensors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HamiltonianError, HamiltonianResult};

/// Absolute tolerance for `t[i][j] == t[j][i]`.
pub const SYMMETRY_TOLERANCE: f64 = 1e-12;

/// Seed used by [`PolarityTensor::example`] when none is given.
pub const DEFAULT_EXAMPLE_SEED: u64 = 42;

/// Largest accepted tensor dimension (one qubit per row).
pub const MAX_TENSOR_SIZE: usize = 128;

/// An `n × n` real matrix of residue polarities.
///
/// The diagonal holds single-residue polarity, off-diagonal entries the
/// pairwise coupling. Construction does not check the shape; a malformed
/// tensor is rejected when an operator is built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarityTensor {
    rows: Vec<Vec<f64>>,
}

impl PolarityTensor {
    /// Wrap row-major data.
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// An all-zero `n × n` tensor.
    pub fn zeros(n: usize) -> Self {
        Self::new(vec![vec![0.0; n]; n])
    }

    /// Number of rows.
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Entry `t[i][j]`, if present.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Row-major data.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Check that the tensor is non-empty, at most [`MAX_TENSOR_SIZE`] rows,
    /// square, finite and symmetric.
    pub fn validate(&self) -> HamiltonianResult<()> {
        let n = self.rows.len();
        check_size(n)?;

        for (row, values) in self.rows.iter().enumerate() {
            if values.len() != n {
                return Err(HamiltonianError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                return Err(HamiltonianError::NonFinite { i: row, j: col });
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (self.rows[i][j], self.rows[j][i]);
                if (a - b).abs() > SYMMETRY_TOLERANCE {
                    return Err(HamiltonianError::NotSymmetric { i, j, a, b });
                }
            }
        }

        Ok(())
    }

    /// A reproducible example tensor of dimension `size`.
    ///
    /// A uniform `[0, 1)` matrix `B` is symmetrized as `(B + Bᵀ) / 2`, then
    /// the diagonal is replaced with uniform draws from `[0.5, 2.5)` so
    /// single-residue terms dominate.
    ///
    /// # Errors
    ///
    /// [`HamiltonianError::EmptyTensor`] for `size == 0` and
    /// [`HamiltonianError::TensorTooLarge`] above [`MAX_TENSOR_SIZE`],
    /// before anything is allocated.
    pub fn example(size: usize, seed: u64) -> HamiltonianResult<Self> {
        check_size(size)?;
        let mut rng = StdRng::seed_from_u64(seed);

        let base: Vec<Vec<f64>> = (0..size)
            .map(|_| (0..size).map(|_| rng.r#gen::<f64>()).collect())
            .collect();

        let mut rows: Vec<Vec<f64>> = (0..size)
            .map(|i| (0..size).map(|j| (base[i][j] + base[j][i]) / 2.0).collect())
            .collect();
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = rng.gen_range(0.5..2.5);
        }

        debug!(size, seed, "generated example polarity tensor");
        Ok(Self::new(rows))
    }
}

fn check_size(size: usize) -> HamiltonianResult<()> {
    if size == 0 {
        return Err(HamiltonianError::EmptyTensor);
    }
    if size > MAX_TENSOR_SIZE {
        return Err(HamiltonianError::TensorTooLarge {
            size,
            max: MAX_TENSOR_SIZE,
        });
    }
    Ok(())
}

impl From<Vec<Vec<f64>>> for PolarityTensor {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::new(rows)
    }
}
