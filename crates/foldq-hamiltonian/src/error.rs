//! Error types for the hamiltonian crate.

use thiserror::Error;

/// Errors produced while building a polarity operator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HamiltonianError {
    /// Tensor has no rows.
    #[error("polarity tensor is empty")]
    EmptyTensor,

    /// A row length differs from the number of rows.
    #[error("polarity tensor must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Number of rows.
        expected: usize,
    },

    /// `t[i][j] != t[j][i]`.
    #[error("polarity tensor must be symmetric: t[{i}][{j}] = {a} but t[{j}][{i}] = {b}")]
    NotSymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// `t[i][j]`.
        a: f64,
        /// `t[j][i]`.
        b: f64,
    },

    /// NaN or infinite entry.
    #[error("polarity tensor entry t[{i}][{j}] is not finite")]
    NonFinite {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
    },

    /// Coupling scalar is NaN or infinite.
    #[error("coupling must be finite, got {0}")]
    InvalidCoupling(f64),

    /// `coupling · t[i][j]` overflowed to a non-finite coefficient.
    #[error("coefficient for t[{i}][{j}] is not finite after applying coupling {coupling}")]
    CoefficientOverflow {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// The coupling that was applied.
        coupling: f64,
    },

    /// Tensor dimension above [`MAX_TENSOR_SIZE`](crate::MAX_TENSOR_SIZE).
    #[error("polarity tensor dimension {size} exceeds the maximum of {max}")]
    TensorTooLarge {
        /// Requested dimension.
        size: usize,
        /// Largest accepted dimension.
        max: usize,
    },
}

/// Result type for operator construction.
pub type HamiltonianResult<T> = Result<T, HamiltonianError>;
