//! foldq Polarity Hamiltonians
//!
//! Residue polarity is modelled as a diagonal-basis observable. A symmetric
//! [`PolarityTensor`] becomes a sum of Z and ZZ Pauli terms:
//!
//! - `t[i][i]` → `Z_i` (single-residue polarity)
//! - `t[i][j]`, `i < j` → `Z_i Z_j` (pairwise coupling)
//!
//! Insignificant entries are skipped, so the term count follows the number
//! of non-zero interactions rather than `n²`.
//!
//! # Example
//!
//! ```rust
//! use foldq_hamiltonian::{OperatorBuilder, PolarityTensor, analyze};
//!
//! let tensor = PolarityTensor::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
//! let operator = OperatorBuilder::new().build(&tensor).unwrap();
//! assert_eq!(operator.n_terms(), 1);
//!
//! let analysis = analyze(&operator);
//! assert_eq!(analysis.max_locality, 2);
//! ```

pub mod analysis;
pub mod builder;
pub mod error;
pub mod hamiltonian;
pub mod polarity;

pub use analysis::{DOMINANT_TERM_LIMIT, DominantTerm, OperatorAnalysis, analyze};
pub use builder::{DEFAULT_COUPLING, OperatorBuilder};
pub use error::{HamiltonianError, HamiltonianResult};
pub use hamiltonian::{
    OperatorDescription, OperatorTerm, PauliOp, PauliTerm, SIGNIFICANCE_CUTOFF,
};
pub use polarity::{DEFAULT_EXAMPLE_SEED, MAX_TENSOR_SIZE, PolarityTensor, SYMMETRY_TOLERANCE};
