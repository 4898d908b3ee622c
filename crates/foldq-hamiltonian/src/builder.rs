//! Polarity operator construction.
//!
//! Maps a [`PolarityTensor`] `t` to the diagonal-basis operator
//!
//!   H = λ · ( Σ_i t[i][i] · Z_i  +  Σ_{i<j} t[i][j] · Z_i Z_j )
//!
//! keeping only coefficients with `|c| > SIGNIFICANCE_CUTOFF`.

use tracing::{debug, warn};

use crate::error::{HamiltonianError, HamiltonianResult};
use crate::hamiltonian::{OperatorDescription, OperatorTerm, SIGNIFICANCE_CUTOFF};
use crate::polarity::PolarityTensor;

/// Default coupling scalar.
pub const DEFAULT_COUPLING: f64 = 1.0;

/// Builds [`OperatorDescription`]s from polarity tensors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatorBuilder {
    coupling: f64,
}

impl Default for OperatorBuilder {
    fn default() -> Self {
        Self {
            coupling: DEFAULT_COUPLING,
        }
    }
}

impl OperatorBuilder {
    /// Builder with coupling 1.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale every coefficient by `coupling` before the significance cut.
    pub fn with_coupling(mut self, coupling: f64) -> Self {
        self.coupling = coupling;
        self
    }

    /// The coupling scalar.
    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    /// Build the operator for `tensor`.
    ///
    /// One Z term per significant diagonal entry in qubit order, then one
    /// ZZ term per significant upper-triangle entry in row-major order.
    ///
    /// # Errors
    ///
    /// [`HamiltonianError::InvalidCoupling`] for a non-finite coupling,
    /// [`HamiltonianError::CoefficientOverflow`] when a scaled entry is not
    /// finite, or any error of [`PolarityTensor::validate`].
    pub fn build(&self, tensor: &PolarityTensor) -> HamiltonianResult<OperatorDescription> {
        if !self.coupling.is_finite() {
            return Err(HamiltonianError::InvalidCoupling(self.coupling));
        }
        tensor.validate()?;

        let rows = tensor.rows();
        let n = rows.len();
        let num_qubits = n as u32;
        let scaled = |i: usize, j: usize| {
            let c = self.coupling * rows[i][j];
            if c.is_finite() {
                Ok(c)
            } else {
                Err(HamiltonianError::CoefficientOverflow {
                    i,
                    j,
                    coupling: self.coupling,
                })
            }
        };
        let significant = |c: f64| c.abs() > SIGNIFICANCE_CUTOFF;

        let mut terms = Vec::new();
        for i in 0..n {
            let c = scaled(i, i)?;
            if significant(c) {
                terms.push(OperatorTerm::z(i as u32, c));
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let c = scaled(i, j)?;
                if significant(c) {
                    terms.push(OperatorTerm::zz(i as u32, j as u32, c));
                }
            }
        }

        let operator = OperatorDescription::from_terms(num_qubits, terms);
        if operator.is_empty() {
            warn!(num_qubits, "no significant polarity terms, operator is empty");
        } else {
            debug!(
                num_qubits,
                coupling = self.coupling,
                terms = operator.n_terms(),
                "built polarity operator"
            );
        }
        Ok(operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamiltonian::PauliTerm;

    #[test]
    fn test_diagonal_only() {
        let t = PolarityTensor::new(vec![vec![2.0, 0.0], vec![0.0, -3.0]]);
        let op = OperatorBuilder::new().build(&t).unwrap();
        assert_eq!(op.n_terms(), 2);
        assert_eq!(op.terms()[0], OperatorTerm::z(0, 2.0));
        assert_eq!(op.terms()[1], OperatorTerm::z(1, -3.0));
    }

    #[test]
    fn test_term_order() {
        let t = PolarityTensor::new(vec![
            vec![1.0, 0.2, 0.3],
            vec![0.2, 0.0, 0.4],
            vec![0.3, 0.4, 1.5],
        ]);
        let op = OperatorBuilder::new().build(&t).unwrap();
        let keys: Vec<String> = op.terms().iter().map(|t| t.pauli.to_string()).collect();
        assert_eq!(keys, ["Z0", "Z2", "Z0 Z1", "Z0 Z2", "Z1 Z2"]);
    }

    #[test]
    fn test_significance_cutoff() {
        let t = PolarityTensor::new(vec![vec![1e-10, 1e-9], vec![1e-9, 2e-9]]);
        let op = OperatorBuilder::new().build(&t).unwrap();
        assert_eq!(op.n_terms(), 1);
        assert_eq!(op.coefficient(&PauliTerm::z(1)), Some(2e-9));
    }

    #[test]
    fn test_coupling_applied_before_cutoff() {
        let t = PolarityTensor::new(vec![vec![1e-6, 0.0], vec![0.0, 1.0]]);
        let op = OperatorBuilder::new().with_coupling(1e-4).build(&t).unwrap();
        assert_eq!(op.n_terms(), 1);
        assert_eq!(op.coefficient(&PauliTerm::z(1)), Some(1e-4));
    }

    #[test]
    fn test_coupling_overflow_rejected() {
        let t = PolarityTensor::new(vec![vec![10.0, 0.0], vec![0.0, 0.0]]);
        let result = OperatorBuilder::new().with_coupling(1e308).build(&t);
        assert!(matches!(
            result,
            Err(HamiltonianError::CoefficientOverflow { i: 0, j: 0, .. })
        ));

        let t = PolarityTensor::new(vec![vec![0.0, -4.0], vec![-4.0, 0.0]]);
        let result = OperatorBuilder::new().with_coupling(f64::MAX).build(&t);
        assert!(matches!(
            result,
            Err(HamiltonianError::CoefficientOverflow { i: 0, j: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_coupling() {
        let t = PolarityTensor::zeros(2);
        assert!(matches!(
            OperatorBuilder::new().with_coupling(f64::INFINITY).build(&t),
            Err(HamiltonianError::InvalidCoupling(_))
        ));
    }
}
