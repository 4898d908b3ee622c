//! Operator data structures.
//!
//! An operator is a sum of weighted Pauli terms:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-qubit Pauli operators
//! (I, X, Y, Z) and c_k ∈ ℝ.
//!
//! # Example
//!
//! ```rust
//! use foldq_hamiltonian::hamiltonian::{OperatorDescription, OperatorTerm, PauliOp, PauliTerm};
//!
//! // H = -1.0·Z₀Z₁  +  0.5·Z₀
//! let h = OperatorDescription::from_terms(2, vec![
//!     OperatorTerm::new(-1.0, PauliTerm::from_ops([(0, PauliOp::Z), (1, PauliOp::Z)])),
//!     OperatorTerm::new( 0.5, PauliTerm::from_ops([(0, PauliOp::Z)])),
//! ]);
//! assert_eq!(h.n_terms(), 2);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coefficients at or below this magnitude are treated as zero.
pub const SIGNIFICANCE_CUTOFF: f64 = 1e-9;

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Single-character label.
    pub fn as_char(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }
}

/// A tensor product of Pauli operators on indexed qubits.
///
/// Stored as a sorted `Vec<(qubit_index, PauliOp)>` with identities
/// omitted. Qubits not listed are implicitly I, so two terms with the same
/// support and factors compare (and hash) equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliTerm {
    ops: Vec<(u32, PauliOp)>,
}

impl PauliTerm {
    /// Construct from `(qubit, op)` pairs.
    ///
    /// Identity operators are dropped; the remaining ops are sorted by qubit.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> Self {
        let mut v: Vec<(u32, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        v.sort_by_key(|(q, _)| *q);
        Self { ops: v }
    }

    /// Z on a single qubit.
    pub fn z(qubit: u32) -> Self {
        Self::from_ops([(qubit, PauliOp::Z)])
    }

    /// Z⊗Z on two qubits.
    pub fn zz(q0: u32, q1: u32) -> Self {
        Self::from_ops([(q0, PauliOp::Z), (q1, PauliOp::Z)])
    }

    /// Non-identity `(qubit, op)` pairs, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// Operator on `qubit` (I when not listed).
    pub fn op_at(&self, qubit: u32) -> PauliOp {
        self.ops
            .iter()
            .find(|(q, _)| *q == qubit)
            .map_or(PauliOp::I, |(_, op)| *op)
    }

    /// Number of qubits acted on nontrivially.
    pub fn locality(&self) -> usize {
        self.ops.len()
    }

    /// True if there are no non-identity operators.
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for an identity term.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// Dense label over `num_qubits` qubits, qubit 0 first (e.g. `"ZIZ"`).
    pub fn label(&self, num_qubits: u32) -> String {
        (0..num_qubits).map(|q| self.op_at(q).as_char()).collect()
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        for (i, (q, op)) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{q}", op.as_char())?;
        }
        Ok(())
    }
}

/// A single weighted Pauli term: `coeff · pauli`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Pauli term.
    pub pauli: PauliTerm,
}

impl OperatorTerm {
    /// Create a new term.
    pub fn new(coeff: f64, pauli: PauliTerm) -> Self {
        Self { coeff, pauli }
    }

    /// Shorthand: single-qubit Z term.
    pub fn z(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliTerm::z(qubit))
    }

    /// Shorthand: ZZ coupling term.
    pub fn zz(q0: u32, q1: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliTerm::zz(q0, q1))
    }
}

/// A weighted sum of Pauli terms with unique keys.
///
/// Built once, then read-only. Terms keep first-occurrence order and every
/// stored coefficient has `|c| > SIGNIFICANCE_CUTOFF`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorDescription {
    num_qubits: u32,
    terms: Vec<OperatorTerm>,
}

impl OperatorDescription {
    /// Create from a list of terms, merging terms with identical keys by
    /// summing their coefficients.
    ///
    /// Terms whose (merged) coefficient is at or below
    /// [`SIGNIFICANCE_CUTOFF`] in magnitude are dropped.
    pub fn from_terms(num_qubits: u32, terms: impl IntoIterator<Item = OperatorTerm>) -> Self {
        let terms = terms.into_iter();
        let mut merged: Vec<OperatorTerm> = Vec::with_capacity(terms.size_hint().0);
        let mut index: FxHashMap<PauliTerm, usize> = FxHashMap::default();

        for term in terms {
            match index.get(&term.pauli) {
                Some(&pos) => merged[pos].coeff += term.coeff,
                None => {
                    index.insert(term.pauli.clone(), merged.len());
                    merged.push(term);
                }
            }
        }
        merged.retain(|t| t.coeff.abs() > SIGNIFICANCE_CUTOFF);

        Self {
            num_qubits,
            terms: merged,
        }
    }

    /// An operator with no terms.
    pub fn empty(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            terms: Vec::new(),
        }
    }

    /// Number of qubits the operator is defined on.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// All terms.
    pub fn terms(&self) -> &[OperatorTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient of `pauli`, if present.
    pub fn coefficient(&self, pauli: &PauliTerm) -> Option<f64> {
        self.terms.iter().find(|t| &t.pauli == pauli).map(|t| t.coeff)
    }

    /// Spectral norm upper bound: Σ |c_k|.
    pub fn lambda(&self) -> f64 {
        self.terms.iter().map(|t| t.coeff.abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pauli_term_drops_identity() {
        let p = PauliTerm::from_ops([(0, PauliOp::I), (2, PauliOp::Z)]);
        assert_eq!(p.ops(), &[(2, PauliOp::Z)]);
        assert_eq!(p.locality(), 1);
    }

    #[test]
    fn test_pauli_term_order_insensitive() {
        assert_eq!(PauliTerm::zz(3, 1), PauliTerm::zz(1, 3));
    }

    #[test]
    fn test_label_and_display() {
        let p = PauliTerm::zz(0, 2);
        assert_eq!(p.label(4), "ZIZI");
        assert_eq!(p.to_string(), "Z0 Z2");
        assert_eq!(PauliTerm::from_ops([] as [(u32, PauliOp); 0]).to_string(), "I");
    }

    #[test]
    fn test_from_terms_merges_duplicates() {
        let op = OperatorDescription::from_terms(
            3,
            vec![
                OperatorTerm::z(0, 1.0),
                OperatorTerm::zz(0, 1, 0.5),
                OperatorTerm::z(0, 2.0),
                OperatorTerm::zz(1, 0, 0.25),
            ],
        );
        assert_eq!(op.n_terms(), 2);
        assert_eq!(op.coefficient(&PauliTerm::z(0)), Some(3.0));
        assert_eq!(op.coefficient(&PauliTerm::zz(0, 1)), Some(0.75));
        // First occurrence order is kept.
        assert_eq!(op.terms()[0].pauli, PauliTerm::z(0));
    }

    #[test]
    fn test_from_terms_drops_cancelled() {
        let op = OperatorDescription::from_terms(
            2,
            vec![
                OperatorTerm::z(0, 1.0),
                OperatorTerm::zz(0, 1, 0.5),
                OperatorTerm::z(0, -1.0),
                OperatorTerm::z(1, 1e-12),
            ],
        );
        assert_eq!(op.n_terms(), 1);
        assert_eq!(op.coefficient(&PauliTerm::z(0)), None);
        assert_eq!(op.coefficient(&PauliTerm::z(1)), None);
        assert_eq!(op.terms()[0].pauli, PauliTerm::zz(0, 1));
    }

    #[test]
    fn test_from_terms_many_duplicates() {
        let terms = (0..2000u32).flat_map(|k| {
            let (i, j) = (k % 40, 40 + k % 50);
            [OperatorTerm::zz(i, j, 1.0), OperatorTerm::z(i, 0.5)]
        });
        let op = OperatorDescription::from_terms(90, terms);
        // lcm(40, 50) = 200 distinct pairs, 40 distinct Z terms.
        assert_eq!(op.n_terms(), 240);
        assert_eq!(op.coefficient(&PauliTerm::zz(0, 40)), Some(10.0));
        assert_eq!(op.coefficient(&PauliTerm::z(0)), Some(25.0));
        assert_eq!(op.terms()[0].pauli, PauliTerm::zz(0, 40));
        assert_eq!(op.terms()[1].pauli, PauliTerm::z(0));
    }

    #[test]
    fn test_lambda() {
        let op = OperatorDescription::from_terms(
            2,
            vec![OperatorTerm::z(0, -1.0), OperatorTerm::zz(0, 1, 0.5)],
        );
        assert!((op.lambda() - 1.5).abs() < 1e-15);
        assert!(OperatorDescription::empty(2).is_empty());
    }
}
