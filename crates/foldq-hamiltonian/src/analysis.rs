//! Descriptive metrics over an operator.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::hamiltonian::{OperatorDescription, PauliTerm};

/// How many terms [`OperatorAnalysis::dominant_terms`] keeps.
pub const DOMINANT_TERM_LIMIT: usize = 5;

/// A term ranked by coefficient magnitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantTerm {
    /// The Pauli term.
    pub pauli: PauliTerm,
    /// Dense label, qubit 0 first.
    pub label: String,
    /// Signed coefficient.
    pub coeff: f64,
}

/// Metrics of an [`OperatorDescription`].
///
/// An empty operator is a valid input: it yields zero counts, no range and
/// zero weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorAnalysis {
    /// Number of terms.
    pub term_count: usize,
    /// Qubits the operator is defined on.
    pub num_qubits: u32,
    /// Largest number of non-identity factors in any term.
    pub max_locality: usize,
    /// `(min, max)` over signed coefficients, `None` when empty.
    pub coefficient_range: Option<(f64, f64)>,
    /// Σ |c_k|.
    pub total_abs_weight: f64,
    /// Locality → number of terms with that locality.
    pub locality_histogram: BTreeMap<usize, usize>,
    /// Largest terms by |coefficient|, ties in construction order.
    pub dominant_terms: Vec<DominantTerm>,
}

/// Analyze `operator`.
pub fn analyze(operator: &OperatorDescription) -> OperatorAnalysis {
    let terms = operator.terms();

    let coefficient_range = terms.iter().map(|t| t.coeff).fold(None, |acc, c| match acc {
        None => Some((c, c)),
        Some((lo, hi)) => Some((f64::min(lo, c), f64::max(hi, c))),
    });

    let mut locality_histogram = BTreeMap::new();
    for term in terms {
        *locality_histogram.entry(term.pauli.locality()).or_insert(0) += 1;
    }

    // Stable sort keeps construction order among equal magnitudes.
    let mut ranked: Vec<_> = terms.iter().collect();
    ranked.sort_by(|a, b| b.coeff.abs().total_cmp(&a.coeff.abs()));
    let dominant_terms = ranked
        .into_iter()
        .take(DOMINANT_TERM_LIMIT)
        .map(|t| DominantTerm {
            pauli: t.pauli.clone(),
            label: t.pauli.label(operator.num_qubits()),
            coeff: t.coeff,
        })
        .collect();

    OperatorAnalysis {
        term_count: terms.len(),
        num_qubits: operator.num_qubits(),
        max_locality: terms.iter().map(|t| t.pauli.locality()).max().unwrap_or(0),
        coefficient_range,
        total_abs_weight: operator.lambda(),
        locality_histogram,
        dominant_terms,
    }
}

impl OperatorAnalysis {
    /// Analyze `operator`. Same as [`analyze`].
    pub fn of(operator: &OperatorDescription) -> Self {
        analyze(operator)
    }
}
