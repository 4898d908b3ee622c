//! Gate operations emitted by the circuit builder.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// A single operation in a [`CircuitDescription`](crate::CircuitDescription).
///
/// The set is closed: a residue either twists about its own torsion axis
/// (`Rotation`) or couples to another residue (`Entangle`). Backends decide
/// which native gates realise each variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateOp {
    /// Local torsional rotation on one qubit.
    Rotation {
        /// Target qubit.
        qubit: QubitId,
        /// Rotation angle in radians.
        angle: f64,
    },
    /// Interaction between two residues.
    Entangle {
        /// First qubit (control side when realised as a CX).
        qubit_a: QubitId,
        /// Second qubit.
        qubit_b: QubitId,
    },
}

impl GateOp {
    /// Create a rotation.
    pub fn rotation(qubit: impl Into<QubitId>, angle: f64) -> Self {
        GateOp::Rotation {
            qubit: qubit.into(),
            angle,
        }
    }

    /// Create an entangling gate.
    pub fn entangle(qubit_a: impl Into<QubitId>, qubit_b: impl Into<QubitId>) -> Self {
        GateOp::Entangle {
            qubit_a: qubit_a.into(),
            qubit_b: qubit_b.into(),
        }
    }

    /// Short mnemonic used by renderers.
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::Rotation { .. } => "rot",
            GateOp::Entangle { .. } => "ent",
        }
    }

    /// Qubits this operation acts on, in operand order.
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            GateOp::Rotation { qubit, .. } => vec![qubit],
            GateOp::Entangle { qubit_a, qubit_b } => vec![qubit_a, qubit_b],
        }
    }

    /// Number of qubits this operation acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            GateOp::Rotation { .. } => 1,
            GateOp::Entangle { .. } => 2,
        }
    }

    /// Check whether this is a rotation.
    #[inline]
    pub fn is_rotation(&self) -> bool {
        matches!(self, GateOp::Rotation { .. })
    }

    /// Check whether this is an entangling gate.
    #[inline]
    pub fn is_entangle(&self) -> bool {
        matches!(self, GateOp::Entangle { .. })
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateOp::Rotation { qubit, angle } => write!(f, "rot({angle:.4}) {qubit}"),
            GateOp::Entangle { qubit_a, qubit_b } => write!(f, "ent {qubit_a}, {qubit_b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_qubits() {
        let r = GateOp::rotation(2, 0.5);
        assert_eq!(r.qubits(), vec![QubitId(2)]);
        assert_eq!(r.num_qubits(), 1);
        assert!(r.is_rotation());

        let e = GateOp::entangle(0, 3);
        assert_eq!(e.qubits(), vec![QubitId(0), QubitId(3)]);
        assert_eq!(e.num_qubits(), 2);
        assert!(e.is_entangle());
    }

    #[test]
    fn test_gate_display() {
        assert_eq!(GateOp::rotation(1, 0.25).to_string(), "rot(0.2500) q1");
        assert_eq!(GateOp::entangle(0, 1).to_string(), "ent q0, q1");
    }

    #[test]
    fn test_gate_serde_tagged() {
        let json = serde_json::to_value(GateOp::entangle(0, 1)).unwrap();
        assert_eq!(json["kind"], "entangle");
        assert_eq!(json["qubit_a"], 0);
        assert_eq!(json["qubit_b"], 1);
    }
}
