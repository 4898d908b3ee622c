//! Native gate representation handed to backends.

use serde::{Deserialize, Serialize};
use std::fmt;

use foldq_ir::QubitId;

use crate::error::{HalError, HalResult};

/// A gate in the backend's native set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NativeGate {
    /// Rotation about the Y axis.
    Ry {
        /// Target qubit.
        qubit: QubitId,
        /// Angle in radians.
        theta: f64,
    },
    /// Controlled-NOT.
    Cx {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
}

impl NativeGate {
    /// Lower-case gate name as listed in [`Capabilities::native_gates`](crate::Capabilities).
    pub fn name(&self) -> &'static str {
        match self {
            NativeGate::Ry { .. } => "ry",
            NativeGate::Cx { .. } => "cx",
        }
    }

    /// Qubits the gate acts on.
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            NativeGate::Ry { qubit, .. } => vec![qubit],
            NativeGate::Cx { control, target } => vec![control, target],
        }
    }
}

impl fmt::Display for NativeGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeGate::Ry { qubit, theta } => write!(f, "ry({theta}) {qubit}"),
            NativeGate::Cx { control, target } => write!(f, "cx {control}, {target}"),
        }
    }
}

/// A circuit in native gates, measured on every qubit at the end.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NativeCircuit {
    num_qubits: u32,
    ops: Vec<NativeGate>,
}

impl NativeCircuit {
    /// Create an empty circuit on `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            ops: Vec::new(),
        }
    }

    /// Append a gate, checking its operands against the register.
    pub fn push(&mut self, gate: NativeGate) -> HalResult<&mut Self> {
        let qubits = gate.qubits();
        for q in &qubits {
            if q.0 >= self.num_qubits {
                return Err(HalError::InvalidCircuit(format!(
                    "{gate} addresses {q} but the circuit has {} qubits",
                    self.num_qubits
                )));
            }
        }
        if qubits.len() == 2 && qubits[0] == qubits[1] {
            return Err(HalError::InvalidCircuit(format!(
                "{gate} uses the same qubit twice"
            )));
        }
        self.ops.push(gate);
        Ok(self)
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Gates in execution order.
    pub fn ops(&self) -> &[NativeGate] {
        &self.ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_valid_gates() {
        let mut circuit = NativeCircuit::new(2);
        circuit
            .push(NativeGate::Ry {
                qubit: QubitId(0),
                theta: 0.5,
            })
            .unwrap()
            .push(NativeGate::Cx {
                control: QubitId(0),
                target: QubitId(1),
            })
            .unwrap();
        assert_eq!(circuit.ops().len(), 2);
        assert_eq!(circuit.ops()[1].name(), "cx");
    }

    #[test]
    fn test_push_rejects_out_of_range() {
        let mut circuit = NativeCircuit::new(2);
        let result = circuit.push(NativeGate::Ry {
            qubit: QubitId(2),
            theta: 0.1,
        });
        assert!(matches!(result, Err(HalError::InvalidCircuit(_))));
        assert!(circuit.ops().is_empty());
    }

    #[test]
    fn test_push_rejects_repeated_qubit() {
        let mut circuit = NativeCircuit::new(3);
        let result = circuit.push(NativeGate::Cx {
            control: QubitId(1),
            target: QubitId(1),
        });
        assert!(matches!(result, Err(HalError::InvalidCircuit(_))));
    }
}
