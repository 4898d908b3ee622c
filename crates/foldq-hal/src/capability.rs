//! Backend capability description.

use serde::{Deserialize, Serialize};

/// Static description of what a backend can execute.
///
/// Backends build this once at construction; [`Backend::capabilities`]
/// hands out a reference.
///
/// [`Backend::capabilities`]: crate::Backend::capabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Backend name.
    pub name: String,
    /// Maximum number of qubits per circuit.
    pub num_qubits: u32,
    /// Maximum shots per execution.
    pub max_shots: u32,
    /// Whether this is a local simulator.
    pub is_simulator: bool,
    /// Native gate names accepted by [`Backend::execute`](crate::Backend::execute).
    pub native_gates: Vec<String>,
}

impl Capabilities {
    /// Capabilities of a local statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            max_shots: 1_000_000,
            is_simulator: true,
            native_gates: ["ry", "cx"].map(String::from).to_vec(),
        }
    }

    /// Check whether a native gate name is supported.
    pub fn supports_gate(&self, gate: &str) -> bool {
        self.native_gates.iter().any(|g| g == gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_capabilities() {
        let caps = Capabilities::simulator(12);
        assert_eq!(caps.num_qubits, 12);
        assert!(caps.is_simulator);
        assert!(caps.supports_gate("ry"));
        assert!(caps.supports_gate("cx"));
        assert!(!caps.supports_gate("swap"));
    }
}
