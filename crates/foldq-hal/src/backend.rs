//! Backend trait.
//!
//! A backend is the external simulator collaborator: it receives a circuit
//! in its native gate set plus a shot count and returns outcome counts.
//!
//! | Method | Kind | Required | Returns |
//! |--------|------|----------|---------|
//! | `name()` | sync | yes | `&str` |
//! | `capabilities()` | sync | yes | `&Capabilities` |
//! | `validate()` | sync | provided | `HalResult<()>` |
//! | `execute()` | async | yes | `HalResult<ExecutionResult>` |

use async_trait::async_trait;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::native::NativeCircuit;
use crate::result::ExecutionResult;

/// Trait for circuit executors.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible; cache at construction.
/// - `execute()` runs to completion and returns counts whose total equals
///   `shots`. Failures inside the executor surface as `Err`.
/// - No retries, no timeouts: callers that want either wrap the call.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Check a circuit and shot count against [`Backend::capabilities`].
    fn validate(&self, circuit: &NativeCircuit, shots: u32) -> HalResult<()> {
        let caps = self.capabilities();

        if circuit.num_qubits() > caps.num_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "circuit has {} qubits but {} supports {}",
                circuit.num_qubits(),
                self.name(),
                caps.num_qubits
            )));
        }
        if shots == 0 || shots > caps.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{shots} (allowed: 1..={})",
                caps.max_shots
            )));
        }
        if let Some(gate) = circuit.ops().iter().find(|g| !caps.supports_gate(g.name())) {
            return Err(HalError::UnsupportedGate(gate.name().to_string()));
        }

        Ok(())
    }

    /// Execute `circuit` for `shots` repetitions and return the counts.
    async fn execute(&self, circuit: &NativeCircuit, shots: u32) -> HalResult<ExecutionResult>;
}
