//! Simulation runner.
//!
//! Translates a [`CircuitDescription`] into the backend's native gates,
//! executes it, and reduces the raw counts to a [`MeasurementDistribution`]
//! and its most probable state.

use std::time::Instant;
use tracing::{debug, info, instrument};

use foldq_hal::{Backend, NativeCircuit, NativeGate};
use foldq_ir::{CircuitDescription, GateOp};

use crate::distribution::MeasurementDistribution;
use crate::error::{AnalyzerError, CoreResult};

/// Result of one completed simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// Normalized outcome distribution.
    pub distribution: MeasurementDistribution,
    /// Most probable bitstring (ties: lexicographically smallest).
    pub most_probable_state: String,
    /// Its probability.
    pub most_probable_probability: f64,
    /// Wall-clock time of the backend call, in seconds.
    pub wall_time_seconds: f64,
}

/// Translate circuit gates into the native `ry`/`cx` set.
///
/// Rotations become `RY(angle)`, entangling gates `CX(a, b)`.
pub fn to_native(circuit: &CircuitDescription) -> CoreResult<NativeCircuit> {
    let mut native = NativeCircuit::new(circuit.qubit_count());
    for gate in circuit.gates() {
        let op = match *gate {
            GateOp::Rotation { qubit, angle } => NativeGate::Ry {
                qubit,
                theta: angle,
            },
            GateOp::Entangle { qubit_a, qubit_b } => NativeGate::Cx {
                control: qubit_a,
                target: qubit_b,
            },
        };
        native
            .push(op)
            .map_err(|e| AnalyzerError::InvalidParameter(e.to_string()))?;
    }
    Ok(native)
}

/// Runs circuits on a [`Backend`].
pub struct SimulationRunner {
    backend: Box<dyn Backend>,
}

impl SimulationRunner {
    /// Create a runner over `backend`.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self::from_boxed(Box::new(backend))
    }

    /// Create a runner over an already boxed backend.
    pub fn from_boxed(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    /// The backend in use.
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Execute `circuit` for `shots` shots and summarize the outcome.
    ///
    /// # Errors
    ///
    /// - [`AnalyzerError::InvalidParameter`] when `shots` is zero or above
    ///   the backend's shot limit.
    /// - [`AnalyzerError::SimulationFailed`] when the backend fails or
    ///   returns counts that do not describe `shots` measurements of the
    ///   circuit's qubits.
    #[instrument(skip(self, circuit), fields(backend = self.backend.name(), qubits = circuit.qubit_count()))]
    pub async fn run(
        &self,
        circuit: &CircuitDescription,
        shots: u32,
    ) -> CoreResult<SimulationOutcome> {
        let max_shots = self.backend.capabilities().max_shots;
        if shots == 0 || shots > max_shots {
            return Err(AnalyzerError::InvalidParameter(format!(
                "shots must be between 1 and {max_shots}, got {shots}"
            )));
        }

        let native = to_native(circuit)?;
        debug!(ops = native.ops().len(), "translated circuit to native gates");

        let start = Instant::now();
        let result = self.backend.execute(&native, shots).await?;
        let wall_time_seconds = start.elapsed().as_secs_f64();

        let distribution = MeasurementDistribution::from_counts(
            &result.counts,
            circuit.qubit_count(),
            u64::from(shots),
        )?;
        let (state, probability) = distribution
            .most_probable()
            .map(|(b, p)| (b.to_string(), p))
            .ok_or_else(|| AnalyzerError::SimulationFailed("no outcomes".into()))?;

        info!(
            wall_time_seconds,
            distinct = distribution.len(),
            most_probable = %state,
            probability,
            "simulation completed"
        );

        Ok(SimulationOutcome {
            distribution,
            most_probable_state: state,
            most_probable_probability: probability,
            wall_time_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldq_ir::QubitId;

    #[test]
    fn test_to_native_linear() {
        let circuit = CircuitDescription::build(3, false).unwrap();
        let native = to_native(&circuit).unwrap();
        assert_eq!(native.num_qubits(), 3);
        assert_eq!(native.ops().len(), 5);
        assert!(matches!(
            native.ops()[0],
            NativeGate::Ry { qubit: QubitId(0), .. }
        ));
        assert_eq!(
            native.ops()[4],
            NativeGate::Cx {
                control: QubitId(1),
                target: QubitId(2)
            }
        );
    }

    #[test]
    fn test_to_native_preserves_angles() {
        let circuit = CircuitDescription::build(4, true).unwrap();
        let native = to_native(&circuit).unwrap();
        for (gate, op) in circuit.gates().iter().zip(native.ops()) {
            if let (GateOp::Rotation { angle, .. }, NativeGate::Ry { theta, .. }) = (gate, op) {
                assert_eq!(angle, theta);
            }
        }
    }
}
