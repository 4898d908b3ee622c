//! Simulator backend implementation.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, instrument};

use foldq_hal::{Backend, Capabilities, Counts, ExecutionResult, HalResult, NativeCircuit};

use crate::statevector::Statevector;

/// Default qubit limit of the local simulator.
const DEFAULT_MAX_QUBITS: u32 = 20;

/// Local simulator backend.
///
/// Evolves the statevector once per execution and samples `shots`
/// outcomes from it. With a seed, identical inputs give identical counts.
pub struct SimulatorBackend {
    capabilities: Capabilities,
    seed: Option<u64>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            capabilities: Capabilities::simulator(max_qubits),
            seed: None,
        }
    }

    /// Fix the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The sampling seed, if fixed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Run simulation synchronously.
    fn run_simulation(&self, circuit: &NativeCircuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();
        let num_qubits = circuit.num_qubits() as usize;

        let mut sv = Statevector::new(num_qubits);
        for gate in circuit.ops() {
            sv.apply(gate);
        }

        let cumulative: Vec<f64> = sv
            .probabilities()
            .into_iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect();

        let mut rng = self.rng();
        let mut tallies = vec![0u64; cumulative.len()];
        for _ in 0..shots {
            tallies[Statevector::sample_from(&cumulative, &mut rng)] += 1;
        }

        let mut counts = Counts::new();
        for (outcome, n) in tallies.into_iter().enumerate().filter(|(_, n)| *n > 0) {
            counts.insert(sv.outcome_to_bitstring(outcome), n);
        }

        let elapsed = start.elapsed();
        debug!(
            "Simulation completed in {:?}: {} distinct outcomes",
            elapsed,
            counts.len()
        );

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[instrument(skip(self, circuit), fields(qubits = circuit.num_qubits(), ops = circuit.ops().len()))]
    async fn execute(&self, circuit: &NativeCircuit, shots: u32) -> HalResult<ExecutionResult> {
        self.validate(circuit, shots)?;
        Ok(self.run_simulation(circuit, shots))
    }
}
