//! The analyzer session.
//!
//! Holds the current circuit, the current operator, the display mode and
//! the run history, and exposes the operations a front end invokes. All
//! operations run to completion before the next one starts; a failed
//! operation leaves every field as it was.

use tracing::{debug, info};

use foldq_hal::Backend;
use foldq_hamiltonian::{OperatorAnalysis, OperatorBuilder, OperatorDescription, PolarityTensor};
use foldq_ir::CircuitDescription;

use crate::distribution::MeasurementDistribution;
use crate::error::{AnalyzerError, CoreResult};
use crate::history::{HistoryLedger, RecordSummary, SimulationRecord};
use crate::runner::SimulationRunner;

/// Aggregate state of one interactive analysis.
pub struct AnalyzerSession {
    runner: SimulationRunner,
    circuit: Option<CircuitDescription>,
    operator: Option<OperatorDescription>,
    last_distribution: Option<MeasurementDistribution>,
    gui_mode: bool,
    history: HistoryLedger,
}

impl AnalyzerSession {
    /// A session simulating on `backend`, GUI mode on.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self::with_runner(SimulationRunner::new(backend))
    }

    /// A session over an existing runner.
    pub fn with_runner(runner: SimulationRunner) -> Self {
        Self {
            runner,
            circuit: None,
            operator: None,
            last_distribution: None,
            gui_mode: true,
            history: HistoryLedger::new(),
        }
    }

    /// The simulation runner.
    pub fn runner(&self) -> &SimulationRunner {
        &self.runner
    }

    /// Replace the current circuit with a freshly built one.
    ///
    /// On error the previous circuit is kept.
    pub fn rebuild_circuit(
        &mut self,
        qubit_count: u32,
        use_complex_gates: bool,
    ) -> CoreResult<&CircuitDescription> {
        let circuit = CircuitDescription::build(qubit_count, use_complex_gates)?;
        info!(
            qubit_count,
            use_complex_gates,
            depth = circuit.depth(),
            "circuit rebuilt"
        );
        Ok(self.circuit.insert(circuit))
    }

    /// Simulate the current circuit and record the run.
    ///
    /// The record is appended only when the simulation succeeds.
    ///
    /// # Errors
    ///
    /// [`AnalyzerError::NoCircuit`] before any circuit has been built,
    /// otherwise the errors of [`SimulationRunner::run`].
    pub async fn run_simulation(&mut self, shots: u32) -> CoreResult<SimulationRecord> {
        let circuit = self.circuit.as_ref().ok_or(AnalyzerError::NoCircuit)?;
        let outcome = self.runner.run(circuit, shots).await?;

        let record = SimulationRecord::new(circuit, shots, &outcome);
        self.history.append(record.clone());
        self.last_distribution = Some(outcome.distribution);
        debug!(records = self.history.len(), "simulation recorded");
        Ok(record)
    }

    /// Replace the current operator with one built from `tensor`.
    pub fn build_operator(&mut self, tensor: &PolarityTensor) -> CoreResult<&OperatorDescription> {
        self.build_with(OperatorBuilder::new(), tensor)
    }

    /// Like [`build_operator`](Self::build_operator), scaling every
    /// coefficient by `coupling`.
    pub fn build_operator_with_coupling(
        &mut self,
        tensor: &PolarityTensor,
        coupling: f64,
    ) -> CoreResult<&OperatorDescription> {
        self.build_with(OperatorBuilder::new().with_coupling(coupling), tensor)
    }

    fn build_with(
        &mut self,
        builder: OperatorBuilder,
        tensor: &PolarityTensor,
    ) -> CoreResult<&OperatorDescription> {
        let operator = builder.build(tensor)?;
        info!(
            num_qubits = operator.num_qubits(),
            terms = operator.n_terms(),
            "operator rebuilt"
        );
        Ok(self.operator.insert(operator))
    }

    /// Metrics of the current operator.
    pub fn analyze_operator(&self) -> CoreResult<OperatorAnalysis> {
        self.operator
            .as_ref()
            .map(OperatorAnalysis::of)
            .ok_or(AnalyzerError::NoOperator)
    }

    /// Set the display hint.
    pub fn set_gui_mode(&mut self, enabled: bool) {
        self.gui_mode = enabled;
    }

    /// Flip the display hint and return the new value.
    pub fn toggle_gui_mode(&mut self) -> bool {
        self.gui_mode = !self.gui_mode;
        self.gui_mode
    }

    /// The display hint. It has no effect on analysis.
    pub fn gui_mode(&self) -> bool {
        self.gui_mode
    }

    /// The current circuit, if built.
    pub fn current_circuit(&self) -> Option<&CircuitDescription> {
        self.circuit.as_ref()
    }

    /// The current operator, if built.
    pub fn current_operator(&self) -> Option<&OperatorDescription> {
        self.operator.as_ref()
    }

    /// Distribution of the most recent successful simulation.
    pub fn last_distribution(&self) -> Option<&MeasurementDistribution> {
        self.last_distribution.as_ref()
    }

    /// Compact views of all recorded runs, oldest first.
    pub fn summary(&self) -> Vec<RecordSummary> {
        self.history.summary()
    }

    /// Number of recorded runs.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The most recent record.
    pub fn last_record(&self) -> Option<&SimulationRecord> {
        self.history.last()
    }
}
