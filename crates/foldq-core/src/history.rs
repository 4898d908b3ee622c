//! Append-only run history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foldq_ir::CircuitDescription;

use crate::runner::SimulationOutcome;

/// Provenance of one completed simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// Unique record id.
    pub id: Uuid,
    /// Qubits (residues) in the simulated circuit.
    pub qubit_count: u32,
    /// Whether the circuit used all-to-all interactions.
    pub use_complex_gates: bool,
    /// Circuit depth.
    pub depth: usize,
    /// Shots requested.
    pub shots: u32,
    /// Most probable bitstring.
    pub most_probable_state: String,
    /// Its probability.
    pub most_probable_probability: f64,
    /// Distinct bitstrings observed.
    pub distinct_states: usize,
    /// Wall-clock time of the simulator call, in seconds.
    pub wall_time_seconds: f64,
    /// When the run completed.
    pub timestamp: DateTime<Utc>,
}

impl SimulationRecord {
    /// Record a completed run of `circuit`.
    pub fn new(circuit: &CircuitDescription, shots: u32, outcome: &SimulationOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            qubit_count: circuit.qubit_count(),
            use_complex_gates: circuit.use_complex_gates(),
            depth: circuit.depth(),
            shots,
            most_probable_state: outcome.most_probable_state.clone(),
            most_probable_probability: outcome.most_probable_probability,
            distinct_states: outcome.distribution.len(),
            wall_time_seconds: outcome.wall_time_seconds,
            timestamp: Utc::now(),
        }
    }
}

/// Compact read-only view of a [`SimulationRecord`] for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    /// 1-based position in the ledger.
    pub index: usize,
    /// Qubits simulated.
    pub qubit_count: u32,
    /// All-to-all interactions.
    pub use_complex_gates: bool,
    /// Shots requested.
    pub shots: u32,
    /// Most probable bitstring.
    pub most_probable_state: String,
    /// Its probability.
    pub most_probable_probability: f64,
    /// Distinct bitstrings observed.
    pub distinct_states: usize,
    /// Simulator wall time in seconds.
    pub wall_time_seconds: f64,
    /// Completion time.
    pub timestamp: DateTime<Utc>,
}

/// Ordered record of every completed simulation, oldest first.
///
/// Records are never mutated or removed.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    records: Vec<SimulationRecord>,
}

impl HistoryLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: SimulationRecord) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index` (0-based).
    pub fn get(&self, index: usize) -> Option<&SimulationRecord> {
        self.records.get(index)
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&SimulationRecord> {
        self.records.last()
    }

    /// Records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &SimulationRecord> {
        self.records.iter()
    }

    /// Compact views in chronological order.
    pub fn summary(&self) -> Vec<RecordSummary> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| RecordSummary {
                index: i + 1,
                qubit_count: r.qubit_count,
                use_complex_gates: r.use_complex_gates,
                shots: r.shots,
                most_probable_state: r.most_probable_state.clone(),
                most_probable_probability: r.most_probable_probability,
                distinct_states: r.distinct_states,
                wall_time_seconds: r.wall_time_seconds,
                timestamp: r.timestamp,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::MeasurementDistribution;
    use foldq_hal::Counts;

    fn record(qubits: u32, shots: u32) -> SimulationRecord {
        let circuit = CircuitDescription::build(qubits, false).unwrap();
        let mut counts = Counts::new();
        counts.insert("0".repeat(qubits as usize), u64::from(shots));
        let distribution =
            MeasurementDistribution::from_counts(&counts, qubits, u64::from(shots)).unwrap();
        let outcome = SimulationOutcome {
            distribution,
            most_probable_state: "0".repeat(qubits as usize),
            most_probable_probability: 1.0,
            wall_time_seconds: 0.01,
        };
        SimulationRecord::new(&circuit, shots, &outcome)
    }

    #[test]
    fn test_summary_preserves_order() {
        let mut ledger = HistoryLedger::new();
        ledger.append(record(2, 100));
        ledger.append(record(4, 200));

        let summary = ledger.summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].index, 1);
        assert_eq!(summary[0].qubit_count, 2);
        assert_eq!(summary[1].index, 2);
        assert_eq!(summary[1].shots, 200);
        assert_eq!(summary[1].distinct_states, 1);
        assert_eq!(ledger.last().map(|r| r.depth), Some(4));
    }

    #[test]
    fn test_record_ids_unique() {
        assert_ne!(record(3, 10).id, record(3, 10).id);
    }
}
