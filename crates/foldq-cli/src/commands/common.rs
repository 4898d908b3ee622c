//! Shared helpers for CLI commands.
//!
//! Renderers return strings so the interactive menu and the one-shot
//! commands print the same text.

use std::fmt::Write as _;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use foldq_adapter_sim::SimulatorBackend;
use foldq_core::{AnalyzerConfig, AnalyzerSession, MeasurementDistribution, RecordSummary, SimulationRecord};
use foldq_hamiltonian::{OperatorAnalysis, PolarityTensor};
use foldq_ir::{CircuitDescription, GateOp};

/// Width of one gate cell in the wire diagram.
const CELL: usize = 11;

/// Resolve the circuit parameters from flags and configuration.
///
/// `--linear` and `--complex` override `circuit.complex_gates`; clap keeps
/// them mutually exclusive.
pub fn circuit_params(
    config: &AnalyzerConfig,
    qubits: Option<u32>,
    linear: bool,
    complex: bool,
) -> (u32, bool) {
    let use_complex_gates = match (linear, complex) {
        (true, _) => false,
        (false, true) => true,
        (false, false) => config.circuit.complex_gates,
    };
    (qubits.unwrap_or(config.circuit.qubits), use_complex_gates)
}

/// A session over the local simulator, configured from `config`.
///
/// `seed` overrides `simulation.seed`.
pub fn create_session(config: &AnalyzerConfig, seed: Option<u64>) -> AnalyzerSession {
    let mut backend = SimulatorBackend::with_max_qubits(config.simulation.max_qubits);
    if let Some(seed) = seed.or(config.simulation.seed) {
        backend = backend.with_seed(seed);
    }
    let mut session = AnalyzerSession::new(backend);
    session.set_gui_mode(config.display.gui);
    session
}

/// A steady-ticking spinner.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(s) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(s);
    }
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Circuit as a list of layers.
pub fn render_layers(circuit: &CircuitDescription) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} qubits, {} gates ({} rotations, {} entangling), depth {}",
        circuit.qubit_count(),
        circuit.gates().len(),
        circuit.rotation_count(),
        circuit.entangle_count(),
        circuit.depth()
    );
    for (i, layer) in circuit.layers().iter().enumerate() {
        let gates: Vec<String> = layer.iter().map(|&g| circuit.gates()[g].to_string()).collect();
        let _ = writeln!(out, "  layer {:>2}: {}", i + 1, gates.join(" | "));
    }
    out
}

/// Circuit as one wire per qubit, one column per layer.
///
/// Rotations show their angle; an entangling gate marks its first qubit
/// with `●` and its second with `⊕`, each naming the partner.
pub fn render_wires(circuit: &CircuitDescription) -> String {
    let n = circuit.qubit_count() as usize;
    let mut rows: Vec<String> = (0..n).map(|q| format!("q{q:<2} ─")).collect();

    for layer in circuit.layers() {
        let mut cells = vec![String::new(); n];
        for &g in layer {
            match circuit.gates()[g] {
                GateOp::Rotation { qubit, angle } => {
                    cells[qubit.index()] = format!("RY({angle:.3})");
                }
                GateOp::Entangle { qubit_a, qubit_b } => {
                    cells[qubit_a.index()] = format!("●→{qubit_b}");
                    cells[qubit_b.index()] = format!("⊕←{qubit_a}");
                }
            }
        }
        for (row, cell) in rows.iter_mut().zip(cells) {
            let pad = CELL.saturating_sub(cell.chars().count());
            let _ = write!(row, "{cell}{}─", "─".repeat(pad));
        }
    }

    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "{row} M");
    }
    out
}

/// Table of the most frequent outcomes, with a bar per row when `bars`.
pub fn render_results(dist: &MeasurementDistribution, top: usize, bars: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:>8} {:>16}", "State", "Count", "Probability (%)");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for (bitstring, count, p) in dist.top(top) {
        let pct = p * 100.0;
        let _ = write!(out, "{bitstring:<14} {count:>8} {pct:>16.2}");
        if bars {
            let _ = write!(out, "  {}", "█".repeat((pct / 2.0).round() as usize));
        }
        out.push('\n');
    }
    if dist.len() > top {
        let _ = writeln!(out, "... and {} more outcomes", dist.len() - top);
    }
    out
}

/// Run statistics of a record.
pub fn render_statistics(record: &SimulationRecord) -> String {
    format!(
        "  Total shots:        {}\n  Distinct states:    {}\n  Simulation time:    {:.3}s\n  Circuit depth:      {}\n",
        record.shots, record.distinct_states, record.wall_time_seconds, record.depth
    )
}

/// One line per recorded run.
pub fn render_history(summary: &[RecordSummary]) -> String {
    let mut out = String::new();
    for r in summary {
        let _ = writeln!(
            out,
            "  {}. [{}] qubits: {}, {}, shots: {}, time: {:.3}s, states: {}, most probable: {} ({:.2}%)",
            r.index,
            r.timestamp.format("%H:%M:%S"),
            r.qubit_count,
            if r.use_complex_gates { "all-to-all" } else { "linear" },
            r.shots,
            r.wall_time_seconds,
            r.distinct_states,
            r.most_probable_state,
            r.most_probable_probability * 100.0
        );
    }
    out
}

/// Operator metrics and its dominant terms.
pub fn render_analysis(analysis: &OperatorAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Pauli terms:        {}", analysis.term_count);
    let _ = writeln!(out, "  Qubits:             {}", analysis.num_qubits);
    let _ = writeln!(out, "  Max locality:       {}", analysis.max_locality);
    match analysis.coefficient_range {
        Some((lo, hi)) => {
            let _ = writeln!(out, "  Coefficient range:  [{lo:.6}, {hi:.6}]");
        }
        None => {
            let _ = writeln!(out, "  Coefficient range:  (empty)");
        }
    }
    let _ = writeln!(out, "  Total |weight|:     {:.6}", analysis.total_abs_weight);
    for (locality, count) in &analysis.locality_histogram {
        let _ = writeln!(out, "  {locality}-local terms:     {count}");
    }

    if !analysis.dominant_terms.is_empty() {
        let _ = writeln!(out, "\n  Top {} terms by magnitude:", analysis.dominant_terms.len());
        for (i, term) in analysis.dominant_terms.iter().enumerate() {
            let _ = writeln!(out, "  {}. {:<15}: {:12.6}", i + 1, term.label, term.coeff);
        }
    }
    out
}

/// Tensor rows with fixed precision.
pub fn render_tensor(tensor: &PolarityTensor) -> String {
    let mut out = String::new();
    for row in tensor.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:8.4}")).collect();
        let _ = writeln!(out, "  [{}]", cells.join(" "));
    }
    out
}

/// Print the most probable state line.
pub fn print_most_probable(record: &SimulationRecord) {
    println!(
        "  Most probable state: {} ({:.2}%)",
        style(&record.most_probable_state).cyan(),
        record.most_probable_probability * 100.0
    );
}
