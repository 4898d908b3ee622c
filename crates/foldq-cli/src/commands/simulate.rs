//! Simulate command implementation.

use anyhow::Result;
use console::style;

use foldq_core::AnalyzerConfig;
use foldq_hal::Backend;

use super::common::{
    circuit_params, create_session, print_most_probable, render_results, render_statistics, spinner,
};

/// Execute the simulate command.
pub async fn execute(
    config: &AnalyzerConfig,
    qubits: Option<u32>,
    linear: bool,
    complex: bool,
    shots: Option<u32>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let (qubits, complex) = circuit_params(config, qubits, linear, complex);
    let shots = shots.unwrap_or(config.simulation.shots);

    let mut session = create_session(config, seed);
    let circuit = session.rebuild_circuit(qubits, complex)?;
    let (gates, depth) = (circuit.gates().len(), circuit.depth());

    if !json {
        println!(
            "{} Simulating {} residues ({}) on {} with {} shots",
            style("→").cyan().bold(),
            style(qubits).green(),
            if complex { "all-to-all" } else { "linear chain" },
            style(session.runner().backend().name()).yellow(),
            shots
        );
        println!("  Circuit: {gates} gates, depth {depth}");
    }

    let progress = (!json).then(|| spinner("Running simulation..."));
    let outcome = session.run_simulation(shots).await;
    if let Some(progress) = progress {
        progress.finish_and_clear();
    }
    let record = outcome?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!(
        "\n{} Simulation completed in {:.3}s",
        style("✓").green().bold(),
        record.wall_time_seconds
    );
    print_most_probable(&record);

    if let Some(dist) = session.last_distribution() {
        println!();
        print!("{}", render_results(dist, config.display.top_states, session.gui_mode()));
    }
    println!("\n{}", style("Statistics:").bold());
    print!("{}", render_statistics(&record));

    Ok(())
}
