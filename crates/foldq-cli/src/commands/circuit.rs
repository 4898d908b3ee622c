//! Circuit command implementation.

use anyhow::Result;
use console::style;

use foldq_core::AnalyzerConfig;
use foldq_ir::CircuitDescription;

use super::common::{circuit_params, render_layers, render_wires};

/// Execute the circuit command.
pub fn execute(
    config: &AnalyzerConfig,
    qubits: Option<u32>,
    linear: bool,
    complex: bool,
) -> Result<()> {
    let (qubits, complex) = circuit_params(config, qubits, linear, complex);
    let circuit = CircuitDescription::build(qubits, complex)?;

    println!(
        "{} Conformation circuit ({})\n",
        style("→").cyan().bold(),
        if complex { "all-to-all" } else { "linear chain" }
    );
    print!("{}", render_layers(&circuit));

    if config.display.gui {
        println!();
        print!("{}", render_wires(&circuit));
    }

    Ok(())
}
