//! Operator command implementation.

use anyhow::Result;
use console::style;

use foldq_core::AnalyzerConfig;
use foldq_hamiltonian::PolarityTensor;

use super::common::{create_session, render_analysis, render_tensor};

/// Execute the operator command.
pub fn execute(
    config: &AnalyzerConfig,
    size: Option<usize>,
    coupling: Option<f64>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let size = size.unwrap_or(config.operator.tensor_size);
    let coupling = coupling.unwrap_or(config.operator.coupling);
    let seed = seed.unwrap_or(config.operator.seed);

    let tensor = PolarityTensor::example(size, seed)?;
    let mut session = create_session(config, None);
    session.build_operator_with_coupling(&tensor, coupling)?;
    let analysis = session.analyze_operator()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!(
        "{} Example polarity tensor ({size}x{size}, seed {seed}):",
        style("→").cyan().bold()
    );
    print!("{}", render_tensor(&tensor));
    println!(
        "\n{} Polarity operator (coupling {coupling}):",
        style("✓").green().bold()
    );
    print!("{}", render_analysis(&analysis));

    Ok(())
}
