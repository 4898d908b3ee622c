//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum encoding of protein conformations",
        style("foldq").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  foldq-ir           Conformation circuit construction");
    println!("  foldq-hamiltonian  Polarity operators and analysis");
    println!("  foldq-hal          Simulator abstraction layer");
    println!("  foldq-core         Runner, history and analyzer session");
    println!("  foldq-cli          Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
