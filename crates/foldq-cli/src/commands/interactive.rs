//! Interactive menu.
//!
//! Each menu choice maps to one session operation. Errors are printed and
//! the menu continues; end of input quits.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use console::style;

use foldq_core::{AnalyzerConfig, AnalyzerSession};
use foldq_hamiltonian::{MAX_TENSOR_SIZE, PolarityTensor};

use super::common::{
    create_session, print_most_probable, render_analysis, render_history, render_layers,
    render_results, render_statistics, render_tensor, render_wires, spinner,
};

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateCircuit,
    ShowCircuit,
    Simulate,
    ShowResults,
    BuildOperator,
    AnalyzeOperator,
    ToggleGui,
    History,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim() {
            "1" => MenuChoice::CreateCircuit,
            "2" => MenuChoice::ShowCircuit,
            "3" => MenuChoice::Simulate,
            "4" => MenuChoice::ShowResults,
            "5" => MenuChoice::BuildOperator,
            "6" => MenuChoice::AnalyzeOperator,
            "7" => MenuChoice::ToggleGui,
            "8" => MenuChoice::History,
            "9" | "q" | "quit" => MenuChoice::Quit,
            other => anyhow::bail!("Invalid option '{other}', choose a number from 1 to 9"),
        })
    }
}

/// Execute the interactive command on stdin.
pub async fn execute(config: &AnalyzerConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run(config, &mut input).await?;
    Ok(())
}

/// Drive the menu from `input` until the user quits or input ends.
///
/// Returns the session as it stood when the menu exited.
pub async fn run<R: BufRead>(config: &AnalyzerConfig, input: &mut R) -> Result<AnalyzerSession> {
    let mut session = create_session(config, None);

    loop {
        print_menu(session.gui_mode());
        let Some(line) = prompt(input, "Select an option (1-9): ")? else {
            break;
        };

        let outcome = match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Quit) => break,
            Ok(choice) => handle(choice, &mut session, config, input).await,
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            println!("{} {}", style("Error:").red().bold(), e);
        }
    }

    println!("\n{}", style("Goodbye.").blue());
    Ok(session)
}

async fn handle<R: BufRead>(
    choice: MenuChoice,
    session: &mut AnalyzerSession,
    config: &AnalyzerConfig,
    input: &mut R,
) -> Result<()> {
    match choice {
        MenuChoice::CreateCircuit => {
            let qubits = ask(input, "Number of qubits (2-10)", config.circuit.qubits)?;
            let complex = ask_yes_no(input, "Apply all-to-all interactions?", config.circuit.complex_gates)?;
            let circuit = session.rebuild_circuit(qubits, complex)?;
            println!(
                "{} Circuit created with {} qubits and depth {}",
                style("✓").green().bold(),
                circuit.qubit_count(),
                circuit.depth()
            );
        }

        MenuChoice::ShowCircuit => {
            let circuit = session
                .current_circuit()
                .context("No circuit to show; create one first")?;
            print!("{}", render_layers(circuit));
            if session.gui_mode() {
                println!();
                print!("{}", render_wires(circuit));
            }
        }

        MenuChoice::Simulate => {
            let shots = ask(input, "Number of shots", config.simulation.shots)?;
            let progress = spinner(format!("Simulating with {shots} shots..."));
            let outcome = session.run_simulation(shots).await;
            progress.finish_and_clear();
            let record = outcome?;
            println!(
                "{} Simulation completed in {:.3}s",
                style("✓").green().bold(),
                record.wall_time_seconds
            );
            print_most_probable(&record);
        }

        MenuChoice::ShowResults => {
            let (Some(dist), Some(record)) = (session.last_distribution(), session.last_record())
            else {
                anyhow::bail!("No results to show; run a simulation first");
            };
            print!(
                "{}",
                render_results(dist, config.display.top_states, session.gui_mode())
            );
            println!("\n{}", style("Statistics:").bold());
            print!("{}", render_statistics(record));
        }

        MenuChoice::BuildOperator => {
            let size = ask(
                input,
                &format!("Tensor size (1-{MAX_TENSOR_SIZE})"),
                config.operator.tensor_size,
            )?;
            let tensor = PolarityTensor::example(size, config.operator.seed)?;
            println!("Generated tensor:");
            print!("{}", render_tensor(&tensor));
            let coupling = ask(input, "Coupling (lambda)", config.operator.coupling)?;
            let operator = session.build_operator_with_coupling(&tensor, coupling)?;
            println!(
                "{} Operator created with {} terms",
                style("✓").green().bold(),
                operator.n_terms()
            );
        }

        MenuChoice::AnalyzeOperator => {
            let analysis = session.analyze_operator()?;
            println!("{}", style("Operator analysis:").bold());
            print!("{}", render_analysis(&analysis));
        }

        MenuChoice::ToggleGui => {
            let enabled = session.toggle_gui_mode();
            println!(
                "{} Graphical display is now {}",
                style("✓").green().bold(),
                if enabled { "on" } else { "off" }
            );
        }

        MenuChoice::History => {
            let summary = session.summary();
            if summary.is_empty() {
                println!("{}", style("Simulation history is empty.").yellow());
            } else {
                println!("{}", style(format!("Simulation history ({} runs):", summary.len())).bold());
                print!("{}", render_history(&summary));
            }
        }

        MenuChoice::Quit => {}
    }
    Ok(())
}

fn print_menu(gui: bool) {
    println!("\n{}", "=".repeat(60));
    println!("{}", style("  foldq - protein conformation analyzer").bold());
    println!("{}", "=".repeat(60));
    println!("--- Circuit simulation ---");
    println!("1. Create / rebuild circuit");
    println!("2. Show current circuit");
    println!("3. Simulate");
    println!("4. Show simulation results");
    println!("--- Hamiltonian analysis ---");
    println!("5. Build operator (from example tensor)");
    println!("6. Analyze current operator");
    println!("--- Utilities ---");
    println!("7. Toggle graphical display (now: {})", if gui { "on" } else { "off" });
    println!("8. Simulation history");
    println!("9. Quit");
    println!("{}", "-".repeat(60));
}

/// Print `question` and read one trimmed line; `None` at end of input.
fn prompt<R: BufRead>(input: &mut R, question: &str) -> Result<Option<String>> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for a value, falling back to `default` on an empty answer.
fn ask<R: BufRead, T>(input: &mut R, question: &str, default: T) -> Result<T>
where
    T: FromStr + std::fmt::Display,
{
    let answer = prompt(input, &format!("{question} [{default}]: "))?.unwrap_or_default();
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid value '{answer}' for {question}"))
}

/// Ask a y/n question; anything but an explicit "n"/"no" keeps `default`.
fn ask_yes_no<R: BufRead>(input: &mut R, question: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    let answer = prompt(input, &format!("{question} ({hint}): "))?
        .unwrap_or_default()
        .to_lowercase();
    Ok(match answer.as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::CreateCircuit);
        assert_eq!(" 9 ".parse::<MenuChoice>().unwrap(), MenuChoice::Quit);
        assert!("10".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_ask_defaults_and_parses() {
        let mut input = Cursor::new("\n7\nabc\n");
        assert_eq!(ask(&mut input, "n", 5u32).unwrap(), 5);
        assert_eq!(ask(&mut input, "n", 5u32).unwrap(), 7);
        assert!(ask(&mut input, "n", 5u32).is_err());
        // End of input keeps the default.
        assert_eq!(ask(&mut input, "n", 5u32).unwrap(), 5);
    }

    #[test]
    fn test_ask_yes_no() {
        let mut input = Cursor::new("n\n\nyes\n");
        assert!(!ask_yes_no(&mut input, "q", true).unwrap());
        assert!(ask_yes_no(&mut input, "q", true).unwrap());
        assert!(ask_yes_no(&mut input, "q", false).unwrap());
    }

    #[tokio::test]
    async fn test_scripted_session() {
        let config = AnalyzerConfig::default();
        // Simulate before building (error, keeps going), build a 3-qubit
        // linear circuit, simulate 64 shots, build and analyze an operator,
        // toggle display, show history, quit.
        let script = "3\n\n1\n3\nn\n3\n64\n4\n5\n3\n\n6\n7\n8\n9\n";
        let mut input = Cursor::new(script);
        let session = run(&config, &mut input).await.unwrap();

        // Only the second simulate ran; the first had no circuit.
        assert_eq!(session.history_len(), 1);
        let record = session.last_record().unwrap();
        assert_eq!(record.qubit_count, 3);
        assert!(!record.use_complex_gates);
        assert_eq!(record.shots, 64);
        assert_eq!(record.most_probable_state.len(), 3);

        let circuit = session.current_circuit().unwrap();
        assert_eq!(circuit.qubit_count(), 3);
        assert_eq!(session.current_operator().unwrap().num_qubits(), 3);
        assert!(!session.gui_mode());
    }

    #[tokio::test]
    async fn test_errors_keep_menu_running() {
        let config = AnalyzerConfig::default();
        // Out-of-range qubits, oversized tensor, analyze with no operator,
        // unknown option, then a valid circuit.
        let script = format!(
            "1\n11\n\n5\n{}\n6\n42\n1\n2\ny\n",
            MAX_TENSOR_SIZE + 1
        );
        let mut input = Cursor::new(script);
        let session = run(&config, &mut input).await.unwrap();

        assert!(session.current_operator().is_none());
        assert_eq!(session.history_len(), 0);
        let circuit = session.current_circuit().unwrap();
        assert_eq!(circuit.qubit_count(), 2);
        assert!(circuit.use_complex_gates());
    }

    #[tokio::test]
    async fn test_end_of_input_quits() {
        let mut input = Cursor::new("");
        let session = run(&AnalyzerConfig::default(), &mut input).await.unwrap();
        assert_eq!(session.history_len(), 0);
        assert!(session.current_circuit().is_none());
    }
}
