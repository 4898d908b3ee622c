//! foldq Analyzer Core
//!
//! Orchestrates the protein conformation workflow on top of the circuit,
//! operator and simulator crates:
//!
//! - [`SimulationRunner`]: runs a circuit on a [`foldq_hal::Backend`] and
//!   reduces the counts to a [`MeasurementDistribution`]
//! - [`HistoryLedger`]: append-only provenance of completed runs
//! - [`AnalyzerSession`]: current circuit, current operator, display mode
//!   and history behind explicit operations
//! - [`AnalyzerConfig`]: YAML plus environment configuration for front ends
//!
//! # Example
//!
//! ```ignore
//! use foldq_adapter_sim::SimulatorBackend;
//! use foldq_core::AnalyzerSession;
//!
//! let mut session = AnalyzerSession::new(SimulatorBackend::new());
//! session.rebuild_circuit(3, false)?;
//! let record = session.run_simulation(1024).await?;
//! assert_eq!(record.most_probable_state.len(), 3);
//! ```

pub mod config;
pub mod distribution;
pub mod error;
pub mod history;
pub mod runner;
pub mod session;

pub use config::{AnalyzerConfig, ConfigError};
pub use distribution::MeasurementDistribution;
pub use error::{AnalyzerError, CoreResult};
pub use history::{HistoryLedger, RecordSummary, SimulationRecord};
pub use runner::{SimulationOutcome, SimulationRunner, to_native};
pub use session::AnalyzerSession;
