//! Configuration for the foldq analyzer.
//!
//! Supports loading configuration from:
//! 1. A YAML file (`--config <file>`, else `~/.foldq/config.yaml` if present)
//! 2. Environment variables with the `FOLDQ_` prefix
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use foldq_hamiltonian::{DEFAULT_COUPLING, DEFAULT_EXAMPLE_SEED, MAX_TENSOR_SIZE};
use foldq_ir::{MAX_QUBITS, MIN_QUBITS};

/// Complete analyzer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Default circuit parameters.
    pub circuit: CircuitConfig,

    /// Simulation settings.
    pub simulation: SimulationConfig,

    /// Example operator settings.
    pub operator: OperatorConfig,

    /// Output settings.
    pub display: DisplayConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Default circuit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitConfig {
    /// Residue count (2-10).
    #[serde(default = "default_qubits")]
    pub qubits: u32,

    /// All-to-all interactions instead of a linear chain.
    #[serde(default = "default_true")]
    pub complex_gates: bool,
}

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Shots per run.
    #[serde(default = "default_shots")]
    pub shots: u32,

    /// Sampling seed; unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Qubit limit of the local simulator.
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,
}

/// Example operator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorConfig {
    /// Dimension of the example polarity tensor (1-128).
    #[serde(default = "default_tensor_size")]
    pub tensor_size: usize,

    /// Coupling scalar applied to every coefficient.
    #[serde(default = "default_coupling")]
    pub coupling: f64,

    /// Seed of the example tensor.
    #[serde(default = "default_tensor_seed")]
    pub seed: u64,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Initial GUI-mode flag.
    #[serde(default = "default_true")]
    pub gui: bool,

    /// Rows in the results table.
    #[serde(default = "default_top_states")]
    pub top_states: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_qubits() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_shots() -> u32 {
    1024
}

fn default_max_qubits() -> u32 {
    20
}

fn default_tensor_size() -> usize {
    5
}

fn default_coupling() -> f64 {
    DEFAULT_COUPLING
}

fn default_tensor_seed() -> u64 {
    DEFAULT_EXAMPLE_SEED
}

fn default_top_states() -> usize {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            qubits: default_qubits(),
            complex_gates: true,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            shots: default_shots(),
            seed: None,
            max_qubits: default_max_qubits(),
        }
    }
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            tensor_size: default_tensor_size(),
            coupling: default_coupling(),
            seed: default_tensor_seed(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            gui: true,
            top_states: default_top_states(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a YAML document.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        serde_yaml_ng::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;

        let config = Self::from_yaml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// `~/.foldq/config.yaml`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".foldq").join("config.yaml"))
    }

    /// Load configuration with the following precedence:
    /// 1. `config_file` if given, else the default path if it exists
    /// 2. Environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(path)?,
                None => Self::default(),
            },
        };

        let config = config.merge_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `FOLDQ_*` overrides obtained through `lookup`.
    ///
    /// Only variables that are set and parse override the current values.
    pub fn merge_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|v| v.trim().parse().ok())
        }

        // Circuit
        if let Some(v) = parsed(&lookup, "FOLDQ_QUBITS") {
            self.circuit.qubits = v;
        }
        if let Some(v) = parsed(&lookup, "FOLDQ_COMPLEX_GATES") {
            self.circuit.complex_gates = v;
        }

        // Simulation
        if let Some(v) = parsed(&lookup, "FOLDQ_SHOTS") {
            self.simulation.shots = v;
        }
        if let Some(v) = parsed(&lookup, "FOLDQ_SEED") {
            self.simulation.seed = Some(v);
        }
        if let Some(v) = parsed(&lookup, "FOLDQ_MAX_QUBITS") {
            self.simulation.max_qubits = v;
        }

        // Operator
        if let Some(v) = parsed(&lookup, "FOLDQ_TENSOR_SIZE") {
            self.operator.tensor_size = v;
        }
        if let Some(v) = parsed(&lookup, "FOLDQ_COUPLING") {
            self.operator.coupling = v;
        }
        if let Some(v) = parsed(&lookup, "FOLDQ_TENSOR_SEED") {
            self.operator.seed = v;
        }

        // Display
        if let Some(v) = parsed(&lookup, "FOLDQ_GUI") {
            self.display.gui = v;
        }
        if let Some(v) = parsed(&lookup, "FOLDQ_TOP_STATES") {
            self.display.top_states = v;
        }

        // Logging
        if let Some(v) = lookup("FOLDQ_LOG_LEVEL") {
            self.logging.level = v;
        }

        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_QUBITS..=MAX_QUBITS).contains(&self.circuit.qubits) {
            return Err(ConfigError::ValidationError(format!(
                "circuit.qubits must be between {MIN_QUBITS} and {MAX_QUBITS}, got {}",
                self.circuit.qubits
            )));
        }

        if self.simulation.shots == 0 {
            return Err(ConfigError::ValidationError(
                "simulation.shots must be greater than 0".to_string(),
            ));
        }

        if self.simulation.max_qubits < MAX_QUBITS {
            return Err(ConfigError::ValidationError(format!(
                "simulation.max_qubits must be at least {MAX_QUBITS}, got {}",
                self.simulation.max_qubits
            )));
        }

        if !(1..=MAX_TENSOR_SIZE).contains(&self.operator.tensor_size) {
            return Err(ConfigError::ValidationError(format!(
                "operator.tensor_size must be between 1 and {MAX_TENSOR_SIZE}, got {}",
                self.operator.tensor_size
            )));
        }

        if !self.operator.coupling.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "operator.coupling must be finite, got {}",
                self.operator.coupling
            )));
        }

        if self.display.top_states == 0 {
            return Err(ConfigError::ValidationError(
                "display.top_states must be greater than 0".to_string(),
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
