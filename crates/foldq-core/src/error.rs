//! Session-level errors.

use thiserror::Error;

use foldq_hal::HalError;
use foldq_hamiltonian::HamiltonianError;
use foldq_ir::IrError;

/// Errors returned by analyzer operations.
///
/// Every error leaves the session exactly as it was before the call.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Out-of-range qubit count, zero shots or a malformed tensor.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The operation needs a circuit and none has been built.
    #[error("No circuit has been built; create one first")]
    NoCircuit,

    /// The operation needs an operator and none has been built.
    #[error("No operator has been built; create one first")]
    NoOperator,

    /// The simulator failed or returned unusable counts.
    #[error("Simulation failed: {0}")]
    SimulationFailed(String),
}

impl From<IrError> for AnalyzerError {
    fn from(e: IrError) -> Self {
        AnalyzerError::InvalidParameter(e.to_string())
    }
}

impl From<HamiltonianError> for AnalyzerError {
    fn from(e: HamiltonianError) -> Self {
        AnalyzerError::InvalidParameter(e.to_string())
    }
}

impl From<HalError> for AnalyzerError {
    fn from(e: HalError) -> Self {
        AnalyzerError::SimulationFailed(e.to_string())
    }
}

/// Result type for analyzer operations.
pub type CoreResult<T> = Result<T, AnalyzerError>;
