//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while constructing a circuit description.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Requested residue count is outside the supported range.
    #[error("qubit count must be between {min} and {max}, got {got}")]
    QubitCountOutOfRange {
        /// The requested qubit count.
        got: u32,
        /// Smallest accepted qubit count.
        min: u32,
        /// Largest accepted qubit count.
        max: u32,
    },

    /// A gate addresses a qubit the circuit does not have.
    #[error("Qubit {qubit} not found in circuit with {num_qubits} qubits")]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// A two-qubit gate names the same qubit twice.
    #[error("Duplicate qubit {0} in entangling gate")]
    DuplicateQubit(QubitId),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
