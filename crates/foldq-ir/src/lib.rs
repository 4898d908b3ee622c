//! foldq Circuit Description
//!
//! This crate turns a residue count and an interaction-complexity flag into
//! the gate sequence that encodes a simplified protein conformation.
//!
//! # Encoding
//!
//! - Each residue is one qubit. Its local torsional degree of freedom is a
//!   single [`GateOp::Rotation`] whose angle grows with the residue index.
//! - Residue interactions are [`GateOp::Entangle`] gates: a nearest-neighbour
//!   chain by default, or every unordered pair when complex gates are
//!   requested (`O(n)` versus `O(n²)` gates).
//! - [`CircuitDescription::depth`] counts the layers that result when gates
//!   on disjoint qubits run concurrently, computed over a [`GateDag`].
//!
//! # Example
//!
//! ```rust
//! use foldq_ir::{CircuitDescription, GateOp};
//!
//! let circuit = CircuitDescription::build(3, true).unwrap();
//! assert_eq!(circuit.gates().len(), 3 + 3);
//! assert!(matches!(circuit.gates()[0], GateOp::Rotation { .. }));
//! ```

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::{
    BASE_ROTATION_ANGLE, CircuitDescription, MAX_QUBITS, MIN_QUBITS, Topology, rotation_angle,
};
pub use dag::{GateDag, NodeIndex};
pub use error::{IrError, IrResult};
pub use gate::GateOp;
pub use qubit::QubitId;
