//! foldq Simulator Abstraction Layer
//!
//! The quantum state simulator is an external collaborator of the analyzer.
//! This crate fixes the contract between the two:
//!
//! - [`NativeCircuit`] / [`NativeGate`]: the gate representation a backend accepts
//! - [`Backend`]: executes a native circuit for a number of shots
//! - [`Counts`] / [`ExecutionResult`]: raw outcome frequencies
//! - [`Capabilities`]: limits a backend advertises up front
//!
//! # Implementing a Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use foldq_hal::{Backend, Capabilities, Counts, ExecutionResult, HalResult, NativeCircuit};
//!
//! struct MyBackend {
//!     capabilities: Capabilities,
//! }
//!
//! #[async_trait]
//! impl Backend for MyBackend {
//!     fn name(&self) -> &str { "my_backend" }
//!
//!     fn capabilities(&self) -> &Capabilities {
//!         &self.capabilities
//!     }
//!
//!     async fn execute(&self, circuit: &NativeCircuit, shots: u32) -> HalResult<ExecutionResult> {
//!         self.validate(circuit, shots)?;
//!         // Run the circuit and tally outcomes
//!         # todo!()
//!     }
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod native;
pub mod result;

pub use backend::Backend;
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use native::{NativeCircuit, NativeGate};
pub use result::{Counts, ExecutionResult};
