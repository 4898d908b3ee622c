//! foldq Local Statevector Simulator
//!
//! A [`Backend`](foldq_hal::Backend) that evolves the full statevector and
//! samples measurement outcomes from it. Exact amplitudes, so it is limited
//! to small registers; the default limit of 20 qubits is far above the
//! residue counts the analyzer builds.
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//!
//! # Example
//!
//! ```ignore
//! use foldq_adapter_sim::SimulatorBackend;
//! use foldq_hal::{Backend, NativeCircuit, NativeGate};
//! use foldq_ir::QubitId;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new().with_seed(7);
//!
//!     let mut circuit = NativeCircuit::new(2);
//!     circuit.push(NativeGate::Ry { qubit: QubitId(0), theta: std::f64::consts::FRAC_PI_2 })?;
//!     circuit.push(NativeGate::Cx { control: QubitId(0), target: QubitId(1) })?;
//!
//!     // Expect ~50% "00" and ~50% "11"
//!     let result = backend.execute(&circuit, 1000).await?;
//!     println!("Results: {:?}", result.counts);
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
