//! Property-based tests for the conformation circuit builder.
//!
//! Gate counts and depth bounds must hold for every supported residue count,
//! and every unsupported count must be rejected.

use foldq_ir::{CircuitDescription, GateDag, GateOp, IrError, MAX_QUBITS, MIN_QUBITS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_gate_counts(n in MIN_QUBITS..=MAX_QUBITS) {
        let circuit = CircuitDescription::build(n, false).unwrap();
        prop_assert_eq!(circuit.rotation_count(), n as usize);
        prop_assert_eq!(circuit.entangle_count(), n as usize - 1);
        prop_assert_eq!(circuit.depth(), n as usize);
    }

    #[test]
    fn all_to_all_gate_counts(n in MIN_QUBITS..=MAX_QUBITS) {
        let circuit = CircuitDescription::build(n, true).unwrap();
        let n = n as usize;
        prop_assert_eq!(circuit.rotation_count(), n);
        prop_assert_eq!(circuit.entangle_count(), n * (n - 1) / 2);
    }

    #[test]
    fn depth_matches_independent_layering(n in MIN_QUBITS..=MAX_QUBITS, complex in any::<bool>()) {
        let circuit = CircuitDescription::build(n, complex).unwrap();
        let dag = GateDag::from_gates(n, circuit.gates()).unwrap();
        prop_assert_eq!(circuit.depth(), dag.depth());
        prop_assert!(circuit.depth() >= 1);
        prop_assert!(circuit.depth() <= circuit.gates().len());
    }

    #[test]
    fn all_to_all_is_never_shallower(n in MIN_QUBITS..=MAX_QUBITS) {
        let linear = CircuitDescription::build(n, false).unwrap();
        let full = CircuitDescription::build(n, true).unwrap();
        prop_assert!(full.depth() >= linear.depth());
    }

    #[test]
    fn every_qubit_rotated_once(n in MIN_QUBITS..=MAX_QUBITS, complex in any::<bool>()) {
        let circuit = CircuitDescription::build(n, complex).unwrap();
        let mut rotated: Vec<u32> = circuit
            .gates()
            .iter()
            .filter_map(|g| match g {
                GateOp::Rotation { qubit, angle } => {
                    assert!(*angle != 0.0);
                    Some(qubit.0)
                }
                GateOp::Entangle { .. } => None,
            })
            .collect();
        rotated.sort_unstable();
        prop_assert_eq!(rotated, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_rejected(n in prop_oneof![0u32..MIN_QUBITS, (MAX_QUBITS + 1)..1000u32], complex in any::<bool>()) {
        let is_range_error = matches!(
            CircuitDescription::build(n, complex),
            Err(IrError::QubitCountOutOfRange { .. })
        );
        prop_assert!(is_range_error);
    }
}
