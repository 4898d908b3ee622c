//! Operator construction and analysis over whole tensors.

use foldq_hamiltonian::{
    HamiltonianError, OperatorBuilder, PauliTerm, PolarityTensor, SIGNIFICANCE_CUTOFF, analyze,
};
use proptest::prelude::*;

#[test]
fn zero_tensor_has_no_terms() {
    let op = OperatorBuilder::new().build(&PolarityTensor::zeros(4)).unwrap();
    assert_eq!(op.n_terms(), 0);
    assert_eq!(op.num_qubits(), 4);

    let analysis = analyze(&op);
    assert_eq!(analysis.term_count, 0);
    assert_eq!(analysis.coefficient_range, None);
}

#[test]
fn off_diagonal_pair_gives_single_zz() {
    let tensor = PolarityTensor::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
    let op = OperatorBuilder::new().build(&tensor).unwrap();
    assert_eq!(op.n_terms(), 1);
    assert_eq!(op.terms()[0].pauli, PauliTerm::zz(0, 1));
    assert_eq!(op.terms()[0].coeff, 1.0);
}

#[test]
fn malformed_tensors_rejected() {
    let builder = OperatorBuilder::new();
    assert!(matches!(
        builder.build(&PolarityTensor::new(vec![])),
        Err(HamiltonianError::EmptyTensor)
    ));
    assert!(matches!(
        builder.build(&PolarityTensor::new(vec![vec![1.0, 2.0, 3.0], vec![2.0, 1.0, 0.0]])),
        Err(HamiltonianError::NotSquare { .. })
    ));
    assert!(matches!(
        builder.build(&PolarityTensor::new(vec![vec![0.0, 1.0], vec![2.0, 0.0]])),
        Err(HamiltonianError::NotSymmetric { .. })
    ));
    assert!(matches!(
        builder.build(&PolarityTensor::new(vec![vec![0.0, f64::NAN], vec![f64::NAN, 0.0]])),
        Err(HamiltonianError::NonFinite { .. })
    ));
}

#[test]
fn coupling_scales_every_coefficient() {
    let tensor = PolarityTensor::example(5, 42).unwrap();
    let base = OperatorBuilder::new().build(&tensor).unwrap();
    let scaled = OperatorBuilder::new().with_coupling(-2.0).build(&tensor).unwrap();

    assert_eq!(base.n_terms(), scaled.n_terms());
    for (a, b) in base.terms().iter().zip(scaled.terms()) {
        assert_eq!(a.pauli, b.pauli);
        assert!((b.coeff + 2.0 * a.coeff).abs() < 1e-12);
    }
}

#[test]
fn overflowing_coupling_is_rejected_not_stored() {
    let tensor = PolarityTensor::new(vec![vec![10.0, 0.0], vec![0.0, 0.0]]);
    let result = OperatorBuilder::new().with_coupling(1e308).build(&tensor);
    assert!(matches!(result, Err(HamiltonianError::CoefficientOverflow { .. })));

    // The same coupling on small entries stays finite and is accepted.
    let tensor = PolarityTensor::new(vec![vec![1e-300, 0.0], vec![0.0, 0.0]]);
    let op = OperatorBuilder::new().with_coupling(1e308).build(&tensor).unwrap();
    let analysis = analyze(&op);
    assert!(analysis.total_abs_weight.is_finite());
    assert_eq!(op.n_terms(), 1);
}

#[test]
fn example_tensor_is_dense() {
    let op = OperatorBuilder::new().build(&PolarityTensor::example(5, 42).unwrap()).unwrap();
    // 5 diagonal terms plus 10 couplings.
    assert_eq!(op.n_terms(), 15);
    let analysis = analyze(&op);
    assert_eq!(analysis.max_locality, 2);
    assert_eq!(analysis.dominant_terms.len(), 5);
    assert_eq!(analysis.locality_histogram.get(&1), Some(&5));
}

fn symmetric_tensor() -> impl Strategy<Value = PolarityTensor> {
    (1usize..=6).prop_flat_map(|n| {
        prop::collection::vec(prop_oneof![Just(0.0), -3.0f64..3.0], n * n).prop_map(move |v| {
            let rows: Vec<Vec<f64>> = (0..n)
                .map(|i| {
                    (0..n)
                        .map(|j| if i <= j { v[i * n + j] } else { v[j * n + i] })
                        .collect()
                })
                .collect();
            PolarityTensor::new(rows)
        })
    })
}

proptest! {
    #[test]
    fn terms_match_significant_entries(tensor in symmetric_tensor()) {
        let n = tensor.dim();
        let op = OperatorBuilder::new().build(&tensor).unwrap();

        let expected = (0..n)
            .flat_map(|i| (i..n).map(move |j| (i, j)))
            .filter(|&(i, j)| tensor.get(i, j).unwrap().abs() > SIGNIFICANCE_CUTOFF)
            .count();
        prop_assert_eq!(op.n_terms(), expected);

        for term in op.terms() {
            let ops = term.pauli.ops();
            prop_assert!(matches!(ops.len(), 1 | 2));
            let (i, j) = (ops[0].0 as usize, ops[ops.len() - 1].0 as usize);
            prop_assert_eq!(term.coeff, tensor.get(i, j).unwrap());
        }
    }

    #[test]
    fn analysis_is_consistent(tensor in symmetric_tensor()) {
        let op = OperatorBuilder::new().build(&tensor).unwrap();
        let a = analyze(&op);

        prop_assert_eq!(a.term_count, op.n_terms());
        prop_assert!(a.max_locality <= 2);
        prop_assert_eq!(a.locality_histogram.values().sum::<usize>(), a.term_count);
        prop_assert_eq!(a.coefficient_range.is_none(), op.is_empty());
        if let Some((lo, hi)) = a.coefficient_range {
            prop_assert!(lo <= hi);
            prop_assert!(a.total_abs_weight >= hi.abs().max(lo.abs()));
        }
        for pair in a.dominant_terms.windows(2) {
            prop_assert!(pair[0].coeff.abs() >= pair[1].coeff.abs());
        }
    }
}
