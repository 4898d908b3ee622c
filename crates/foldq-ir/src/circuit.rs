//! Protein conformation circuits.

use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

use crate::dag::GateDag;
use crate::error::{IrError, IrResult};
use crate::gate::GateOp;
use crate::qubit::QubitId;

/// Smallest supported residue count.
pub const MIN_QUBITS: u32 = 2;

/// Largest supported residue count.
pub const MAX_QUBITS: u32 = 10;

/// Torsion angle step; qubit `i` rotates by `(i + 1)` steps.
pub const BASE_ROTATION_ANGLE: f64 = PI / 8.0;

/// Rotation angle assigned to the residue at `index`.
#[inline]
pub fn rotation_angle(index: u32) -> f64 {
    BASE_ROTATION_ANGLE * f64::from(index + 1)
}

/// Interaction topology between residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Topology {
    /// Nearest-neighbour chain `(i, i + 1)`.
    Linear,
    /// Every unordered pair `(i, j)`, `i < j`.
    AllToAll,
}

impl Topology {
    /// Topology selected by the interaction-complexity flag.
    pub fn from_complex_flag(use_complex_gates: bool) -> Self {
        if use_complex_gates {
            Topology::AllToAll
        } else {
            Topology::Linear
        }
    }

    /// Residue pairs coupled by this topology, in emission order.
    pub fn pairs(self, num_qubits: u32) -> Vec<(u32, u32)> {
        match self {
            Topology::Linear => (0..num_qubits.saturating_sub(1)).map(|i| (i, i + 1)).collect(),
            Topology::AllToAll => (0..num_qubits)
                .flat_map(|i| ((i + 1)..num_qubits).map(move |j| (i, j)))
                .collect(),
        }
    }
}

/// A built circuit: the ordered gate list for one conformation encoding.
///
/// Immutable once built. `depth` is the number of ASAP layers of the gates
/// actually emitted, not an estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitDescription {
    qubit_count: u32,
    use_complex_gates: bool,
    gates: Vec<GateOp>,
    depth: usize,
    #[serde(skip)]
    layers: Vec<Vec<usize>>,
}

impl CircuitDescription {
    /// Build the conformation circuit for `qubit_count` residues.
    ///
    /// Every qubit gets one rotation with angle [`rotation_angle`]. Residues
    /// are then coupled along a linear chain, or all-to-all when
    /// `use_complex_gates` is set.
    ///
    /// # Errors
    ///
    /// [`IrError::QubitCountOutOfRange`] when `qubit_count` is outside
    /// `[MIN_QUBITS, MAX_QUBITS]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foldq_ir::CircuitDescription;
    ///
    /// let circuit = CircuitDescription::build(4, false).unwrap();
    /// assert_eq!(circuit.rotation_count(), 4);
    /// assert_eq!(circuit.entangle_count(), 3);
    /// assert_eq!(circuit.depth(), 4);
    /// ```
    pub fn build(qubit_count: u32, use_complex_gates: bool) -> IrResult<Self> {
        if !(MIN_QUBITS..=MAX_QUBITS).contains(&qubit_count) {
            return Err(IrError::QubitCountOutOfRange {
                got: qubit_count,
                min: MIN_QUBITS,
                max: MAX_QUBITS,
            });
        }

        let topology = Topology::from_complex_flag(use_complex_gates);
        let pairs = topology.pairs(qubit_count);

        let mut gates = Vec::with_capacity(qubit_count as usize + pairs.len());
        gates.extend((0..qubit_count).map(|q| GateOp::rotation(q, rotation_angle(q))));
        gates.extend(pairs.into_iter().map(|(a, b)| GateOp::entangle(a, b)));

        let layers = GateDag::from_gates(qubit_count, &gates)?.layers();
        let depth = layers.len();

        debug!(
            qubit_count,
            ?topology,
            gates = gates.len(),
            depth,
            "built conformation circuit"
        );

        Ok(Self {
            qubit_count,
            use_complex_gates,
            gates,
            depth,
            layers,
        })
    }

    /// Number of qubits (residues).
    pub fn qubit_count(&self) -> u32 {
        self.qubit_count
    }

    /// Whether all-to-all interactions were requested.
    pub fn use_complex_gates(&self) -> bool {
        self.use_complex_gates
    }

    /// Interaction topology of the entangling gates.
    pub fn topology(&self) -> Topology {
        Topology::from_complex_flag(self.use_complex_gates)
    }

    /// The ordered gate list.
    pub fn gates(&self) -> &[GateOp] {
        &self.gates
    }

    /// Number of sequential gate layers.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Gate positions grouped by layer.
    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    /// Number of rotation gates.
    pub fn rotation_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_rotation()).count()
    }

    /// Number of entangling gates.
    pub fn entangle_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_entangle()).count()
    }

    /// Qubit ids of the register, in index order.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        (0..self.qubit_count).map(QubitId)
    }
}
