//! Qubit-dependency DAG over an ordered gate list.
//!
//! Each gate is a node; an edge `a → b` labelled with qubit `q` means `b` is
//! the next gate after `a` on wire `q`. Gates with no path between them act
//! on disjoint qubits at that point and may share a layer. Layering is ASAP:
//! a gate sits one layer after the latest of its predecessors.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;

use crate::error::{IrError, IrResult};
use crate::gate::GateOp;
use crate::qubit::QubitId;

/// Node index type for the gate DAG.
pub type NodeIndex = PetNodeIndex<u32>;

/// Dependency graph of a gate sequence.
#[derive(Debug, Clone)]
pub struct GateDag {
    /// Nodes carry the position of the gate in the source sequence.
    graph: DiGraph<usize, QubitId, u32>,
    /// Node for each gate, indexed by gate position.
    nodes: Vec<NodeIndex>,
}

impl GateDag {
    /// Build the DAG for `gates` on a register of `num_qubits` qubits.
    ///
    /// Fails if a gate addresses a qubit outside the register or an
    /// entangling gate names the same qubit twice.
    pub fn from_gates(num_qubits: u32, gates: &[GateOp]) -> IrResult<Self> {
        let mut graph = DiGraph::with_capacity(gates.len(), gates.len() * 2);
        let mut nodes = Vec::with_capacity(gates.len());
        let mut wire_front: FxHashMap<QubitId, NodeIndex> =
            FxHashMap::with_capacity_and_hasher(num_qubits as usize, Default::default());

        for (position, gate) in gates.iter().enumerate() {
            if let GateOp::Entangle { qubit_a, qubit_b } = gate {
                if qubit_a == qubit_b {
                    return Err(IrError::DuplicateQubit(*qubit_a));
                }
            }

            let node = graph.add_node(position);
            for qubit in gate.qubits() {
                if qubit.0 >= num_qubits {
                    return Err(IrError::QubitNotFound { qubit, num_qubits });
                }
                if let Some(prev) = wire_front.insert(qubit, node) {
                    graph.add_edge(prev, node, qubit);
                }
            }
            nodes.push(node);
        }

        Ok(Self { graph, nodes })
    }

    /// Number of gates in the DAG.
    pub fn num_ops(&self) -> usize {
        self.nodes.len()
    }

    /// 1-based ASAP layer of every gate, indexed by gate position.
    ///
    /// Gates are inserted in sequence order and edges only point forward,
    /// so insertion order is already topological.
    pub fn gate_layers(&self) -> Vec<usize> {
        let mut layer_of: Vec<usize> = vec![0; self.nodes.len()];

        for (position, &node) in self.nodes.iter().enumerate() {
            let max_pred = self
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|e| layer_of[self.graph[e.source()]])
                .max()
                .unwrap_or(0);
            layer_of[position] = max_pred + 1;
        }

        layer_of
    }

    /// Number of sequential layers.
    pub fn depth(&self) -> usize {
        self.gate_layers().into_iter().max().unwrap_or(0)
    }

    /// Gate positions grouped by layer, in sequence order within a layer.
    pub fn layers(&self) -> Vec<Vec<usize>> {
        let layer_of = self.gate_layers();
        let depth = layer_of.iter().copied().max().unwrap_or(0);
        let mut layers = vec![Vec::new(); depth];
        for (position, layer) in layer_of.into_iter().enumerate() {
            layers[layer - 1].push(position);
        }
        layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_rotations_share_layer() {
        let gates: Vec<_> = (0..4).map(|q| GateOp::rotation(q, 0.1)).collect();
        let dag = GateDag::from_gates(4, &gates).unwrap();
        assert_eq!(dag.depth(), 1);
        assert_eq!(dag.layers(), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_chain_is_sequential() {
        let gates = vec![
            GateOp::entangle(0, 1),
            GateOp::entangle(1, 2),
            GateOp::entangle(2, 3),
        ];
        let dag = GateDag::from_gates(4, &gates).unwrap();
        assert_eq!(dag.depth(), 3);
        assert_eq!(dag.gate_layers(), vec![1, 2, 3]);
    }

    #[test]
    fn test_disjoint_pairs_share_layer() {
        let gates = vec![GateOp::entangle(0, 1), GateOp::entangle(2, 3)];
        let dag = GateDag::from_gates(4, &gates).unwrap();
        assert_eq!(dag.depth(), 1);
    }

    #[test]
    fn test_empty_dag() {
        let dag = GateDag::from_gates(3, &[]).unwrap();
        assert_eq!(dag.num_ops(), 0);
        assert_eq!(dag.depth(), 0);
        assert!(dag.layers().is_empty());
    }

    #[test]
    fn test_out_of_range_qubit() {
        let result = GateDag::from_gates(2, &[GateOp::rotation(2, 0.1)]);
        assert!(matches!(
            result,
            Err(IrError::QubitNotFound { qubit: QubitId(2), num_qubits: 2 })
        ));
    }

    #[test]
    fn test_duplicate_qubit() {
        let result = GateDag::from_gates(2, &[GateOp::entangle(1, 1)]);
        assert!(matches!(result, Err(IrError::DuplicateQubit(QubitId(1)))));
    }
}
