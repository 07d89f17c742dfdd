//! Action-dependency graph between KMAs.
//!
//! KMA `A` depends on KMA `B` when one of `A`'s dependencies is the text of
//! one of `B`'s actions. Dependencies name prerequisite *actions*, which may
//! belong to any KMA, so matching is by action text rather than KMA name.

use std::collections::HashMap;

use chek_core::entities::GapEntry;
use rustworkx_core::petgraph::Direction;
use rustworkx_core::petgraph::algo::{tarjan_scc, toposort};
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};

use crate::error::RoadmapError;

/// Directed graph over gap entries; edges run prerequisite → dependent.
///
/// Node weights are indices into the gap slice the graph was built from.
/// Zero-gap entries are nodes without edges: they neither wait for nor
/// satisfy anything.
pub struct DependencyGraph {
    graph: DiGraph<usize, ()>,
    names: Vec<String>,
}

impl DependencyGraph {
    #[must_use]
    pub fn build(gaps: &[GapEntry]) -> Self {
        let mut graph = DiGraph::with_capacity(gaps.len(), gaps.len());
        let nodes: Vec<NodeIndex> = (0..gaps.len()).map(|i| graph.add_node(i)).collect();

        let mut providers: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, gap) in gaps.iter().enumerate() {
            if gap.level_gap == 0 {
                continue;
            }
            for action in &gap.actions {
                let entry = providers.entry(action.as_str()).or_default();
                if !entry.contains(&i) {
                    entry.push(i);
                }
            }
        }

        for (dependent, gap) in gaps.iter().enumerate() {
            if gap.level_gap == 0 {
                continue;
            }
            let mut prerequisites: Vec<usize> = gap
                .dependencies
                .iter()
                .filter_map(|dep| providers.get(dep.as_str()))
                .flatten()
                .copied()
                .filter(|&p| p != dependent)
                .collect();
            prerequisites.sort_unstable();
            prerequisites.dedup();
            for prerequisite in prerequisites {
                graph.add_edge(nodes[prerequisite], nodes[dependent], ());
            }
        }

        Self {
            graph,
            names: gaps.iter().map(|g| g.kma_name.clone()).collect(),
        }
    }

    /// Gap indices in an order where every prerequisite precedes its dependents.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::CyclicDependency` naming every KMA in the cycle's
    /// strongly connected component, in input order.
    pub fn order(&self) -> Result<Vec<usize>, RoadmapError> {
        match toposort(&self.graph, None) {
            Ok(sorted) => Ok(sorted.into_iter().map(|idx| self.graph[idx]).collect()),
            Err(cycle) => Err(RoadmapError::CyclicDependency {
                kmas: self.cycle_members(cycle.node_id()),
            }),
        }
    }

    /// Gap indices of the direct prerequisites of `index`.
    #[must_use]
    pub fn prerequisites(&self, index: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .graph
            .neighbors_directed(NodeIndex::new(index), Direction::Incoming)
            .map(|idx| self.graph[idx])
            .collect();
        out.sort_unstable();
        out
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn has_cycles(&self) -> bool {
        toposort(&self.graph, None).is_err()
    }

    fn cycle_members(&self, seed: NodeIndex) -> Vec<String> {
        let component = tarjan_scc(&self.graph)
            .into_iter()
            .find(|scc| scc.contains(&seed))
            .unwrap_or_else(|| vec![seed]);
        let mut indices: Vec<usize> = component.into_iter().map(|idx| self.graph[idx]).collect();
        indices.sort_unstable();
        indices.into_iter().map(|i| self.names[i].clone()).collect()
    }
}
