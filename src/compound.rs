use std::collections::VecDeque;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use thiserror::Error;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::element::Element;

pub type AtomId = NodeIndex;

/// Errors raised by the valence bookkeeping of a [`Compound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A bond order outside `1..=3` was requested.
    #[error("bond order {0} is not between 1 and 3")]
    InvalidBondOrder(u8),
    /// An atom was asked to bond to itself.
    #[error("atom {0} cannot bond to itself")]
    SelfBond(usize),
    /// An atom id that does not belong to this compound.
    #[error("atom {0} does not belong to this compound")]
    UnknownAtom(usize),
    /// The bond order is larger than what one endpoint has left.
    #[error("bond order {order} exceeds available valence {available} of atom {atom}")]
    ValenceExceeded { atom: usize, order: u8, available: u8 },
    /// The two atoms are already bonded.
    #[error("bond between atoms {a} and {b} already exists")]
    BondExists { a: usize, b: usize },
}

/// An undirected molecular graph with per-atom valence bookkeeping.
///
/// Atoms are kept in insertion order; the first atom added is the root
/// used when saturating the skeleton with hydrogen. Bonds are only formed
/// through [`Compound::bond`], which refuses anything that would overdraw
/// an atom's remaining valence.
pub struct Compound {
    graph: UnGraph<Atom, BondOrder>,
}

impl Compound {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
        }
    }

    pub fn graph(&self) -> &UnGraph<Atom, BondOrder> {
        &self.graph
    }

    pub fn atom(&self, idx: AtomId) -> &Atom {
        &self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: Atom) -> AtomId {
        self.graph.add_node(atom)
    }

    /// Forms a bond of the given order between two atoms.
    ///
    /// Both endpoints lose `order.valence()` of their remaining valence.
    /// Fails without touching the graph if the atoms are the same, if
    /// either one lacks the capacity, or if they are already bonded.
    pub fn bond(&mut self, a: AtomId, b: AtomId, order: BondOrder) -> Result<EdgeIndex, GraphError> {
        if a == b {
            return Err(GraphError::SelfBond(a.index()));
        }
        let needed = order.valence();
        for idx in [a, b] {
            let atom = self
                .graph
                .node_weight(idx)
                .ok_or(GraphError::UnknownAtom(idx.index()))?;
            if needed > atom.remaining_valence() {
                return Err(GraphError::ValenceExceeded {
                    atom: idx.index(),
                    order: needed,
                    available: atom.remaining_valence(),
                });
            }
        }
        if self.graph.find_edge(a, b).is_some() {
            return Err(GraphError::BondExists {
                a: a.index(),
                b: b.index(),
            });
        }

        self.graph[a].consume_valence(needed);
        self.graph[b].consume_valence(needed);
        Ok(self.graph.add_edge(a, b, order))
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn atoms(&self) -> impl Iterator<Item = AtomId> + '_ {
        self.graph.node_indices()
    }

    pub fn count_element(&self, element: Element) -> usize {
        self.graph
            .node_weights()
            .filter(|a| a.element() == element)
            .count()
    }

    pub fn carbon_count(&self) -> usize {
        self.count_element(Element::C)
    }

    pub fn hydrogen_count(&self) -> usize {
        self.count_element(Element::H)
    }

    /// Bonds touching `idx`, seen from `idx`, in the order they were formed.
    pub fn bonds_of(&self, idx: AtomId) -> Vec<Bond> {
        let mut edges: Vec<_> = self
            .graph
            .edges(idx)
            .map(|e| {
                let to = if e.source() == idx { e.target() } else { e.source() };
                (
                    e.id(),
                    Bond {
                        from: idx,
                        to,
                        order: *e.weight(),
                    },
                )
            })
            .collect();
        edges.sort_by_key(|(id, _)| *id);
        edges.into_iter().map(|(_, bond)| bond).collect()
    }

    pub fn neighbors(&self, idx: AtomId) -> impl Iterator<Item = AtomId> + '_ {
        self.bonds_of(idx).into_iter().map(|b| b.to)
    }

    pub fn bond_between(&self, a: AtomId, b: AtomId) -> Option<BondOrder> {
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }

    /// Every bond exactly once, as `(a, b, order)` in formation order.
    pub fn bonds(&self) -> impl Iterator<Item = (AtomId, AtomId, BondOrder)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target(), *e.weight()))
    }

    /// Visits every atom reachable from `start` exactly once, breadth first,
    /// following each atom's bonds in formation order.
    ///
    /// The callback may grow the compound. Atoms it bonds to the atom being
    /// visited are discovered when that atom's neighbours are queued, which
    /// happens after the callback returns.
    pub fn breadth_first_traverse<E, F>(&mut self, start: AtomId, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&mut Compound, AtomId) -> Result<(), E>,
    {
        if start.index() >= self.atom_count() {
            return Ok(());
        }
        let mut visited = vec![false; self.atom_count()];
        visited[start.index()] = true;
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            visit(self, current)?;
            if visited.len() < self.atom_count() {
                visited.resize(self.atom_count(), false);
            }
            for neighbor in self.bonds_of(current).into_iter().map(|b| b.to) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        Ok(())
    }
}

impl Default for Compound {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Compound {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl std::fmt::Debug for Compound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compound")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .finish()
    }
}
