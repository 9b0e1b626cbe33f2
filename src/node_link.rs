//! Node-link view of a compound, the shape graph renderers expect.
//!
//! ```json
//! {
//!   "nodes": [{ "id": 0, "symbol": "C" }, ...],
//!   "links": [{ "source": 0, "target": 1, "value": 3 }, ...]
//! }
//! ```

use serde::Serialize;

use crate::compound::Compound;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: usize,
    pub symbol: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    /// Bond order: 1, 2 or 3.
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NodeLinkGraph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl NodeLinkGraph {
    /// One node per atom in compound order and one link per bond, in the
    /// order the bonds were formed.
    pub fn from_compound(compound: &Compound) -> Self {
        let nodes = compound
            .atoms()
            .map(|idx| Node {
                id: idx.index(),
                symbol: compound.atom(idx).symbol(),
            })
            .collect();
        let links = compound
            .bonds()
            .map(|(a, b, order)| Link {
                source: a.index(),
                target: b.index(),
                value: order.valence(),
            })
            .collect();
        Self { nodes, links }
    }
}

impl From<&Compound> for NodeLinkGraph {
    fn from(compound: &Compound) -> Self {
        Self::from_compound(compound)
    }
}
