use petgraph::graph::NodeIndex;

use crate::compound::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
}

impl BondOrder {
    /// Valence consumed on each endpoint.
    pub fn valence(self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

impl TryFrom<u8> for BondOrder {
    type Error = GraphError;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        match order {
            1 => Ok(BondOrder::Single),
            2 => Ok(BondOrder::Double),
            3 => Ok(BondOrder::Triple),
            other => Err(GraphError::InvalidBondOrder(other)),
        }
    }
}

/// A bond as seen from one of its endpoints.
///
/// Every bond in a compound appears twice when walking atom by atom: once
/// from each endpoint, with `from` and `to` swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub order: BondOrder,
}
