pub mod atom;
pub mod bond;
pub mod compound;
pub mod element;
pub mod formula;
pub mod iupac;
pub mod node_link;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use compound::{AtomId, Compound, GraphError};
pub use element::Element;
pub use formula::{average_mol_weight, mol_formula};
pub use iupac::{convert, PipelineError, Stage};
pub use node_link::NodeLinkGraph;
