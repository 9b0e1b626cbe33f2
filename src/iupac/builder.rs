use tracing::trace;

use crate::atom::Atom;
use crate::bond::BondOrder;
use crate::compound::{AtomId, Compound, GraphError};
use crate::element::Element;
use crate::iupac::ast::{Hydrocarbon, Locants};

/// Builds the hydrogen-saturated molecular graph for an analysed name.
///
/// Carbons come first, in chain order, followed by the hydrogens of each
/// carbon in breadth-first visit order. A [`GraphError`] here means the
/// name slipped past the analyzer.
pub fn generate(hydrocarbon: &Hydrocarbon) -> Result<Compound, GraphError> {
    let shape = &hydrocarbon.shape;
    let alkene = shape.alkene_group().map(|g| &g.locants);
    let alkyne = shape.alkyne_group().map(|g| &g.locants);

    let mut compound = Compound::new();
    let carbons: Vec<AtomId> = (0..hydrocarbon.carbon_count())
        .map(|_| compound.add_atom(Atom::new(Element::C)))
        .collect();

    for (i, pair) in carbons.windows(2).enumerate() {
        let locant = i as u32 + 1;
        let order = backbone_order(locant, alkene, alkyne);
        trace!(locant, ?order, "backbone bond");
        compound.bond(pair[0], pair[1], order)?;
    }

    if hydrocarbon.is_cyclic {
        if let (Some(&first), Some(&last)) = (carbons.first(), carbons.last()) {
            trace!("ring closure");
            compound.bond(last, first, BondOrder::Single)?;
        }
    }

    if let Some(&root) = carbons.first() {
        compound.breadth_first_traverse(root, saturate)?;
    }
    Ok(compound)
}

fn backbone_order(locant: u32, alkene: Option<&Locants>, alkyne: Option<&Locants>) -> BondOrder {
    if alkene.is_some_and(|l| l.contains(locant)) {
        BondOrder::Double
    } else if alkyne.is_some_and(|l| l.contains(locant)) {
        BondOrder::Triple
    } else {
        BondOrder::Single
    }
}

fn saturate(compound: &mut Compound, idx: AtomId) -> Result<(), GraphError> {
    while !compound.atom(idx).is_saturated() {
        let h = compound.add_atom(Atom::new(Element::H));
        compound.bond(idx, h, BondOrder::Single)?;
    }
    Ok(())
}
