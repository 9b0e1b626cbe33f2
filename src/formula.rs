//! Molecular formula and molecular weight of a generated compound.
//!
//! Hydrogens are explicit atoms in a [`Compound`], so both functions simply
//! count nodes.

use std::collections::BTreeMap;

use crate::compound::Compound;
use crate::element::Element;

/// Average molecular weight in daltons (Da), from standard atomic weights.
pub fn average_mol_weight(compound: &Compound) -> f64 {
    compound
        .atoms()
        .map(|idx| compound.atom(idx).element().atomic_weight())
        .sum()
}

/// Molecular formula as a Hill system string.
///
/// Carbon comes first, then hydrogen, then any other element
/// alphabetically. Without carbon every element is alphabetical. Counts of
/// one are omitted.
pub fn mol_formula(compound: &Compound) -> String {
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for idx in compound.atoms() {
        *counts.entry(compound.atom(idx).symbol()).or_default() += 1;
    }

    let mut result = String::new();
    if let Some(c) = counts.remove(Element::C.symbol()) {
        append_element(&mut result, Element::C.symbol(), c);
        if let Some(h) = counts.remove(Element::H.symbol()) {
            append_element(&mut result, Element::H.symbol(), h);
        }
    }
    for (symbol, count) in counts {
        append_element(&mut result, symbol, count);
    }
    result
}

fn append_element(buf: &mut String, symbol: &str, count: usize) {
    buf.push_str(symbol);
    if count > 1 {
        buf.push_str(&count.to_string());
    }
}
