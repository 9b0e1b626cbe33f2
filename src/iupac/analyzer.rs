//! Naming and valence rules that the grammar cannot express.

use crate::bond::BondOrder;
use crate::element::Element;
use crate::iupac::ast::{Group, Hydrocarbon, Type};
use crate::iupac::error::SemanticError;

const MIN_RING_SIZE: u32 = 3;

/// Checks a parsed name against the naming and valence rules.
///
/// The tree is only read. The first broken rule is reported:
/// - rings need at least three carbons;
/// - locants need at least two carbons, must increase strictly, and must
///   name a bond of the chain (`1..n`);
/// - no carbon may take part in more multiple-bond order than its valence
///   allows;
/// - a multiplying affix must count its locants, and a group without one
///   must have exactly one locant;
/// - the locant set must be no higher than the one obtained by numbering
///   from the other end, with double bonds winning a tie in an enyne.
pub fn analyze(hydrocarbon: &Hydrocarbon) -> Result<(), SemanticError> {
    let carbon_count = hydrocarbon.carbon_count();
    if hydrocarbon.is_cyclic && carbon_count < MIN_RING_SIZE {
        return Err(SemanticError::new(
            "Carbon chain length must be at least 3 for it to be cyclic",
        ));
    }

    let mut analyzer = Analyzer::new(carbon_count);
    match &hydrocarbon.shape {
        Type::Alkane => Ok(()),
        Type::Alkene(group) => {
            analyzer.group(group, BondOrder::Double)?;
            analyzer.lowest_locants(group.locants.as_slice())
        }
        Type::Alkyne(group) => {
            analyzer.group(group, BondOrder::Triple)?;
            analyzer.lowest_locants(group.locants.as_slice())
        }
        Type::Enyne { alkene, alkyne } => {
            analyzer.group(alkene, BondOrder::Double)?;
            analyzer.group(alkyne, BondOrder::Triple)?;
            analyzer.enyne_locants(alkene, alkyne)
        }
    }
}

struct Analyzer {
    carbon_count: u32,
    /// Valence left per carbon, indexed by 1-based carbon number.
    remaining: Vec<u8>,
}

impl Analyzer {
    fn new(carbon_count: u32) -> Self {
        Self {
            carbon_count,
            remaining: vec![Element::C.normal_valence(); carbon_count as usize + 2],
        }
    }

    fn group(&mut self, group: &Group, order: BondOrder) -> Result<(), SemanticError> {
        if self.carbon_count < 2 {
            return Err(SemanticError::new(
                "Can't specify locants for a carbon count less than 2",
            ));
        }

        let mut previous: Option<u32> = None;
        for &locant in group.locants.as_slice() {
            if locant < 1 || locant > self.carbon_count - 1 {
                return Err(SemanticError::new(format!(
                    "Invalid locant value {}, must be in range (0, {})",
                    locant, self.carbon_count
                )));
            }
            match previous {
                Some(p) if p == locant => {
                    return Err(SemanticError::new(format!(
                        "Locant {locant} has already been specified"
                    )));
                }
                Some(p) if p > locant => {
                    return Err(SemanticError::new(format!(
                        "Locants must be in order of increasing value, found {locant} after {p}"
                    )));
                }
                _ => {}
            }
            previous = Some(locant);

            self.debit(locant, order)?;
            self.debit(locant + 1, order)?;
        }

        let locant_count = group.locants.len();
        match &group.multiplying_affix {
            Some(affix) if affix.multiplier as usize != locant_count => {
                Err(SemanticError::at(
                    format!(
                        "Invalid multiplier ({}) for number of locants ({})",
                        affix.multiplier, locant_count
                    ),
                    &affix.token,
                ))
            }
            None if locant_count != 1 => Err(SemanticError::new(format!(
                "Invalid multiplier (1) for number of locants ({locant_count})"
            ))),
            _ => Ok(()),
        }
    }

    /// Takes the multiple-bond order off carbon `carbon`. The implicit
    /// single bonds of the backbone are not counted.
    fn debit(&mut self, carbon: u32, order: BondOrder) -> Result<(), SemanticError> {
        let slot = &mut self.remaining[carbon as usize];
        *slot = slot.checked_sub(order.valence()).ok_or_else(|| {
            SemanticError::new(format!("Carbon #{carbon} has exceeded available valency"))
        })?;
        Ok(())
    }

    /// The locants obtained by numbering the chain from the other end.
    fn mirror(&self, locants: &[u32]) -> Vec<u32> {
        let mut mirrored: Vec<u32> = locants.iter().map(|l| self.carbon_count - l).collect();
        mirrored.sort_unstable();
        mirrored
    }

    fn lowest_locants(&self, locants: &[u32]) -> Result<(), SemanticError> {
        let mirrored = self.mirror(locants);
        let first_difference = locants.iter().zip(&mirrored).find(|(a, b)| a != b);
        match first_difference {
            Some((written, other)) if other < written => Err(SemanticError::new(format!(
                "Lowest set of locants rule violated, {locants:?} could be {mirrored:?}"
            ))),
            _ => Ok(()),
        }
    }

    fn enyne_locants(&self, alkene: &Group, alkyne: &Group) -> Result<(), SemanticError> {
        let mut locants: Vec<u32> = alkene
            .locants
            .as_slice()
            .iter()
            .chain(alkyne.locants.as_slice())
            .copied()
            .collect();
        locants.sort_unstable();

        if self.mirror(&locants) == locants {
            if let Some(&lowest) = locants.first() {
                let mirrored = self.carbon_count - lowest;
                if alkyne.locants.contains(lowest) && alkene.locants.contains(mirrored) {
                    return Err(SemanticError::new(format!(
                        "Alkene locant ({mirrored}) expected to be lower than alkyne's ({lowest})"
                    )));
                }
            }
        }
        self.lowest_locants(&locants)
    }
}
