//! Typed syntax tree for a hydrocarbon name.

use crate::bond::BondOrder;
use crate::iupac::tokenizer::Token;

/// Root of the tree: `[cyclo] stem type e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hydrocarbon {
    pub is_cyclic: bool,
    pub stem: Stem,
    pub shape: Type,
}

impl Hydrocarbon {
    pub fn carbon_count(&self) -> u32 {
        self.stem.carbon_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stem {
    pub token: Token,
    pub carbon_count: u32,
}

/// Which multiple bonds the chain carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Alkane,
    Alkene(Group),
    Alkyne(Group),
    Enyne { alkene: Group, alkyne: Group },
}

impl Type {
    /// The group naming double bonds, if any.
    pub fn alkene_group(&self) -> Option<&Group> {
        match self {
            Type::Alkene(group) | Type::Enyne { alkene: group, .. } => Some(group),
            Type::Alkane | Type::Alkyne(_) => None,
        }
    }

    /// The group naming triple bonds, if any.
    pub fn alkyne_group(&self) -> Option<&Group> {
        match self {
            Type::Alkyne(group) | Type::Enyne { alkyne: group, .. } => Some(group),
            Type::Alkane | Type::Alkene(_) => None,
        }
    }

    /// Each group paired with the bond order it upgrades its bonds to,
    /// double bonds first.
    pub fn groups(&self) -> Vec<(&Group, BondOrder)> {
        let alkene = self.alkene_group().map(|g| (g, BondOrder::Double));
        let alkyne = self.alkyne_group().map(|g| (g, BondOrder::Triple));
        alkene.into_iter().chain(alkyne).collect()
    }
}

/// Locants plus the multiplying affix that counts them, e.g. `-1,3-di`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub locants: Locants,
    pub multiplying_affix: Option<MultiplyingAffix>,
}

/// Locants in the order they were written. A locant `k` names the bond
/// between carbon `k` and carbon `k + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locants(pub Vec<u32>);

impl Locants {
    /// What a group written without locants stands for: the first bond.
    pub fn implicit() -> Self {
        Locants(vec![1])
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, locant: u32) -> bool {
        self.0.contains(&locant)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplyingAffix {
    pub token: Token,
    pub multiplier: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(locants: &[u32]) -> Group {
        Group {
            locants: Locants(locants.to_vec()),
            multiplying_affix: None,
        }
    }

    #[test]
    fn group_accessors() {
        assert!(Type::Alkane.groups().is_empty());

        let alkene = Type::Alkene(group(&[1]));
        assert_eq!(alkene.alkene_group(), Some(&group(&[1])));
        assert_eq!(alkene.alkyne_group(), None);

        let enyne = Type::Enyne {
            alkene: group(&[1, 5]),
            alkyne: group(&[3]),
        };
        let groups = enyne.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], (&group(&[1, 5]), BondOrder::Double));
        assert_eq!(groups[1], (&group(&[3]), BondOrder::Triple));
    }

    #[test]
    fn implicit_locants() {
        let locants = Locants::implicit();
        assert_eq!(locants.as_slice(), &[1]);
        assert!(locants.contains(1));
        assert!(!locants.contains(2));
    }
}
