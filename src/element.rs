use std::fmt;

/// Elements that can appear in a generated hydrocarbon.
///
/// Discriminants are atomic numbers, so `Element::C as u8 == 6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    C = 6,
}

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        match n {
            1 => Some(Element::H),
            6 => Some(Element::C),
            _ => None,
        }
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        match s {
            "H" => Some(Element::H),
            "C" => Some(Element::C),
            _ => None,
        }
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::H => "Hydrogen",
            Element::C => "Carbon",
        }
    }

    /// Total bonding capacity of a neutral atom of this element.
    pub fn normal_valence(self) -> u8 {
        match self {
            Element::H => 1,
            Element::C => 4,
        }
    }

    /// Standard atomic weight in daltons.
    pub fn atomic_weight(self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::C => 12.011,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trip() {
        for e in [Element::H, Element::C] {
            assert_eq!(Element::from_symbol(e.symbol()), Some(e));
            assert_eq!(Element::from_atomic_num(e.atomic_num()), Some(e));
        }
        assert_eq!(Element::from_symbol("N"), None);
        assert_eq!(Element::from_atomic_num(7), None);
    }

    #[test]
    fn valences() {
        assert_eq!(Element::C.normal_valence(), 4);
        assert_eq!(Element::H.normal_valence(), 1);
    }
}
