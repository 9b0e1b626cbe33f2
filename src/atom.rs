use crate::element::Element;

/// A node of a [`Compound`](crate::Compound) graph.
///
/// An atom knows its element and how much bonding capacity it has left.
/// Its identity is the [`AtomId`](crate::AtomId) it was given when added
/// to a compound; the atom itself carries no id so that it can be built
/// before it belongs anywhere.
///
/// `remaining_valence` starts at the element's normal valence and only
/// ever decreases, as bonds are formed through
/// [`Compound::bond`](crate::Compound::bond).
///
/// # Examples
///
/// ```
/// use hydrocrab::{Atom, Element};
///
/// let carbon = Atom::new(Element::C);
/// assert_eq!(carbon.remaining_valence(), 4);
/// assert!(!carbon.is_saturated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    element: Element,
    remaining_valence: u8,
}

impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            remaining_valence: element.normal_valence(),
        }
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn symbol(&self) -> &'static str {
        self.element.symbol()
    }

    /// Bonding capacity not yet used by any bond.
    pub fn remaining_valence(&self) -> u8 {
        self.remaining_valence
    }

    /// Bonding capacity already used, i.e. the sum of the orders of all
    /// bonds touching this atom.
    pub fn used_valence(&self) -> u8 {
        self.element.normal_valence() - self.remaining_valence
    }

    pub fn is_saturated(&self) -> bool {
        self.remaining_valence == 0
    }

    pub(crate) fn consume_valence(&mut self, order: u8) {
        debug_assert!(order <= self.remaining_valence);
        self.remaining_valence -= order;
    }
}
