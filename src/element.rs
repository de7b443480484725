//! Per-element data consumed by the perception algorithms.
//!
//! Only hydrogen through xenon are tabulated. Atomic numbers outside that
//! range are reported as unknown, which the algorithms treat as "no default
//! valence" (never aromatic, never a conjugation candidate).

use std::fmt;

struct ElementData {
    symbol: &'static str,
    outer_electrons: u8,
    default_valences: &'static [u8],
}

const fn data(
    symbol: &'static str,
    outer_electrons: u8,
    default_valences: &'static [u8],
) -> ElementData {
    ElementData {
        symbol,
        outer_electrons,
        default_valences,
    }
}

const NONE: &[u8] = &[];
const MONO: &[u8] = &[1];
const TETRA: &[u8] = &[4];
const PNICTOGEN: &[u8] = &[3, 5];
const CHALCOGEN: &[u8] = &[2, 4, 6];

static ELEMENTS: [ElementData; 54] = [
    data("H", 1, MONO),
    data("He", 2, NONE),
    data("Li", 1, NONE),
    data("Be", 2, NONE),
    data("B", 3, &[3]),
    data("C", 4, TETRA),
    data("N", 5, PNICTOGEN),
    data("O", 6, &[2]),
    data("F", 7, MONO),
    data("Ne", 8, NONE),
    data("Na", 1, NONE),
    data("Mg", 2, NONE),
    data("Al", 3, NONE),
    data("Si", 4, TETRA),
    data("P", 5, PNICTOGEN),
    data("S", 6, CHALCOGEN),
    data("Cl", 7, MONO),
    data("Ar", 8, NONE),
    data("K", 1, NONE),
    data("Ca", 2, NONE),
    data("Sc", 3, NONE),
    data("Ti", 4, NONE),
    data("V", 5, NONE),
    data("Cr", 6, NONE),
    data("Mn", 7, NONE),
    data("Fe", 8, NONE),
    data("Co", 9, NONE),
    data("Ni", 10, NONE),
    data("Cu", 11, NONE),
    data("Zn", 12, NONE),
    data("Ga", 3, NONE),
    data("Ge", 4, TETRA),
    data("As", 5, PNICTOGEN),
    data("Se", 6, CHALCOGEN),
    data("Br", 7, MONO),
    data("Kr", 8, NONE),
    data("Rb", 1, NONE),
    data("Sr", 2, NONE),
    data("Y", 3, NONE),
    data("Zr", 4, NONE),
    data("Nb", 5, NONE),
    data("Mo", 6, NONE),
    data("Tc", 7, NONE),
    data("Ru", 8, NONE),
    data("Rh", 9, NONE),
    data("Pd", 10, NONE),
    data("Ag", 11, NONE),
    data("Cd", 12, NONE),
    data("In", 3, NONE),
    data("Sn", 4, NONE),
    data("Sb", 5, NONE),
    data("Te", 6, CHALCOGEN),
    data("I", 7, &[1, 3, 5, 7]),
    data("Xe", 8, NONE),
];

/// A chemical element, identified by atomic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(u8);

#[allow(non_upper_case_globals)]
impl Element {
    pub const H: Element = Element(1);
    pub const B: Element = Element(5);
    pub const C: Element = Element(6);
    pub const N: Element = Element(7);
    pub const O: Element = Element(8);
    pub const F: Element = Element(9);
    pub const P: Element = Element(15);
    pub const S: Element = Element(16);
    pub const Cl: Element = Element(17);
    pub const As: Element = Element(33);
    pub const Se: Element = Element(34);
    pub const Br: Element = Element(35);
    pub const Te: Element = Element(52);
    pub const I: Element = Element(53);

    pub fn from_atomic_num(n: u8) -> Option<Element> {
        if (1..=ELEMENTS.len() as u8).contains(&n) {
            Some(Element(n))
        } else {
            None
        }
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        ELEMENTS
            .iter()
            .position(|d| d.symbol == s)
            .map(|i| Element(i as u8 + 1))
    }

    pub fn atomic_num(self) -> u8 {
        self.0
    }

    pub fn symbol(self) -> &'static str {
        self.data().symbol
    }

    pub fn outer_shell_electrons(self) -> u8 {
        self.data().outer_electrons
    }

    /// Valences an uncharged atom of this element normally adopts, lowest
    /// first. Empty for metals and noble gases.
    pub fn default_valences(self) -> &'static [u8] {
        self.data().default_valences
    }

    fn data(self) -> &'static ElementData {
        &ELEMENTS[self.0 as usize - 1]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Valence-shell electron count, or 0 for an unknown atomic number.
pub fn outer_shell_electrons(atomic_num: u8) -> u8 {
    Element::from_atomic_num(atomic_num)
        .map(Element::outer_shell_electrons)
        .unwrap_or(0)
}
