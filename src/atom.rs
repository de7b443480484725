use crate::element::Element;

/// Default atom type for a molecular graph node.
///
/// `Atom` stores intrinsic atomic properties. Coordinates are not part of
/// it; wrap it in [`WithPosition2D`](crate::WithPosition2D) when a layout is
/// needed.
///
/// Hydrogens may be present either as explicit graph nodes (atomic number 1)
/// or as an implicit count on their heavy atom. Proton descriptors only see
/// explicit hydrogens; see [`add_hs`](crate::hydrogen::add_hs).
///
/// # Examples
///
/// ```
/// use ringpi::Atom;
///
/// let carbon = Atom {
///     atomic_num: 6,
///     hydrogen_count: 3,
///     ..Atom::default()
/// };
/// assert_eq!(carbon.atomic_num, 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …).
    pub atomic_num: u8,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Number of implicit hydrogens carried by this atom.
    pub hydrogen_count: u8,
    /// Set by aromaticity perception. Bond orders stay Kekulé regardless.
    pub is_aromatic: bool,
}

impl Atom {
    /// An uncharged atom of `element` with no implicit hydrogens.
    pub fn of(element: Element) -> Self {
        Self {
            atomic_num: element.atomic_num(),
            ..Self::default()
        }
    }

    pub fn element(&self) -> Option<Element> {
        Element::from_atomic_num(self.atomic_num)
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}

impl crate::traits::HasAromaticity for Atom {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
}
