//! Converting between implicit and explicit hydrogens.
//!
//! Proton descriptors address hydrogens by atom position, so they need
//! every hydrogen as its own graph node. [`add_hs`] expands implicit counts
//! into nodes; [`remove_hs`] folds plain hydrogens back into their parent.

use crate::atom::Atom;
use crate::bond::Bond;
use crate::element::Element;
use crate::mol::Mol;

/// Copy of `mol` with every implicit hydrogen turned into a node.
///
/// Original atoms keep their indices. New hydrogens are appended in parent
/// order, each joined by a single bond.
pub fn add_hs(mol: &Mol<Atom, Bond>) -> Mol<Atom, Bond> {
    let mut result = Mol::new();

    for idx in mol.atoms() {
        result.add_atom(Atom {
            hydrogen_count: 0,
            ..mol.atom(idx).clone()
        });
    }

    for edge in mol.bonds() {
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            result.add_bond(a, b, mol.bond(edge).clone());
        }
    }

    for parent in mol.atoms() {
        for _ in 0..mol.atom(parent).hydrogen_count {
            let h = result.add_atom(Atom::of(Element::H));
            result.add_bond(parent, h, Bond::default());
        }
    }

    result
}

/// Copy of `mol` with removable hydrogen nodes folded into their parent's
/// implicit count.
///
/// A hydrogen is removable when it is neutral and has exactly one heavy
/// neighbour. H2, hydride and bridging hydrogens stay as nodes. Remaining
/// atoms are renumbered in their original order.
pub fn remove_hs(mol: &Mol<Atom, Bond>) -> Mol<Atom, Bond> {
    let mut removable = vec![false; mol.atom_count()];
    let mut extra_h = vec![0u8; mol.atom_count()];

    for idx in mol.atoms() {
        let atom = mol.atom(idx);
        if atom.atomic_num != Element::H.atomic_num() || atom.formal_charge != 0 {
            continue;
        }
        let mut nbrs = mol.neighbors(idx);
        let (Some(parent), None) = (nbrs.next(), nbrs.next()) else {
            continue;
        };
        if mol.atom(parent).atomic_num == Element::H.atomic_num() {
            continue;
        }
        removable[idx.index()] = true;
        extra_h[parent.index()] += 1;
    }

    let mut result = Mol::new();
    let mut index_map = vec![None; mol.atom_count()];
    for idx in mol.atoms() {
        if removable[idx.index()] {
            continue;
        }
        let atom = mol.atom(idx);
        index_map[idx.index()] = Some(result.add_atom(Atom {
            hydrogen_count: atom.hydrogen_count + extra_h[idx.index()],
            ..atom.clone()
        }));
    }

    for edge in mol.bonds() {
        let Some((a, b)) = mol.bond_endpoints(edge) else {
            continue;
        };
        if let (Some(na), Some(nb)) = (index_map[a.index()], index_map[b.index()]) {
            result.add_bond(na, nb, mol.bond(edge).clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::BondOrder;
    use petgraph::graph::NodeIndex;

    fn ethene() -> Mol<Atom, Bond> {
        let mut mol = Mol::new();
        let a = mol.add_atom(Atom {
            atomic_num: 6,
            hydrogen_count: 2,
            ..Atom::default()
        });
        let b = mol.add_atom(Atom {
            atomic_num: 6,
            hydrogen_count: 2,
            ..Atom::default()
        });
        mol.add_bond(a, b, Bond::new(BondOrder::Double));
        mol
    }

    #[test]
    fn add_hs_appends_hydrogens() {
        let mol = add_hs(&ethene());
        assert_eq!(mol.atom_count(), 6);
        assert_eq!(mol.bond_count(), 5);
        for i in 0..2 {
            assert_eq!(mol.atom(NodeIndex::new(i)).atomic_num, 6);
            assert_eq!(mol.atom(NodeIndex::new(i)).hydrogen_count, 0);
            assert_eq!(mol.neighbors(NodeIndex::new(i)).count(), 3);
        }
        for i in 2..6 {
            assert_eq!(mol.atom(NodeIndex::new(i)).atomic_num, 1);
        }
        // First two hydrogens belong to atom 0.
        assert!(mol.bond_between(NodeIndex::new(0), NodeIndex::new(2)).is_some());
        assert!(mol.bond_between(NodeIndex::new(1), NodeIndex::new(5)).is_some());
    }

    #[test]
    fn add_hs_keeps_bond_orders() {
        let mol = add_hs(&ethene());
        let cc = mol.bond_between(NodeIndex::new(0), NodeIndex::new(1)).unwrap();
        assert_eq!(mol.bond(cc).order, BondOrder::Double);
    }

    #[test]
    fn add_hs_returns_new_instance() {
        let mol = ethene();
        assert_ne!(add_hs(&mol).id(), mol.id());
    }

    #[test]
    fn remove_hs_round_trip() {
        let original = ethene();
        let stripped = remove_hs(&add_hs(&original));
        assert_eq!(stripped, original);
    }

    #[test]
    fn remove_hs_keeps_h2() {
        let mut mol = Mol::new();
        let a = mol.add_atom(Atom::of(Element::H));
        let b = mol.add_atom(Atom::of(Element::H));
        mol.add_bond(a, b, Bond::default());
        assert_eq!(remove_hs(&mol).atom_count(), 2);
    }

    #[test]
    fn remove_hs_keeps_charged_and_bridging() {
        let mut mol = Mol::new();
        let b1 = mol.add_atom(Atom::of(Element::B));
        let b2 = mol.add_atom(Atom::of(Element::B));
        let bridge = mol.add_atom(Atom::of(Element::H));
        mol.add_bond(b1, bridge, Bond::default());
        mol.add_bond(b2, bridge, Bond::default());
        mol.add_atom(Atom {
            formal_charge: -1,
            ..Atom::of(Element::H)
        });
        let out = remove_hs(&mol);
        assert_eq!(out.atom_count(), 4);
        assert_eq!(out.atom(NodeIndex::new(0)).hydrogen_count, 0);
    }
}
