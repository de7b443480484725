use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder;
use crate::element::{outer_shell_electrons, Element};
use crate::mol::Mol;
use crate::traits::{HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};
use crate::valence::{num_radical_electrons, total_degree, total_valence};

/// Electrons `idx` can put into a pi system, or -1 if it cannot take part.
fn count_atom_elec<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> i16
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge,
    B: HasBondOrder,
{
    let atom = mol.atom(idx);
    let anum = atom.atomic_num();
    let Some(&default_val) = Element::from_atomic_num(anum).and_then(|e| e.default_valences().first()) else {
        return -1;
    };
    if default_val <= 1 {
        return -1;
    }

    let degree = total_degree(mol, idx);
    if degree > 3 {
        return -1;
    }

    let nouter = outer_shell_electrons(anum) as i16;
    let lone_pair_elec = (nouter - default_val as i16 - atom.formal_charge() as i16).max(0);
    let radicals = num_radical_electrons(mol, idx) as i16;

    (default_val as i16 - degree as i16) + lone_pair_elec - radicals
}

fn is_conj_candidate<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> bool
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge,
    B: HasBondOrder,
{
    let atom = mol.atom(idx);
    let anum = atom.atomic_num();
    let Some(&default_val) = Element::from_atomic_num(anum).and_then(|e| e.default_valences().first()) else {
        return false;
    };
    if default_val <= 1 {
        return false;
    }
    if atom.formal_charge() == 0 && total_valence(mol, idx) > default_val {
        return false;
    }

    let nouter = outer_shell_electrons(anum);
    // Heavier pnictogens and chalcogens only conjugate when terminal.
    let row_check = anum <= 10
        || (nouter != 5 && nouter != 6)
        || (nouter == 6 && total_degree(mol, idx) < 2);

    row_check && count_atom_elec(mol, idx) > 0
}

fn other_end<A, B>(mol: &Mol<A, B>, bond: EdgeIndex, atom: NodeIndex) -> Option<NodeIndex> {
    let (a, b) = mol.bond_endpoints(bond)?;
    Some(if a == atom { b } else { a })
}

/// Per-bond conjugation flags, indexed by `EdgeIndex`.
///
/// A bond between two aromatic atoms is conjugated. Otherwise a multiple
/// bond is conjugated with each neighbouring bond around a candidate atom
/// (two or three connections) whose far atom is itself a candidate.
pub fn assign_conjugation<A, B>(mol: &Mol<A, B>) -> Vec<bool>
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge + HasAromaticity,
    B: HasBondOrder,
{
    let mut conjugated = vec![false; mol.bond_count()];

    for edge in mol.bonds() {
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            if mol.atom(a).is_aromatic() && mol.atom(b).is_aromatic() {
                conjugated[edge.index()] = true;
            }
        }
    }

    for atom_idx in mol.atoms() {
        if !is_conj_candidate(mol, atom_idx) {
            continue;
        }
        if !(2..=3).contains(&total_degree(mol, atom_idx)) {
            continue;
        }

        let bonds: Vec<EdgeIndex> = mol.bonds_of(atom_idx).collect();
        for &bnd1 in &bonds {
            if mol.bond(bnd1).bond_order() == BondOrder::Single {
                continue;
            }
            let Some(other1) = other_end(mol, bnd1, atom_idx) else {
                continue;
            };
            if !is_conj_candidate(mol, other1) {
                continue;
            }

            for &bnd2 in &bonds {
                if bnd1 == bnd2 {
                    continue;
                }
                let Some(at2) = other_end(mol, bnd2, atom_idx) else {
                    continue;
                };
                if total_degree(mol, at2) > 3 {
                    continue;
                }
                if is_conj_candidate(mol, at2) {
                    conjugated[bnd1.index()] = true;
                    conjugated[bnd2.index()] = true;
                }
            }
        }
    }

    conjugated
}
