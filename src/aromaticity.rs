use log::{debug, trace};
use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::mol::Mol;
use crate::ring::{Ring, RingInfo};
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};
use crate::valence::total_degree;

/// Anything that can flag aromatic atoms on a molecule in place.
pub trait AromaticityPerception {
    fn perceive(&self, mol: &mut Mol<Atom, Bond>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AromaticityModel {
    /// Each SSSR ring is judged on its own.
    Rdkit,
    /// As `Rdkit`, and additionally the perimeter of every pair of rings
    /// fused through one bond is judged as a ring of its own.
    #[default]
    Hueckel,
}

impl AromaticityPerception for AromaticityModel {
    fn perceive(&self, mol: &mut Mol<Atom, Bond>) {
        set_aromaticity(mol, *self);
    }
}

const SP2_CAPABLE: [u8; 9] = [
    5,  // B
    6,  // C
    7,  // N
    8,  // O
    15, // P
    16, // S
    33, // As
    34, // Se
    52, // Te
];

pub fn find_aromatic_atoms<A, B>(mol: &Mol<A, B>, model: AromaticityModel) -> Vec<bool>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
{
    let mut aromatic = vec![false; mol.atom_count()];
    let ring_info = RingInfo::sssr(mol);
    let rings = ring_info.rings();

    let mut ring_aromatic = vec![false; rings.len()];
    for (i, ring) in rings.iter().enumerate() {
        ring_aromatic[i] = is_aromatic_ring(mol, ring);
        trace!(
            "ring {} (size {}, order sum {}): aromatic = {}",
            i,
            ring.size(),
            ring.bond_order_sum(),
            ring_aromatic[i]
        );
        if ring_aromatic[i] {
            mark(&mut aromatic, ring);
        }
    }

    if model == AromaticityModel::Hueckel {
        for (i, j, _) in ring_info.fused_pairs() {
            if ring_aromatic[i] && ring_aromatic[j] {
                continue;
            }
            let Some(perimeter) = rings[i].fused_perimeter(&rings[j]) else {
                continue;
            };
            if is_aromatic_ring(mol, &perimeter) {
                trace!("fused perimeter of rings {} and {} is aromatic", i, j);
                mark(&mut aromatic, &perimeter);
            }
        }
    }

    aromatic
}

pub fn set_aromaticity(mol: &mut Mol<Atom, Bond>, model: AromaticityModel) {
    let aromatic = find_aromatic_atoms(mol, model);
    debug!(
        "{:?} aromaticity: {} of {} atoms aromatic",
        model,
        aromatic.iter().filter(|&&a| a).count(),
        aromatic.len()
    );
    let indices: Vec<_> = mol.atoms().collect();
    for idx in indices {
        mol.atom_mut(idx).is_aromatic = aromatic[idx.index()];
    }
}

fn mark(aromatic: &mut [bool], ring: &Ring) {
    for &atom in ring.atoms() {
        aromatic[atom.index()] = true;
    }
}

fn is_aromatic_ring<A, B>(mol: &Mol<A, B>, ring: &Ring) -> bool
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
{
    if ring.size() < 3 {
        return false;
    }
    if ring
        .atoms()
        .iter()
        .any(|&a| !SP2_CAPABLE.contains(&mol.atom(a).atomic_num()))
    {
        return false;
    }
    if ring.bonds().iter().any(|b| b.order == BondOrder::Triple) {
        return false;
    }

    let mut pi_total: u8 = 0;
    for &atom in ring.atoms() {
        match pi_electrons(mol, atom, ring) {
            Some(e) => pi_total = pi_total.saturating_add(e),
            None => return false,
        }
    }
    is_huckel(pi_total)
}

/// Pi electrons `atom` donates to `ring`, or `None` if it breaks the
/// ring's conjugation (e.g. an sp3 carbon).
fn pi_electrons<A, B>(mol: &Mol<A, B>, atom_idx: NodeIndex, ring: &Ring) -> Option<u8>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
{
    let atom = mol.atom(atom_idx);
    let has_double = mol
        .bonds_of(atom_idx)
        .any(|e| mol.bond(e).bond_order() == BondOrder::Double);
    let has_double_in_ring = ring
        .bonds_of(atom_idx)
        .any(|b| b.order == BondOrder::Double);
    let degree = total_degree(mol, atom_idx);
    let ring_degree = ring.bonds_of(atom_idx).count();

    let lone_pair_donor = ring_degree == 2 && degree <= 3;

    match (atom.atomic_num(), atom.formal_charge()) {
        (6, 0) => has_double.then_some(1),
        (6, -1) => Some(2),
        (6, 1) => Some(if has_double { 1 } else { 0 }),
        (7, 0) | (15, 0) | (33, 0) => {
            if has_double {
                Some(1)
            } else if lone_pair_donor {
                Some(2)
            } else {
                None
            }
        }
        (7, 1) => has_double_in_ring.then_some(1),
        (8 | 16 | 34 | 52, _) => {
            if has_double_in_ring {
                Some(1)
            } else if ring_degree == 2 {
                Some(2)
            } else {
                None
            }
        }
        (5, _) => Some(if has_double { 1 } else { 0 }),
        _ => None,
    }
}

fn is_huckel(pi_electrons: u8) -> bool {
    pi_electrons >= 2 && (pi_electrons - 2) % 4 == 0
}
