//! Valence and unpaired-electron bookkeeping used by conjugation
//! detection.

use petgraph::graph::NodeIndex;

use crate::element::{outer_shell_electrons, Element};
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};

/// Sum of bond orders plus implicit hydrogens, saturating at `u8::MAX`.
pub fn total_valence<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> u8
where
    A: HasHydrogenCount,
    B: HasBondOrder,
{
    let bond_sum = mol
        .bonds_of(atom)
        .map(|e| mol.bond(e).bond_order().as_u8())
        .fold(0u8, u8::saturating_add);
    bond_sum.saturating_add(mol.atom(atom).hydrogen_count())
}

/// Neighbours plus implicit hydrogens, saturating at `u8::MAX`.
pub fn total_degree<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> u8
where
    A: HasHydrogenCount,
{
    u8::try_from(mol.neighbors(atom).count())
        .unwrap_or(u8::MAX)
        .saturating_add(mol.atom(atom).hydrogen_count())
}

/// Unpaired electrons on `idx`: 0 in a normal bonding state, 1 for a
/// monoradical such as `[CH3]`, 2 for `[CH2]`.
pub fn num_radical_electrons<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> u8
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge,
    B: HasBondOrder,
{
    let atom = mol.atom(idx);
    let atomic_num = atom.atomic_num();
    let charge = atom.formal_charge() as i16;
    let Some(elem) = Element::from_atomic_num(atomic_num) else {
        return 0;
    };
    let n_outer = outer_shell_electrons(atomic_num) as i16;

    let default_valences = elem.default_valences();
    if default_valences.is_empty() {
        // Bare metal or noble-gas ion: parity of what is left.
        if mol.neighbors(idx).count() > 0 {
            return 0;
        }
        let n_valence = n_outer - charge;
        return if n_valence < 0 { 0 } else { (n_valence % 2) as u8 };
    }

    let valence = total_valence(mol, idx) as i16;
    let shell: i16 = if atomic_num <= 2 { 2 } else { 8 };

    let mut radicals = shell - n_outer - valence + charge;
    if radicals < 0 {
        // Hypervalent: fall back to the first default valence that fits.
        radicals = if default_valences.len() > 1 {
            default_valences
                .iter()
                .map(|&v| v as i16 - valence + charge)
                .find(|&r| r >= 0)
                .unwrap_or(0)
        } else {
            0
        };
    }

    let from_outer = n_outer - valence - charge;
    if (0..radicals).contains(&from_outer) {
        radicals = from_outer;
    }
    radicals.max(0) as u8
}
