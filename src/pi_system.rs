//! Conjugated pi-system fragments.
//!
//! A fragment is one connected component of the conjugated bonds reported
//! by [`assign_conjugation`]. Detectors return `Vec<Option<Fragment>>`:
//! a `None` slot means "no fragment here" and consumers skip it.

use std::collections::VecDeque;

use log::trace;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::atom::Atom;
use crate::bond::Bond;
use crate::conjugation::assign_conjugation;
use crate::mol::Mol;
use crate::traits::{HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    atoms: Vec<NodeIndex>,
    bonds: Vec<EdgeIndex>,
}

impl Fragment {
    pub fn new(atoms: Vec<NodeIndex>, bonds: Vec<EdgeIndex>) -> Self {
        Self { atoms, bonds }
    }

    pub fn atoms(&self) -> &[NodeIndex] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[EdgeIndex] {
        &self.bonds
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn contains_atom(&self, atom: NodeIndex) -> bool {
        self.atoms.contains(&atom)
    }

    pub fn contains_bond(&self, bond: EdgeIndex) -> bool {
        self.bonds.contains(&bond)
    }
}

/// Splits a molecule into its conjugated pi systems.
pub trait PiSystemDetector {
    fn detect(&self, mol: &Mol<Atom, Bond>) -> Vec<Option<Fragment>>;
}

impl<F> PiSystemDetector for F
where
    F: Fn(&Mol<Atom, Bond>) -> Vec<Option<Fragment>>,
{
    fn detect(&self, mol: &Mol<Atom, Bond>) -> Vec<Option<Fragment>> {
        self(mol)
    }
}

/// Default detector built on [`assign_conjugation`]. Never emits `None`
/// slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConjugatedPiSystems;

impl PiSystemDetector for ConjugatedPiSystems {
    fn detect(&self, mol: &Mol<Atom, Bond>) -> Vec<Option<Fragment>> {
        conjugated_pi_systems(mol).into_iter().map(Some).collect()
    }
}

/// Connected components of the conjugated bonds, ordered by their lowest
/// bond index. Atoms and bonds within a fragment are sorted.
pub fn conjugated_pi_systems<A, B>(mol: &Mol<A, B>) -> Vec<Fragment>
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge + HasAromaticity,
    B: HasBondOrder,
{
    let conjugated = assign_conjugation(mol);
    let mut assigned = vec![false; mol.bond_count()];
    let mut fragments = Vec::new();

    for seed in mol.bonds() {
        if !conjugated[seed.index()] || assigned[seed.index()] {
            continue;
        }
        let Some((start, _)) = mol.bond_endpoints(seed) else {
            continue;
        };

        let mut atoms = vec![start];
        let mut bonds = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(cur) = queue.pop_front() {
            for edge in mol.bonds_of(cur) {
                if !conjugated[edge.index()] || assigned[edge.index()] {
                    continue;
                }
                assigned[edge.index()] = true;
                bonds.push(edge);
                let Some((a, b)) = mol.bond_endpoints(edge) else {
                    continue;
                };
                let next = if a == cur { b } else { a };
                if !atoms.contains(&next) {
                    atoms.push(next);
                    queue.push_back(next);
                }
            }
        }

        atoms.sort();
        bonds.sort();
        fragments.push(Fragment::new(atoms, bonds));
    }

    trace!("found {} conjugated pi systems", fragments.len());
    fragments
}
