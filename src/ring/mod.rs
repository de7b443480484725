//! Ring views over a molecular graph.
//!
//! A [`Ring`] is a snapshot of the atoms and bonds of one simple cycle. It
//! does not borrow the molecule it came from; bonds are identified by their
//! [`EdgeIndex`] and carry a copy of their endpoints and order, so the
//! traversal queries need no access to the molecule. Only
//! [`Ring::centroid_2d`] reads back from the molecule.
//!
//! Queries that scan the ring (`next_bond`, `fusion_bond_with`) return the
//! first match in the ring's own bond order. For bridged systems where two
//! rings share several bonds, only the first shared bond is reported.

mod error;
pub mod sssr;

pub use error::RingError;
pub use sssr::RingInfo;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder;
use crate::mol::Mol;
use crate::traits::{HasBondOrder, HasPosition2D};

/// Snapshot of one ring bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RingBond {
    pub id: EdgeIndex,
    pub atoms: (NodeIndex, NodeIndex),
    pub order: BondOrder,
}

impl RingBond {
    pub fn from_mol<A, B: HasBondOrder>(mol: &Mol<A, B>, id: EdgeIndex) -> Option<Self> {
        let atoms = mol.bond_endpoints(id)?;
        Some(Self {
            id,
            atoms,
            order: mol.bond(id).bond_order(),
        })
    }

    pub fn contains(&self, atom: NodeIndex) -> bool {
        self.atoms.0 == atom || self.atoms.1 == atom
    }

    /// The endpoint opposite `atom`, or `None` if `atom` is not an endpoint.
    pub fn other(&self, atom: NodeIndex) -> Option<NodeIndex> {
        if self.atoms.0 == atom {
            Some(self.atoms.1)
        } else if self.atoms.1 == atom {
            Some(self.atoms.0)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ring {
    atoms: Vec<NodeIndex>,
    bonds: Vec<RingBond>,
}

impl Ring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty ring with room for `size` atoms and bonds.
    pub fn with_capacity(size: usize) -> Self {
        Self {
            atoms: Vec::with_capacity(size),
            bonds: Vec::with_capacity(size),
        }
    }

    /// Builds a ring from atoms listed in cycle order. The bond between
    /// the last and first atom closes the ring. Returns `None` for fewer
    /// than three atoms, a repeated atom, or a consecutive pair that is not
    /// bonded in `mol`.
    pub fn from_cycle<A, B: HasBondOrder>(mol: &Mol<A, B>, cycle: &[NodeIndex]) -> Option<Self> {
        let len = cycle.len();
        if len < 3 || has_repeats(cycle) {
            return None;
        }
        let mut ring = Self::with_capacity(len);
        for (i, &atom) in cycle.iter().enumerate() {
            let next = cycle[(i + 1) % len];
            let edge = mol.bond_between(atom, next)?;
            ring.add_atom(atom);
            ring.add_bond(RingBond::from_mol(mol, edge)?);
        }
        Some(ring)
    }

    /// Orders an unordered set of bonds into a cycle. Returns `None` unless
    /// the bonds form exactly one simple cycle.
    pub fn from_bonds(bonds: Vec<RingBond>) -> Option<Self> {
        let first = *bonds.first()?;
        let n = bonds.len();
        let scratch = Self {
            atoms: Vec::new(),
            bonds,
        };

        let mut atoms = vec![first.atoms.0];
        let mut ordered = vec![first];
        let mut current = first.id;
        let mut pivot = first.atoms.1;
        while ordered.len() < n {
            atoms.push(pivot);
            let next = scratch.next_bond(current, pivot)?;
            if next == first.id {
                return None;
            }
            let bond = *scratch.bond(next)?;
            pivot = bond.other(pivot)?;
            ordered.push(bond);
            current = next;
        }

        if pivot != first.atoms.0 || has_repeats(&atoms) {
            return None;
        }
        Some(Self {
            atoms,
            bonds: ordered,
        })
    }

    pub fn add_atom(&mut self, atom: NodeIndex) {
        self.atoms.push(atom);
    }

    pub fn add_bond(&mut self, bond: RingBond) {
        self.bonds.push(bond);
    }

    /// Number of atoms in the ring.
    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[NodeIndex] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[RingBond] {
        &self.bonds
    }

    pub fn bond_ids(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.bonds.iter().map(|b| b.id)
    }

    pub fn contains_atom(&self, atom: NodeIndex) -> bool {
        self.atoms.contains(&atom)
    }

    pub fn contains_bond(&self, bond: EdgeIndex) -> bool {
        self.bonds.iter().any(|b| b.id == bond)
    }

    pub fn bond(&self, id: EdgeIndex) -> Option<&RingBond> {
        self.bonds.iter().find(|b| b.id == id)
    }

    /// Ring bonds incident to `atom`, in ring order.
    pub fn bonds_of(&self, atom: NodeIndex) -> impl Iterator<Item = &RingBond> + '_ {
        self.bonds.iter().filter(move |b| b.contains(atom))
    }

    /// The first ring bond other than `from` that touches `pivot`.
    ///
    /// In a well-formed ring this is the neighbouring bond on the `pivot`
    /// side of `from`. No rotational direction is implied.
    pub fn next_bond(&self, from: EdgeIndex, pivot: NodeIndex) -> Option<EdgeIndex> {
        self.bonds
            .iter()
            .find(|b| b.id != from && b.contains(pivot))
            .map(|b| b.id)
    }

    /// Walks the cycle starting with `start`, stepping through `pivot`
    /// first and then always through the far atom of the bond just reached.
    /// Stops before returning to `start`, or when the ring is malformed.
    pub fn walk(&self, start: EdgeIndex, pivot: NodeIndex) -> CycleWalk<'_> {
        let valid = self.bond(start).is_some_and(|b| b.contains(pivot));
        CycleWalk {
            ring: self,
            start,
            current: valid.then_some((start, pivot)),
            remaining: self.bonds.len(),
        }
    }

    /// The first bond of this ring, in this ring's order, that `other`
    /// also contains.
    pub fn fusion_bond_with(&self, other: &Ring) -> Option<EdgeIndex> {
        self.bonds
            .iter()
            .map(|b| b.id)
            .find(|&id| other.contains_bond(id))
    }

    /// Sum of the integer orders of all ring bonds.
    pub fn bond_order_sum(&self) -> u32 {
        self.bonds.iter().map(|b| b.order.as_u8() as u32).sum()
    }

    /// Mean 2D coordinate of the ring atoms.
    ///
    /// An empty ring yields `[NaN, NaN]`.
    pub fn centroid_2d<A: HasPosition2D, B>(&self, mol: &Mol<A, B>) -> Result<[f64; 2], RingError> {
        let mut sum = [0.0f64; 2];
        for &atom in &self.atoms {
            let [x, y] = mol
                .try_atom(atom)
                .and_then(|a| a.position_2d())
                .ok_or(RingError::MissingGeometry { atom })?;
            sum[0] += x;
            sum[1] += y;
        }
        let n = self.atoms.len() as f64;
        Ok([sum[0] / n, sum[1] / n])
    }

    /// Outer cycle of two rings fused through exactly one bond, e.g. the
    /// ten-membered perimeter of naphthalene. `None` if the rings share no
    /// bond, or share more than one bond or more than two atoms.
    pub fn fused_perimeter(&self, other: &Ring) -> Option<Ring> {
        let fusion = self.fusion_bond_with(other)?;
        let shared_bonds = self.bond_ids().filter(|&id| other.contains_bond(id)).count();
        let shared_atoms = self.atoms.iter().filter(|&&a| other.contains_atom(a)).count();
        if shared_bonds != 1 || shared_atoms != 2 {
            return None;
        }

        let bonds: Vec<RingBond> = self
            .bonds
            .iter()
            .chain(other.bonds.iter())
            .filter(|b| b.id != fusion)
            .copied()
            .collect();
        Self::from_bonds(bonds)
    }
}

fn has_repeats(atoms: &[NodeIndex]) -> bool {
    let mut seen = atoms.to_vec();
    seen.sort();
    seen.dedup();
    seen.len() != atoms.len()
}

/// Iterator returned by [`Ring::walk`].
pub struct CycleWalk<'a> {
    ring: &'a Ring,
    start: EdgeIndex,
    current: Option<(EdgeIndex, NodeIndex)>,
    remaining: usize,
}

impl Iterator for CycleWalk<'_> {
    type Item = EdgeIndex;

    fn next(&mut self) -> Option<EdgeIndex> {
        let (bond, pivot) = self.current?;
        if self.remaining == 0 {
            self.current = None;
            return None;
        }
        self.remaining -= 1;
        self.current = self
            .ring
            .next_bond(bond, pivot)
            .filter(|&next| next != self.start)
            .and_then(|next| {
                let far = self.ring.bond(next)?.other(pivot)?;
                Some((next, far))
            });
        Some(bond)
    }
}
