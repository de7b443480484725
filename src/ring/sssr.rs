//! Smallest set of smallest rings.
//!
//! Candidate cycles come from Horton's construction (for every bond `u-v`
//! and every atom `w`, the shortest paths `w..u` and `w..v` closed by the
//! bond). Candidates are taken shortest first and kept when their bond set
//! is linearly independent, over GF(2), of the rings already chosen.

use std::collections::VecDeque;

use petgraph::algo::connected_components;
use petgraph::graph::{EdgeIndex, NodeIndex};

use super::Ring;
use crate::mol::Mol;
use crate::traits::HasBondOrder;

#[derive(Debug, Clone, Default)]
pub struct RingInfo {
    rings: Vec<Ring>,
}

impl RingInfo {
    pub fn sssr<A, B: HasBondOrder>(mol: &Mol<A, B>) -> Self {
        let expected = Self::expected_ring_count(mol);
        if expected == 0 {
            return Self::default();
        }

        let mut basis = Basis::default();
        let mut cycles: Vec<Vec<NodeIndex>> = Vec::with_capacity(expected);
        for candidate in horton_candidates(mol) {
            if cycles.len() >= expected {
                break;
            }
            let set = EdgeSet::of_cycle(&candidate, mol);
            if !set.is_empty() && basis.insert(set) {
                cycles.push(normalize_cycle(&candidate));
            }
        }
        cycles.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        let rings = cycles
            .iter()
            .filter_map(|cycle| Ring::from_cycle(mol, cycle))
            .collect();
        Self { rings }
    }

    /// Cyclomatic number: bonds - atoms + connected components.
    pub fn expected_ring_count<A, B>(mol: &Mol<A, B>) -> usize {
        let v = mol.atom_count();
        let e = mol.bond_count();
        let c = connected_components(mol.graph());
        (e + c).saturating_sub(v)
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn into_rings(self) -> Vec<Ring> {
        self.rings
    }

    pub fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.rings.iter().any(|ring| ring.contains_atom(atom))
    }

    pub fn is_ring_bond(&self, bond: EdgeIndex) -> bool {
        self.rings.iter().any(|ring| ring.contains_bond(bond))
    }

    pub fn smallest_ring_size(&self, atom: NodeIndex) -> Option<usize> {
        self.atom_rings(atom).map(Ring::size).min()
    }

    pub fn atom_rings(&self, atom: NodeIndex) -> impl Iterator<Item = &Ring> + '_ {
        self.rings.iter().filter(move |ring| ring.contains_atom(atom))
    }

    /// Every pair of rings `(i, j)`, `i < j`, that share a bond, together
    /// with the first shared bond in ring `i`'s order.
    pub fn fused_pairs(&self) -> Vec<(usize, usize, EdgeIndex)> {
        let mut pairs = Vec::new();
        for (i, a) in self.rings.iter().enumerate() {
            for (j, b) in self.rings.iter().enumerate().skip(i + 1) {
                if let Some(bond) = a.fusion_bond_with(b) {
                    pairs.push((i, j, bond));
                }
            }
        }
        pairs
    }
}

/// Bond membership bit vector, one bit per `EdgeIndex`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EdgeSet(Vec<u64>);

impl EdgeSet {
    fn of_cycle<A, B>(cycle: &[NodeIndex], mol: &Mol<A, B>) -> Self {
        let mut words = vec![0u64; mol.bond_count().div_ceil(64)];
        let len = cycle.len();
        for i in 0..len {
            if let Some(edge) = mol.bond_between(cycle[i], cycle[(i + 1) % len]) {
                let idx = edge.index();
                words[idx / 64] |= 1u64 << (idx % 64);
            }
        }
        Self(words)
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    fn has(&self, bit: usize) -> bool {
        self.0[bit / 64] & (1u64 << (bit % 64)) != 0
    }

    fn lowest(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .find(|(_, &w)| w != 0)
            .map(|(i, &w)| i * 64 + w.trailing_zeros() as usize)
    }

    fn xor_with(&mut self, other: &EdgeSet) {
        for (a, b) in self.0.iter_mut().zip(&other.0) {
            *a ^= *b;
        }
    }
}

/// Row-reduced cycle basis over GF(2).
#[derive(Debug, Default)]
struct Basis {
    rows: Vec<(usize, EdgeSet)>,
}

impl Basis {
    /// Reduces `set` against the basis and keeps it if anything is left.
    fn insert(&mut self, mut set: EdgeSet) -> bool {
        for (pivot, row) in &self.rows {
            if set.has(*pivot) {
                set.xor_with(row);
            }
        }
        match set.lowest() {
            Some(pivot) => {
                self.rows.push((pivot, set));
                true
            }
            None => false,
        }
    }
}

fn horton_candidates<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let n = mol.atom_count();
    let trees: Vec<BfsTree> = (0..n).map(|i| BfsTree::rooted_at(mol, NodeIndex::new(i))).collect();

    let mut candidates: Vec<Vec<NodeIndex>> = Vec::new();
    for edge in mol.bonds() {
        let Some((u, v)) = mol.bond_endpoints(edge) else {
            continue;
        };
        for tree in &trees {
            let (Some(du), Some(dv)) = (tree.dist[u.index()], tree.dist[v.index()]) else {
                continue;
            };
            if du + dv + 1 < 3 {
                continue;
            }
            let path_u = tree.path_to(u);
            let path_v = tree.path_to(v);
            if path_u[1..].iter().any(|a| path_v[1..].contains(a)) {
                continue;
            }
            let mut cycle = path_u;
            cycle.extend(path_v[1..].iter().rev());
            candidates.push(cycle);
        }
    }

    candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    candidates.dedup();
    candidates
}

/// Breadth-first shortest-path tree from one root.
struct BfsTree {
    root: NodeIndex,
    dist: Vec<Option<u32>>,
    pred: Vec<Option<NodeIndex>>,
}

impl BfsTree {
    fn rooted_at<A, B>(mol: &Mol<A, B>, root: NodeIndex) -> Self {
        let n = mol.atom_count();
        let mut dist = vec![None; n];
        let mut pred = vec![None; n];
        dist[root.index()] = Some(0);
        let mut queue = VecDeque::from([root]);
        while let Some(cur) = queue.pop_front() {
            let d = dist[cur.index()].unwrap_or(0);
            for nb in mol.neighbors(cur) {
                if dist[nb.index()].is_none() {
                    dist[nb.index()] = Some(d + 1);
                    pred[nb.index()] = Some(cur);
                    queue.push_back(nb);
                }
            }
        }
        Self { root, dist, pred }
    }

    /// Path root..=target. Only called for reachable targets.
    fn path_to(&self, target: NodeIndex) -> Vec<NodeIndex> {
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.root {
            match self.pred[cur.index()] {
                Some(p) => {
                    path.push(p);
                    cur = p;
                }
                None => return vec![],
            }
        }
        path.reverse();
        path
    }
}

/// Rotates a cycle to start at its lowest atom and picks the direction
/// whose second atom is lower.
fn normalize_cycle(cycle: &[NodeIndex]) -> Vec<NodeIndex> {
    let Some(start) = cycle.iter().enumerate().min_by_key(|&(_, a)| a).map(|(i, _)| i) else {
        return vec![];
    };
    let len = cycle.len();
    let mut out: Vec<NodeIndex> = (0..len).map(|i| cycle[(start + i) % len]).collect();
    if len > 2 && out[1] > out[len - 1] {
        out[1..].reverse();
    }
    out
}
