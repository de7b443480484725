use petgraph::graph::{EdgeIndex, NodeIndex};
use proptest::prelude::*;

use ringpi::{Atom, Bond, BondOrder, Element, Mol, Ring, RingBond, RingInfo};

fn order_strategy() -> impl Strategy<Value = BondOrder> {
    prop_oneof![
        3 => Just(BondOrder::Single),
        2 => Just(BondOrder::Double),
        1 => Just(BondOrder::Triple),
    ]
}

/// Bond orders for a ring of 3..12 atoms plus a permutation of its bonds.
fn ring_strategy() -> impl Strategy<Value = (Vec<BondOrder>, Vec<usize>)> {
    (3usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(order_strategy(), n),
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
        )
    })
}

/// Single carbon ring where bond `i` joins atom `i` to atom `i + 1`.
fn cycle_mol(orders: &[BondOrder]) -> Mol<Atom, Bond> {
    let n = orders.len();
    let mut mol = Mol::new();
    for _ in 0..n {
        mol.add_atom(Atom::of(Element::C));
    }
    for (i, &order) in orders.iter().enumerate() {
        mol.add_bond(NodeIndex::new(i), NodeIndex::new((i + 1) % n), Bond::new(order));
    }
    mol
}

fn full_ring(mol: &Mol<Atom, Bond>) -> Ring {
    let cycle: Vec<_> = mol.atoms().collect();
    Ring::from_cycle(mol, &cycle).unwrap()
}

fn sorted_ids(ring: &Ring) -> Vec<EdgeIndex> {
    let mut ids: Vec<_> = ring.bond_ids().collect();
    ids.sort();
    ids
}

proptest! {
    #[test]
    fn cycle_size_and_order_sum((orders, _) in ring_strategy()) {
        let mol = cycle_mol(&orders);
        let ring = full_ring(&mol);
        prop_assert_eq!(ring.size(), orders.len());
        prop_assert_eq!(ring.bond_count(), orders.len());
        let expected: u32 = orders.iter().map(|o| o.as_u8() as u32).sum();
        prop_assert_eq!(ring.bond_order_sum(), expected);
    }

    #[test]
    fn walk_visits_every_bond_once((orders, perm) in ring_strategy(), forward in any::<bool>()) {
        let mol = cycle_mol(&orders);
        let ring = full_ring(&mol);
        let start = ring.bonds()[perm[0]];
        let pivot = if forward { start.atoms.0 } else { start.atoms.1 };

        let walked: Vec<_> = ring.walk(start.id, pivot).collect();
        prop_assert_eq!(walked.len(), ring.bond_count());
        prop_assert_eq!(walked[0], start.id);
        let mut seen = walked.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), walked.len());

        // Consecutive bonds share exactly one atom.
        for pair in walked.windows(2) {
            let a = ring.bond(pair[0]).unwrap();
            let b = ring.bond(pair[1]).unwrap();
            prop_assert!(a.contains(b.atoms.0) ^ a.contains(b.atoms.1));
        }
    }

    #[test]
    fn next_bond_steps_to_a_neighbour((orders, perm) in ring_strategy()) {
        let mol = cycle_mol(&orders);
        let ring = full_ring(&mol);
        let from = ring.bonds()[perm[0]];
        for pivot in [from.atoms.0, from.atoms.1] {
            let next = ring.next_bond(from.id, pivot).unwrap();
            prop_assert_ne!(next, from.id);
            prop_assert!(ring.bond(next).unwrap().contains(pivot));
        }
    }

    #[test]
    fn from_bonds_recovers_shuffled_cycle((orders, perm) in ring_strategy()) {
        let mol = cycle_mol(&orders);
        let ring = full_ring(&mol);
        let shuffled: Vec<RingBond> = perm.iter().map(|&i| ring.bonds()[i]).collect();
        let rebuilt = Ring::from_bonds(shuffled).unwrap();

        prop_assert_eq!(rebuilt.size(), ring.size());
        prop_assert_eq!(sorted_ids(&rebuilt), sorted_ids(&ring));
        prop_assert_eq!(rebuilt.bond_order_sum(), ring.bond_order_sum());
        for &atom in ring.atoms() {
            prop_assert!(rebuilt.contains_atom(atom));
        }
    }

    #[test]
    fn from_bonds_rejects_open_chain((orders, perm) in ring_strategy()) {
        let mol = cycle_mol(&orders);
        let ring = full_ring(&mol);
        let open: Vec<RingBond> = perm[1..].iter().map(|&i| ring.bonds()[i]).collect();
        prop_assert!(Ring::from_bonds(open).is_none());
    }

    #[test]
    fn sssr_of_single_cycle((orders, _) in ring_strategy()) {
        let mol = cycle_mol(&orders);
        let info = RingInfo::sssr(&mol);
        prop_assert_eq!(info.num_rings(), 1);
        prop_assert_eq!(sorted_ids(&info.rings()[0]), sorted_ids(&full_ring(&mol)));
    }

    #[test]
    fn fused_perimeter_size(a in 3usize..9, b in 3usize..9) {
        // Ring A is atoms 0..a. Ring B reuses atoms 0 and 1 and adds b - 2
        // more, so the rings share exactly the bond 0-1.
        let mut mol = Mol::<Atom, Bond>::new();
        for _ in 0..(a + b - 2) {
            mol.add_atom(Atom::of(Element::C));
        }
        let n = NodeIndex::new;
        let ring_a: Vec<_> = (0..a).map(n).collect();
        let mut ring_b = vec![n(1), n(0)];
        ring_b.extend((a..a + b - 2).map(n));
        for cycle in [&ring_a, &ring_b] {
            for i in 0..cycle.len() {
                let (x, y) = (cycle[i], cycle[(i + 1) % cycle.len()]);
                if mol.bond_between(x, y).is_none() {
                    mol.add_bond(x, y, Bond::default());
                }
            }
        }

        let ra = Ring::from_cycle(&mol, &ring_a).unwrap();
        let rb = Ring::from_cycle(&mol, &ring_b).unwrap();
        let shared = mol.bond_between(n(0), n(1)).unwrap();
        prop_assert_eq!(ra.fusion_bond_with(&rb), Some(shared));
        prop_assert_eq!(rb.fusion_bond_with(&ra), Some(shared));

        let perimeter = ra.fused_perimeter(&rb).unwrap();
        prop_assert_eq!(perimeter.size(), a + b - 2);
        prop_assert!(!perimeter.contains_bond(shared));
        prop_assert_eq!(perimeter.bond_order_sum() as usize, a + b - 2);
    }
}
