use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petgraph::graph::NodeIndex;

use ringpi::{
    add_hs, set_aromaticity, Atom, AromaticityModel, Bond, BondOrder, Element, Mol,
    ProtonInPiSystem, ProtonInPiSystemParams, RingInfo,
};

/// Linear polyene CH2=CH-CH=CH-...=CH2 with `n` carbons, hydrogens explicit.
fn polyene(n: usize) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    for i in 0..n {
        let hydrogen_count = if i == 0 || i == n - 1 { 2 } else { 1 };
        mol.add_atom(Atom {
            hydrogen_count,
            ..Atom::of(Element::C)
        });
    }
    for i in 0..n - 1 {
        let order = if i % 2 == 0 { BondOrder::Double } else { BondOrder::Single };
        mol.add_bond(NodeIndex::new(i), NodeIndex::new(i + 1), Bond::new(order));
    }
    add_hs(&mol)
}

/// Naphthalene in Kekulé form, hydrogens explicit.
fn naphthalene() -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    for i in 0..10 {
        let hydrogen_count = if i == 4 || i == 5 { 0 } else { 1 };
        mol.add_atom(Atom {
            hydrogen_count,
            ..Atom::of(Element::C)
        });
    }
    let bonds = [
        (0, 1, BondOrder::Double),
        (1, 2, BondOrder::Single),
        (2, 3, BondOrder::Double),
        (3, 4, BondOrder::Single),
        (4, 5, BondOrder::Double),
        (5, 0, BondOrder::Single),
        (4, 6, BondOrder::Single),
        (6, 7, BondOrder::Double),
        (7, 8, BondOrder::Single),
        (8, 9, BondOrder::Double),
        (9, 5, BondOrder::Single),
    ];
    for (a, b, order) in bonds {
        mol.add_bond(NodeIndex::new(a), NodeIndex::new(b), Bond::new(order));
    }
    add_hs(&mol)
}

fn protons(mol: &Mol<Atom, Bond>) -> Vec<usize> {
    mol.atoms()
        .filter(|&i| mol.atom(i).atomic_num == 1)
        .map(|i| i.index())
        .collect()
}

fn bench_proton_pi(c: &mut Criterion) {
    let cases = [("polyene_40", polyene(40), false), ("naphthalene", naphthalene(), true)];

    let mut group = c.benchmark_group("proton_pi");
    for (name, mol, check_aromaticity) in &cases {
        let hs = protons(mol);

        group.bench_function(format!("{name}/cached"), |b| {
            let mut desc = ProtonInPiSystem::new();
            b.iter(|| {
                for &atom_position in &hs {
                    desc.set_params(ProtonInPiSystemParams {
                        atom_position,
                        check_aromaticity: *check_aromaticity,
                    });
                    black_box(desc.evaluate(black_box(mol)).unwrap());
                }
            })
        });

        group.bench_function(format!("{name}/uncached"), |b| {
            let mut desc = ProtonInPiSystem::new();
            b.iter(|| {
                for &atom_position in &hs {
                    desc.clear_cache();
                    desc.set_params(ProtonInPiSystemParams {
                        atom_position,
                        check_aromaticity: *check_aromaticity,
                    });
                    black_box(desc.evaluate(black_box(mol)).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn bench_rings(c: &mut Criterion) {
    let mol = naphthalene();

    let mut group = c.benchmark_group("rings");
    group.bench_function("sssr/naphthalene", |b| {
        b.iter(|| black_box(RingInfo::sssr(black_box(&mol))))
    });
    group.bench_function("aromaticity/naphthalene", |b| {
        b.iter(|| {
            let mut copy = mol.clone();
            set_aromaticity(&mut copy, AromaticityModel::Hueckel);
            black_box(copy)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_proton_pi, bench_rings);
criterion_main!(benches);
