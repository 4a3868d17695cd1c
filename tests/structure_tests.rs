/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use approx::assert_relative_eq;
use sktb_rs::atoms::{AtomError, AtomRecord, BasisModel, OrbitalLabel, SpeciesOrbitalTable};

fn bulk_silicon_fractional() -> Vec<AtomRecord> {
    vec![
        AtomRecord::new("Si", 0.0, 0.0, 0.0),
        AtomRecord::new("Si", 0.0, 0.5, 0.5),
        AtomRecord::new("Si", 0.5, 0.0, 0.5),
        AtomRecord::new("Si", 0.5, 0.5, 0.0),
        AtomRecord::new("Si", 0.25, 0.25, 0.25),
        AtomRecord::new("Si", 0.25, 0.75, 0.75),
        AtomRecord::new("Si", 0.75, 0.25, 0.75),
        AtomRecord::new("Si", 0.75, 0.75, 0.25),
    ]
}

#[test]
fn test_atom_ids_follow_input_order() {
    let records = bulk_silicon_fractional();
    let mut model = BasisModel::new();
    model.load(&records, false, None).unwrap();

    assert_eq!(model.atom_count(), records.len());
    for (id, (atom, record)) in model.atoms().iter().zip(&records).enumerate() {
        assert_eq!(atom.id(), id);
        assert_eq!(atom.species(), record.species);
        assert_eq!(atom.position().to_array(), record.coords);
    }
}

#[test]
fn test_four_orbitals_per_atom() {
    let records = bulk_silicon_fractional();
    let table = SpeciesOrbitalTable::new().with("Si", 4).unwrap();
    let model =
        BasisModel::from_records(&records, true, Some([5.431, 5.431, 5.431]), &table).unwrap();

    assert_eq!(model.orbital_count(), 4 * records.len());
    for (id, orbital) in model.orbitals().iter().enumerate() {
        assert_eq!(orbital.id(), id);
        assert_eq!(orbital.atom_id(), id / 4);
        assert_eq!(orbital.label(), OrbitalLabel::ALL[id % 4]);
    }
}

#[test]
fn test_orbital_ids_increase_with_atom_id() {
    let records = vec![
        AtomRecord::new("C", 0.0, 0.0, 0.0),
        AtomRecord::new("H", 1.09, 0.0, 0.0),
        AtomRecord::new("H", -0.36, 1.03, 0.0),
        AtomRecord::new("C", 5.0, 0.0, 0.0),
    ];
    let table = SpeciesOrbitalTable::new()
        .with("C", 4)
        .unwrap()
        .with("H", 1)
        .unwrap();
    let model = BasisModel::from_records(&records, false, None, &table).unwrap();

    assert_eq!(model.orbital_count(), 10);
    let orbitals = model.orbitals();
    for pair in orbitals.windows(2) {
        assert!(pair[0].atom_id() <= pair[1].atom_id());
        if pair[0].atom_id() == pair[1].atom_id() {
            assert!(pair[0].label() < pair[1].label());
        }
    }
    assert_eq!(model.orbitals_of_atom(3).unwrap()[0].id(), 6);
}

#[test]
fn test_expansion_is_reproducible() {
    let records = bulk_silicon_fractional();
    let table = SpeciesOrbitalTable::new().with("Si", 2).unwrap();

    let first = BasisModel::from_records(&records, false, None, &table).unwrap();
    let second = BasisModel::from_records(&records, false, None, &table).unwrap();
    assert_eq!(first.orbitals(), second.orbitals());
}

#[test]
fn test_fractional_conversion() {
    let model = {
        let mut m = BasisModel::new();
        m.load(&bulk_silicon_fractional(), true, Some([5.431, 5.431, 5.431]))
            .unwrap();
        m
    };

    let p = model.atom(4).unwrap().position();
    assert_relative_eq!(p.x, 1.35775, epsilon = 1e-12);

    // Nearest-neighbour distance in diamond Si is a·√3/4
    let bond = model.bond(0, 4).unwrap();
    assert_relative_eq!(bond.distance(), 5.431 * 3.0_f64.sqrt() / 4.0, epsilon = 1e-12);
    // No periodic images: only bonds inside the conventional cell are found
    assert_eq!(model.neighbor_pairs(2.4).len(), 7);
}

#[test]
fn test_load_errors() {
    let mut model = BasisModel::new();
    let records = bulk_silicon_fractional();

    assert!(matches!(
        model.load(&records, true, None),
        Err(AtomError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        model.load(&records, true, Some([-1.0, 5.0, 5.0])),
        Err(AtomError::InvalidConfiguration(_))
    ));

    model.load(&records, false, None).unwrap();
    let table = SpeciesOrbitalTable::new().with("C", 4).unwrap();
    assert!(matches!(
        model.expand_orbitals(&table),
        Err(AtomError::UnknownSpecies(ref s)) if s == "Si"
    ));
}
