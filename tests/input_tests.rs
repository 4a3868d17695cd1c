/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use approx::assert_relative_eq;
use sktb_rs::atoms::{AtomError, OrbitalLabel, SpeciesOrbitalTable};
use sktb_rs::input::{read_coordinates, read_structure, InputError, LoadConfig};
use std::fs;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_read_bulk_silicon() {
    let dir = TempDir::new().unwrap();
    let coords = write_fixture(
        &dir,
        "bulkSi.coord",
        "Species x y z\nSi 0.00 0.00 0.00\nSi 0.25 0.25 0.25\n",
    );
    let species = write_fixture(&dir, "species_log.db", "Si 4\nH 1\n");

    let table = SpeciesOrbitalTable::load(&species).unwrap();
    let model = read_structure(&coords, &LoadConfig::fractional([5.431; 3]), &table).unwrap();

    assert_eq!(model.atom_count(), 2);
    assert_eq!(model.orbital_count(), 8);
    assert_eq!(model.orbital(5).unwrap().label(), OrbitalLabel::Px);
    assert_eq!(model.orbital(5).unwrap().atom_id(), 1);
    assert_relative_eq!(model.atom(1).unwrap().position().z, 1.35775, epsilon = 1e-12);
    assert!(model.describe().contains("Simulation box dimensions 5.43100"));
}

#[test]
fn test_json_species_table() {
    let dir = TempDir::new().unwrap();
    let species = write_fixture(&dir, "species.json", r#"{"C": 4, "H": 1}"#);
    let table = SpeciesOrbitalTable::load(&species).unwrap();

    assert_eq!(table.get("C"), Some(4));
    assert_eq!(table.get("H"), Some(1));
}

#[test]
fn test_read_coordinates_cartesian() {
    let dir = TempDir::new().unwrap();
    let coords = write_fixture(&dir, "ch.coord", "title\nC 0.0 0.0 0.0\nH 1.09 0.0 0.0\n");

    let records = read_coordinates(&coords).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].species, "H");
    assert_eq!(records[1].coords, [1.09, 0.0, 0.0]);
}

#[test]
fn test_missing_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.coord");

    assert!(matches!(read_coordinates(&missing), Err(InputError::IoError(_))));
    assert!(matches!(
        SpeciesOrbitalTable::load(dir.path().join("nope.db")),
        Err(AtomError::FileError(_))
    ));
}

#[test]
fn test_structure_errors_are_wrapped() {
    let dir = TempDir::new().unwrap();
    let coords = write_fixture(&dir, "ge.coord", "header\nGe 0 0 0\n");
    let table = SpeciesOrbitalTable::new().with("Si", 4).unwrap();

    let err = read_structure(&coords, &LoadConfig::cartesian(), &table).unwrap_err();
    assert!(matches!(
        err,
        InputError::InvalidStructure(AtomError::UnknownSpecies(_))
    ));

    let err = read_structure(
        &coords,
        &LoadConfig {
            use_fractional: true,
            cell_dimensions: None,
        },
        &table,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        InputError::InvalidStructure(AtomError::InvalidConfiguration(_))
    ));
}
