/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Geometry and orbital basis for a tight-binding calculation

use super::atom::{Atom, AtomRecord};
use super::errors::{AtomError, Result};
use super::orbital::{Orbital, OrbitalLabel};
use super::species::SpeciesOrbitalTable;
use super::vector::Vector3D;
use crate::slater_koster::Bond;
use log::debug;
use rayon::prelude::*;
use std::fmt;
use std::ops::Range;

/// Atoms plus their expanded orbital basis, for one coordinate-file load.
///
/// Atom ids are `0..N` in input order. Orbital ids are `0..M`, increasing with
/// atom id and following `s, px, py, pz` within each atom, so the orbitals of
/// an atom always form a contiguous id range.
#[derive(Debug, Default, Clone)]
pub struct BasisModel {
    atoms: Vec<Atom>,
    orbitals: Vec<Orbital>,
    /// Orbital id range per atom, filled by `expand_orbitals`
    orbital_ranges: Vec<Range<usize>>,
    /// Cell extents, kept only when fractional coordinates were loaded
    cell_dimensions: Option<[f64; 3]>,
}

impl BasisModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and expand in one step
    pub fn from_records(
        records: &[AtomRecord],
        use_fractional: bool,
        cell_dimensions: Option<[f64; 3]>,
        species_table: &SpeciesOrbitalTable,
    ) -> Result<Self> {
        let mut model = Self::new();
        model.load(records, use_fractional, cell_dimensions)?;
        model.expand_orbitals(species_table)?;
        Ok(model)
    }

    /// Populate the atom set from coordinate records.
    ///
    /// With `use_fractional` each coordinate is scaled by the matching cell
    /// extent, which must then be present, finite and positive. Any previous
    /// atoms and orbitals are discarded. On error the model is left untouched.
    pub fn load(
        &mut self,
        records: &[AtomRecord],
        use_fractional: bool,
        cell_dimensions: Option<[f64; 3]>,
    ) -> Result<()> {
        let cell = if use_fractional {
            Some(validate_cell(cell_dimensions)?)
        } else {
            None
        };

        let atoms: Vec<Atom> = records
            .iter()
            .enumerate()
            .map(|(id, record)| {
                let raw = Vector3D::from_array(record.coords);
                let position = match cell {
                    Some(extent) => raw.scale_by(&Vector3D::from_array(extent)),
                    None => raw,
                };
                Atom::new(id, &record.species, position)
            })
            .collect();

        debug!(
            "Loaded {} atoms ({} coordinates)",
            atoms.len(),
            if cell.is_some() { "fractional" } else { "Cartesian" }
        );

        self.atoms = atoms;
        self.cell_dimensions = cell;
        self.orbitals.clear();
        self.orbital_ranges.clear();
        Ok(())
    }

    /// Expand every atom into its orbital basis.
    ///
    /// An atom whose species maps to K orbitals receives the first K labels of
    /// `s, px, py, pz`. Fails with `UnknownSpecies` on the first atom whose
    /// species is missing from the table; no orbitals are stored in that case.
    pub fn expand_orbitals(&mut self, species_table: &SpeciesOrbitalTable) -> Result<()> {
        let mut orbitals = Vec::new();
        let mut ranges = Vec::with_capacity(self.atoms.len());

        for atom in &self.atoms {
            let count = species_table
                .get(atom.species())
                .ok_or_else(|| AtomError::UnknownSpecies(atom.species().to_string()))?;

            let start = orbitals.len();
            for label in &OrbitalLabel::ALL[..count] {
                orbitals.push(Orbital::new(orbitals.len(), *label, atom.id()));
            }
            ranges.push(start..orbitals.len());
        }

        debug!(
            "Expanded {} atoms into {} orbitals",
            self.atoms.len(),
            orbitals.len()
        );

        self.orbitals = orbitals;
        self.orbital_ranges = ranges;
        Ok(())
    }

    /// Human-readable dump of the loaded geometry
    pub fn describe(&self) -> String {
        let mut out = String::from("\nInput file interpreted as:\n\n");
        for atom in &self.atoms {
            out.push_str(&atom.to_string());
            out.push('\n');
        }
        if let Some(cell) = self.cell_dimensions {
            out.push_str("Fractional Coordinates used\n");
            out.push_str(&format!(
                "Simulation box dimensions {:.5} x {:.5} x {:.5} Angstroms\n",
                cell[0], cell[1], cell[2]
            ));
        }
        out
    }

    /// Get a slice of all atoms, indexed by id
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Get a slice of all orbitals, indexed by id
    pub fn orbitals(&self) -> &[Orbital] {
        &self.orbitals
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn orbital_count(&self) -> usize {
        self.orbitals.len()
    }

    pub fn atom(&self, id: usize) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn orbital(&self, id: usize) -> Option<&Orbital> {
        self.orbitals.get(id)
    }

    /// Orbitals belonging to one atom; empty before `expand_orbitals`
    pub fn orbitals_of_atom(&self, atom_id: usize) -> Result<&[Orbital]> {
        if atom_id >= self.atoms.len() {
            return Err(AtomError::AtomIndexOutOfRange(atom_id));
        }
        Ok(self
            .orbital_ranges
            .get(atom_id)
            .map(|range| &self.orbitals[range.clone()])
            .unwrap_or(&[]))
    }

    /// Cell extents used for the fractional-to-Cartesian conversion, if any
    pub fn cell_dimensions(&self) -> Option<[f64; 3]> {
        self.cell_dimensions
    }

    /// Geometry of the bond from atom `i` to atom `j`
    pub fn bond(&self, i: usize, j: usize) -> Result<Bond> {
        let from = self.atom(i).ok_or(AtomError::AtomIndexOutOfRange(i))?;
        let to = self.atom(j).ok_or(AtomError::AtomIndexOutOfRange(j))?;
        Bond::between(from.position(), to.position()).ok_or(AtomError::CoincidentAtoms(i, j))
    }

    /// All atom pairs `(i, j)` with `i < j` whose separation is at most `cutoff`,
    /// sorted by `i` then `j`
    pub fn neighbor_pairs(&self, cutoff: f64) -> Vec<(usize, usize)> {
        let atoms = &self.atoms;
        (0..atoms.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                ((i + 1)..atoms.len())
                    .filter(move |&j| atoms[i].distance_to(&atoms[j]) <= cutoff)
                    .map(move |j| (i, j))
            })
            .collect()
    }
}

impl fmt::Display for BasisModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn validate_cell(cell_dimensions: Option<[f64; 3]>) -> Result<[f64; 3]> {
    let cell = cell_dimensions.ok_or_else(|| {
        AtomError::InvalidConfiguration(
            "fractional coordinates requested without cell dimensions".to_string(),
        )
    })?;

    if cell.iter().any(|&c| !c.is_finite() || c <= 0.0) {
        return Err(AtomError::InvalidConfiguration(format!(
            "cell dimensions must be positive, got {:?}",
            cell
        )));
    }
    Ok(cell)
}
