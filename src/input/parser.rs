/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Coordinate-file parser
//!
//! The format is one header line followed by `species x y z` rows.

use super::config::LoadConfig;
use super::errors::{InputError, Result};
use crate::atoms::{AtomRecord, BasisModel, SpeciesOrbitalTable};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads coordinate files and builds `BasisModel`s from them
#[derive(Debug, Clone, Default)]
pub struct CoordinateParser {
    config: LoadConfig,
}

impl CoordinateParser {
    /// Create a new parser with the given load configuration
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Read the atom records from a coordinate file
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<Vec<AtomRecord>> {
        let path = path.as_ref();
        debug!("Reading coordinates from {}", path.display());

        let file = File::open(path).map_err(InputError::IoError)?;
        parse_coordinates(BufReader::new(file))
    }

    /// Read a coordinate file, load it and expand the orbital basis
    pub fn read_structure<P: AsRef<Path>>(
        &self,
        path: P,
        species_table: &SpeciesOrbitalTable,
    ) -> Result<BasisModel> {
        let records = self.parse(&path)?;
        let model = BasisModel::from_records(
            &records,
            self.config.use_fractional,
            self.config.cell_dimensions,
            species_table,
        )?;

        info!(
            "{}: {} atoms, {} orbitals",
            path.as_ref().display(),
            model.atom_count(),
            model.orbital_count()
        );
        Ok(model)
    }
}

/// Parse coordinate records from any buffered reader; the first line is a header
pub fn parse_coordinates<R: BufRead>(reader: R) -> Result<Vec<AtomRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(InputError::ParseError {
                line: line_no,
                message: format!("expected 'species x y z', found {} fields", fields.len()),
            });
        }

        let mut coords = [0.0; 3];
        for (slot, field) in coords.iter_mut().zip(&fields[1..]) {
            *slot = field.parse::<f64>().map_err(|e| InputError::ParseError {
                line: line_no,
                message: format!("invalid coordinate '{}': {}", field, e),
            })?;
        }

        records.push(AtomRecord {
            species: fields[0].to_string(),
            coords,
        });
    }

    Ok(records)
}

/// Read the atom records of a coordinate file
pub fn read_coordinates<P: AsRef<Path>>(path: P) -> Result<Vec<AtomRecord>> {
    CoordinateParser::default().parse(path)
}

/// Read, load and expand a coordinate file in one call
pub fn read_structure<P: AsRef<Path>>(
    path: P,
    config: &LoadConfig,
    species_table: &SpeciesOrbitalTable,
) -> Result<BasisModel> {
    CoordinateParser::new(config.clone()).read_structure(path, species_table)
}
