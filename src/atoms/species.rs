/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Species to orbital-count lookup
//!
//! The table is loaded once, before any orbital expansion, either from the
//! plain-text species database (`<species> <count>` per line) or from a JSON
//! object such as `{"Si": 4, "H": 1}`.

use super::errors::{AtomError, Result};
use super::orbital::OrbitalLabel;
use log::warn;
use std::collections::HashMap;
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// In-memory map from species token to the number of orbitals (1..=4) it contributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesOrbitalTable {
    counts: HashMap<String, usize>,
}

impl SpeciesOrbitalTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the orbital count for a species
    pub fn insert(&mut self, species: &str, count: i64) -> Result<()> {
        let checked = validate_count(species, count)?;
        if let Some(previous) = self.counts.insert(species.to_string(), checked) {
            if previous != checked {
                warn!(
                    "Species {} redefined: {} -> {} orbitals",
                    species, previous, checked
                );
            }
        }
        Ok(())
    }

    /// Builder-style insert
    pub fn with(mut self, species: &str, count: i64) -> Result<Self> {
        self.insert(species, count)?;
        Ok(self)
    }

    /// Orbital count for a species, if present
    pub fn get(&self, species: &str) -> Option<usize> {
        self.counts.get(species).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Parse the plain-text species database
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = Self::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(AtomError::ParseError(format!(
                    "line {}: expected '<species> <count>', found '{}'",
                    line_no + 1,
                    trimmed
                )));
            }

            let count = fields[1].parse::<i64>().map_err(|e| {
                AtomError::ParseError(format!(
                    "line {}: invalid orbital count '{}': {}",
                    line_no + 1,
                    fields[1],
                    e
                ))
            })?;
            table.insert(fields[0], count)?;
        }

        Ok(table)
    }

    /// Parse a JSON object mapping species to orbital counts
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, i64> = serde_json::from_str(json)
            .map_err(|e| AtomError::ParseError(format!("species table JSON: {}", e)))?;

        let mut table = Self::new();
        for (species, count) in raw {
            table.insert(&species, count)?;
        }
        Ok(table)
    }

    /// Load a species table from disk; `.json` files are read as JSON,
    /// anything else as the plain-text database format
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            let text = fs::read_to_string(path)?;
            Self::from_json_str(&text)
        } else {
            let file = fs::File::open(path)?;
            Self::from_reader(std::io::BufReader::new(file))
        }
    }
}

fn validate_count(species: &str, count: i64) -> Result<usize> {
    if count < 1 || count > OrbitalLabel::MAX_PER_ATOM as i64 {
        return Err(AtomError::InvalidOrbitalCount {
            species: species.to_string(),
            count,
        });
    }
    Ok(count as usize)
}
