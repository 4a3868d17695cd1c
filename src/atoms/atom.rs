/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atom representation for tight-binding geometries

use super::vector::Vector3D;
use std::fmt;

/// One row of a coordinate file: species token plus three coordinates.
///
/// The coordinates are either Cartesian (Å) or fractional, depending on how
/// the record set is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub species: String,
    pub coords: [f64; 3],
}

impl AtomRecord {
    pub fn new(species: &str, x: f64, y: f64, z: f64) -> Self {
        Self {
            species: species.to_string(),
            coords: [x, y, z],
        }
    }
}

/// Represents an atom in the structure
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Dense id, assigned in input order
    id: usize,
    /// Species token, e.g. "Si"
    species: String,
    /// Absolute Cartesian position in Å
    position: Vector3D,
}

impl Atom {
    pub(crate) fn new(id: usize, species: &str, position: Vector3D) -> Self {
        Self {
            id,
            species: species.to_string(),
            position,
        }
    }

    /// Get the atom id
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the species token
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Get the atom's Cartesian position
    pub fn position(&self) -> &Vector3D {
        &self.position
    }

    /// Calculate the distance to another atom
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.position.distance(&other.position)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UID: {}, Species: {}, xyz coordinates: {} Angstroms",
            self.id, self.species, self.position
        )
    }
}
