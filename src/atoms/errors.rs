/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Invalid orbital count {count} for species {species} (expected 1..=4)")]
    InvalidOrbitalCount { species: String, count: i64 },

    #[error("Invalid orbital label: {0}")]
    InvalidOrbitalLabel(String),

    #[error("Atom index {0} out of range")]
    AtomIndexOutOfRange(usize),

    #[error("Atoms {0} and {1} occupy the same position")]
    CoincidentAtoms(usize, usize),

    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
