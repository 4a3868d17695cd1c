/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the Slater-Koster module

use thiserror::Error;

/// Result type for Slater-Koster operations
pub type Result<T> = std::result::Result<T, SlaterKosterError>;

/// Slater-Koster lookup errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlaterKosterError {
    /// No on-site energy for this species and orbital type
    #[error("No on-site energy for species '{species}', orbital '{orbital}'")]
    UnknownOnSiteEntry { species: String, orbital: String },

    /// Orbital pair outside the s/p x s/p table
    #[error("Unsupported orbital pair: '{0}'-'{1}'")]
    UnsupportedOrbitalPair(String, String),
}
