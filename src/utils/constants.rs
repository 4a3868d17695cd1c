/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Physical constants used in tight-binding calculations

/// Bohr radius in Angstroms
pub const BOHR_RADIUS: f64 = 0.529177;

/// Rydberg energy in eV
pub const RYDBERG: f64 = 13.6057;

/// Hartree energy in eV
pub const HARTREE_TO_EV: f64 = 2.0 * RYDBERG;

/// Scale factor ħ²/mₑ in eV·Å², turning a dimensionless η into a bond
/// integral for distances in Å
pub const SLATER_KOSTER_SCALE: f64 = 7.619964162248216;
