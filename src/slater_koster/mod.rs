/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Slater-Koster matrix-element module
//!
//! Stateless functions producing the numbers a tight-binding Hamiltonian is
//! built from: two-center hopping integrals for s/p orbitals, on-site
//! energies, and the Bloch phase used for k-space blocks. The parameter
//! tables are process-wide constants, so every function here can be called
//! from any thread.

mod bond;
mod errors;
mod on_site;
mod parameters;
mod phase;
mod two_center;

pub use bond::{Bond, DirectionCosines};
pub use errors::{Result, SlaterKosterError};
pub use on_site::{on_site_energy, on_site_energy_for};
pub use parameters::{bond_integral, BondSymmetry, EtaTable};
pub use phase::bloch_phase;
pub use two_center::{matrix_element, two_center, two_center_with, OrbitalPair};
