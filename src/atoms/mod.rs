/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Geometry and orbital basis module
//!
//! Holds the atoms of one structure, assigns them dense ids, and expands each
//! atom into its s/p orbital basis using a species orbital-count table.

mod atom;
mod errors;
mod orbital;
mod species;
mod structure;
mod vector;

pub use atom::{Atom, AtomRecord};
pub use errors::{AtomError, Result};
pub use orbital::{AngularMomentum, Axis, Orbital, OrbitalLabel};
pub use species::SpeciesOrbitalTable;
pub use structure::BasisModel;
pub use vector::Vector3D;
