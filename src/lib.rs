/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # sktb-rs
//!
//! Input generation for empirical tight-binding calculations.
//!
//! The crate reads atomic positions, assigns every atom a species and an s/p
//! orbital basis, and evaluates the Slater-Koster two-center integrals,
//! on-site energies and Bloch phase factors a Hamiltonian is assembled from.
//! Assembly, diagonalization and band-structure analysis are left to the
//! caller.
//!
//! ```
//! use sktb_rs::slater_koster::matrix_element;
//!
//! // s-s coupling of two Si atoms 2 Å apart along x
//! let v = matrix_element("s", "s", 1.0, 0.0, 0.0, 2.0).unwrap();
//! assert!((v - 7.619964162248216 * -1.938 / 4.0).abs() < 1e-12);
//! ```

pub mod atoms;
pub mod cli;
pub mod input;
pub mod slater_koster;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
