/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Two-center interatomic matrix elements from the Slater-Koster table
//!
//! For direction cosines (l, m, n) of the bond i → j:
//!
//! | pair          | element                              |
//! |---------------|--------------------------------------|
//! | s, s          | V_ssσ                                |
//! | s, p_α        | cos_α · V_spσ                        |
//! | p_α, s        | −cos_α · V_spσ                       |
//! | p_α, p_α      | cos_α² · V_ppσ + (1 − cos_α²) · V_ppπ |
//! | p_α, p_β      | cos_α · cos_β · (V_ppσ − V_ppπ)      |

use super::bond::DirectionCosines;
use super::errors::{Result, SlaterKosterError};
use super::parameters::{bond_integral, EtaTable};
use crate::atoms::{Axis, OrbitalLabel};

/// Angular case of an orbital pair, in (i, j) order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitalPair {
    SS,
    SP(Axis),
    PS(Axis),
    PPDiagonal(Axis),
    PPOffDiagonal(Axis, Axis),
}

impl OrbitalPair {
    pub fn classify(i: OrbitalLabel, j: OrbitalLabel) -> Self {
        match (i.axis(), j.axis()) {
            (None, None) => Self::SS,
            (None, Some(b)) => Self::SP(b),
            (Some(a), None) => Self::PS(a),
            (Some(a), Some(b)) if a == b => Self::PPDiagonal(a),
            (Some(a), Some(b)) => Self::PPOffDiagonal(a, b),
        }
    }
}

/// Matrix element between orbital `i` on one atom and orbital `j` on another,
/// using the default η parameters
pub fn two_center(
    i: OrbitalLabel,
    j: OrbitalLabel,
    cosines: &DirectionCosines,
    distance: f64,
) -> f64 {
    two_center_with(&EtaTable::DEFAULT, i, j, cosines, distance)
}

/// Matrix element for an explicit η parameter set
pub fn two_center_with(
    eta: &EtaTable,
    i: OrbitalLabel,
    j: OrbitalLabel,
    cosines: &DirectionCosines,
    distance: f64,
) -> f64 {
    match OrbitalPair::classify(i, j) {
        OrbitalPair::SS => bond_integral(eta.ss_sigma, distance),
        OrbitalPair::SP(axis) => cosines.along(axis) * bond_integral(eta.sp_sigma, distance),
        OrbitalPair::PS(axis) => -cosines.along(axis) * bond_integral(eta.sp_sigma, distance),
        OrbitalPair::PPDiagonal(axis) => {
            let c2 = cosines.along(axis).powi(2);
            c2 * bond_integral(eta.pp_sigma, distance)
                + (1.0 - c2) * bond_integral(eta.pp_pi, distance)
        }
        OrbitalPair::PPOffDiagonal(a, b) => {
            cosines.along(a)
                * cosines.along(b)
                * (bond_integral(eta.pp_sigma, distance) - bond_integral(eta.pp_pi, distance))
        }
    }
}

/// String-keyed entry point: labels are "s" (or "ss"), "px", "py", "pz".
///
/// `x_cos`, `y_cos`, `z_cos` are the unit direction cosines of the bond from
/// the atom carrying orbital i to the atom carrying orbital j, and `distance`
/// is the internuclear distance in Å.
pub fn matrix_element(
    orbital_i: &str,
    orbital_j: &str,
    x_cos: f64,
    y_cos: f64,
    z_cos: f64,
    distance: f64,
) -> Result<f64> {
    let unsupported =
        || SlaterKosterError::UnsupportedOrbitalPair(orbital_i.to_string(), orbital_j.to_string());
    let i: OrbitalLabel = orbital_i.parse().map_err(|_| unsupported())?;
    let j: OrbitalLabel = orbital_j.parse().map_err(|_| unsupported())?;

    Ok(two_center(
        i,
        j,
        &DirectionCosines::new(x_cos, y_cos, z_cos),
        distance,
    ))
}
