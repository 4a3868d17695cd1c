/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Fixed tight-binding parameter tables
//!
//! Bond integrals follow the Harrison form `V = K·η/d²` with K = ħ²/mₑ.
//! On-site energies are free-atom orbital energies in eV.

use crate::atoms::AngularMomentum;
use crate::utils::constants::SLATER_KOSTER_SCALE;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Symmetry of the orbital overlap about the bond axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondSymmetry {
    Sigma,
    Pi,
}

/// Dimensionless η coefficients for s/p bonds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EtaTable {
    pub ss_sigma: f64,
    pub sp_sigma: f64,
    pub ps_sigma: f64,
    pub pp_sigma: f64,
    pub pp_pi: f64,
}

impl EtaTable {
    /// Parameter set used by default for Si/C/H structures
    pub const DEFAULT: EtaTable = EtaTable {
        ss_sigma: -1.938,
        sp_sigma: 1.745,
        ps_sigma: 1.745,
        pp_sigma: 3.050,
        pp_pi: -1.075,
    };

    /// Harrison's universal parameters
    pub const HARRISON: EtaTable = EtaTable {
        ss_sigma: -1.40,
        sp_sigma: 1.84,
        ps_sigma: 1.84,
        pp_sigma: 3.24,
        pp_pi: -0.81,
    };

    /// Look up η for an (l_i, l_j, symmetry) triple.
    ///
    /// Returns `None` for combinations that carry no bond, such as s-s-π.
    pub fn eta(
        &self,
        l_i: AngularMomentum,
        l_j: AngularMomentum,
        symmetry: BondSymmetry,
    ) -> Option<f64> {
        use crate::atoms::AngularMomentum::{P, S};
        use BondSymmetry::{Pi, Sigma};

        match (l_i, l_j, symmetry) {
            (S, S, Sigma) => Some(self.ss_sigma),
            (S, P, Sigma) => Some(self.sp_sigma),
            (P, S, Sigma) => Some(self.ps_sigma),
            (P, P, Sigma) => Some(self.pp_sigma),
            (P, P, Pi) => Some(self.pp_pi),
            (S, _, Pi) | (_, S, Pi) => None,
        }
    }
}

impl Default for EtaTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bond integral `V(η, d) = K·η/d²` in eV for `distance` in Å
pub fn bond_integral(eta: f64, distance: f64) -> f64 {
    SLATER_KOSTER_SCALE * eta / (distance * distance)
}

/// On-site orbital energies (eV), keyed by species then angular momentum
pub(crate) static ON_SITE_ENERGIES: Lazy<HashMap<&'static str, HashMap<AngularMomentum, f64>>> =
    Lazy::new(|| {
        HashMap::from([
            (
                "C",
                HashMap::from([(AngularMomentum::S, -17.52), (AngularMomentum::P, -8.97)]),
            ),
            ("H", HashMap::from([(AngularMomentum::S, -13.61)])),
            (
                "Si",
                HashMap::from([(AngularMomentum::S, -12.2), (AngularMomentum::P, -5.75)]),
            ),
        ])
    });
