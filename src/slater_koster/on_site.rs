/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! On-site (diagonal) energies

use super::errors::{Result, SlaterKosterError};
use super::parameters::ON_SITE_ENERGIES;
use crate::atoms::AngularMomentum;

/// On-site energy in eV for an orbital on an atom of `species`.
///
/// Only the angular-momentum letter of `orbital` matters, so "px", "py" and
/// "pz" all map to the species' p level.
pub fn on_site_energy(species: &str, orbital: &str) -> Result<f64> {
    orbital
        .chars()
        .next()
        .and_then(AngularMomentum::from_letter)
        .and_then(|l| on_site_energy_for(species, l))
        .ok_or_else(|| SlaterKosterError::UnknownOnSiteEntry {
            species: species.to_string(),
            orbital: orbital.to_string(),
        })
}

/// Typed lookup; `None` when the table has no entry
pub fn on_site_energy_for(species: &str, l: AngularMomentum) -> Option<f64> {
    ON_SITE_ENERGIES
        .get(species)
        .and_then(|by_l| by_l.get(&l))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_entries() {
        assert_eq!(on_site_energy("Si", "s").unwrap(), -12.2);
        assert_eq!(on_site_energy("Si", "px").unwrap(), -5.75);
        assert_eq!(on_site_energy("C", "s").unwrap(), -17.52);
        assert_eq!(on_site_energy("C", "pz").unwrap(), -8.97);
        assert_eq!(on_site_energy("H", "s").unwrap(), -13.61);
    }

    #[test]
    fn test_p_direction_does_not_matter() {
        let px = on_site_energy("Si", "px").unwrap();
        assert_eq!(on_site_energy("Si", "py").unwrap(), px);
        assert_eq!(on_site_energy("Si", "pz").unwrap(), px);
    }

    #[test]
    fn test_missing_entries() {
        assert_eq!(
            on_site_energy("H", "px"),
            Err(SlaterKosterError::UnknownOnSiteEntry {
                species: "H".to_string(),
                orbital: "px".to_string(),
            })
        );
        assert!(on_site_energy("Ge", "s").is_err());
        assert!(on_site_energy("Si", "dxy").is_err());
        assert!(on_site_energy("Si", "").is_err());
    }
}
