/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Configuration for loading coordinate files

use serde::{Deserialize, Serialize};

/// How coordinate records are turned into Cartesian positions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Coordinates are fractions of `cell_dimensions`
    pub use_fractional: bool,
    /// Orthorhombic cell extents in Å, required when `use_fractional` is set
    pub cell_dimensions: Option<[f64; 3]>,
}

impl LoadConfig {
    /// Cartesian coordinates in Å
    pub fn cartesian() -> Self {
        Self::default()
    }

    /// Fractional coordinates scaled by `cell`
    pub fn fractional(cell: [f64; 3]) -> Self {
        Self {
            use_fractional: true,
            cell_dimensions: Some(cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoadConfig::default();
        assert!(!config.use_fractional);
        assert_eq!(config.cell_dimensions, None);
        assert_eq!(config, LoadConfig::cartesian());
    }

    #[test]
    fn test_from_json() {
        let config: LoadConfig =
            serde_json::from_str(r#"{"use_fractional": true, "cell_dimensions": [5.431, 5.431, 5.431]}"#)
                .unwrap();
        assert_eq!(config, LoadConfig::fractional([5.431; 3]));

        let partial: LoadConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(partial, LoadConfig::cartesian());
    }
}
