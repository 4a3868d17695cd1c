/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Coordinate-file input
//!
//! A thin reader turning `species x y z` files into a `BasisModel`.

mod config;
mod errors;
mod parser;

pub use config::LoadConfig;
pub use errors::{InputError, Result};
pub use parser::{parse_coordinates, read_coordinates, read_structure, CoordinateParser};
