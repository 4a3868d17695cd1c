/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Bloch phase factor for periodic Hamiltonians

use crate::atoms::Vector3D;
use num_complex::Complex64;

/// `exp(i k·r)` for a k-point (Å⁻¹) and a real-space displacement (Å)
pub fn bloch_phase(k_point: &Vector3D, displacement: &Vector3D) -> Complex64 {
    Complex64::new(0.0, k_point.dot(displacement)).exp()
}
