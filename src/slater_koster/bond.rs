/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Bond geometry as seen by the two-center integrals

use crate::atoms::{Axis, Vector3D};

/// Direction cosines of a bond vector (components of the unit vector i → j)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionCosines {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl DirectionCosines {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Cosines of an arbitrary non-zero vector
    pub fn from_vector(v: &Vector3D) -> Option<Self> {
        v.unit().map(|u| Self::new(u.x, u.y, u.z))
    }

    /// Cosine along one Cartesian axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Displacement, length and direction of the bond from atom i to atom j
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    displacement: Vector3D,
    distance: f64,
    cosines: DirectionCosines,
}

impl Bond {
    /// Bond from `from` to `to`; `None` if the two points coincide
    pub fn between(from: &Vector3D, to: &Vector3D) -> Option<Self> {
        let displacement = *to - *from;
        let cosines = DirectionCosines::from_vector(&displacement)?;
        Some(Self {
            displacement,
            distance: displacement.length(),
            cosines,
        })
    }

    /// `r_j - r_i`, the vector entering the Bloch phase
    pub fn displacement(&self) -> &Vector3D {
        &self.displacement
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn cosines(&self) -> &DirectionCosines {
        &self.cosines
    }

    /// The same bond seen from atom j
    pub fn reversed(&self) -> Self {
        let d = -self.displacement;
        Self {
            displacement: d,
            distance: self.distance,
            cosines: DirectionCosines::new(-self.cosines.x, -self.cosines.y, -self.cosines.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bond_geometry() {
        let bond = Bond::between(&Vector3D::new(1.0, 1.0, 1.0), &Vector3D::new(4.0, 5.0, 1.0))
            .unwrap();

        assert_relative_eq!(bond.distance(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(bond.cosines().x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(bond.cosines().y, 0.8, epsilon = 1e-12);
        assert_relative_eq!(bond.cosines().along(Axis::Z), 0.0, epsilon = 1e-12);
        assert_eq!(bond.displacement(), &Vector3D::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_reversed_bond() {
        let bond = Bond::between(&Vector3D::origin(), &Vector3D::new(0.0, 0.0, 2.0)).unwrap();
        let back = bond.reversed();

        assert_eq!(back.distance(), bond.distance());
        assert_eq!(back.cosines().z, -1.0);
        assert_eq!(back.displacement(), &Vector3D::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_coincident_points() {
        let p = Vector3D::new(1.0, 2.0, 3.0);
        assert!(Bond::between(&p, &p).is_none());
    }
}
