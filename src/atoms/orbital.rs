/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Orbital labels and the per-atom orbital basis
//!
//! Only s and p orbitals are modelled. The canonical order `s, px, py, pz`
//! fixes both how an atom's basis is truncated and how orbital ids are assigned.

use super::errors::AtomError;
use std::fmt;
use std::str::FromStr;

/// Angular momentum character of an orbital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AngularMomentum {
    S,
    P,
}

impl AngularMomentum {
    /// Parse the single-letter token used by the on-site table ("s" or "p")
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            's' => Some(Self::S),
            'p' => Some(Self::P),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::S => 's',
            Self::P => 'p',
        }
    }
}

impl fmt::Display for AngularMomentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Cartesian axis a p orbital points along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Position of the axis in an `[x, y, z]` triple
    pub fn index(&self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Orbital label, in canonical basis order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrbitalLabel {
    S,
    Px,
    Py,
    Pz,
}

impl OrbitalLabel {
    /// All labels in canonical order; an atom with K orbitals uses `ALL[..K]`
    pub const ALL: [OrbitalLabel; 4] = [Self::S, Self::Px, Self::Py, Self::Pz];

    /// Maximum number of orbitals a single atom can carry
    pub const MAX_PER_ATOM: usize = Self::ALL.len();

    pub fn angular_momentum(&self) -> AngularMomentum {
        match self {
            Self::S => AngularMomentum::S,
            Self::Px | Self::Py | Self::Pz => AngularMomentum::P,
        }
    }

    /// Axis of a p orbital, `None` for s
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Self::S => None,
            Self::Px => Some(Axis::X),
            Self::Py => Some(Axis::Y),
            Self::Pz => Some(Axis::Z),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "s",
            Self::Px => "px",
            Self::Py => "py",
            Self::Pz => "pz",
        }
    }
}

impl FromStr for OrbitalLabel {
    type Err = AtomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // "ss" is the token older basis files use for the s orbital
            "s" | "ss" => Ok(Self::S),
            "px" => Ok(Self::Px),
            "py" => Ok(Self::Py),
            "pz" => Ok(Self::Pz),
            other => Err(AtomError::InvalidOrbitalLabel(other.to_string())),
        }
    }
}

impl fmt::Display for OrbitalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single basis orbital
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orbital {
    id: usize,
    label: OrbitalLabel,
    atom_id: usize,
}

impl Orbital {
    pub(crate) fn new(id: usize, label: OrbitalLabel, atom_id: usize) -> Self {
        Self { id, label, atom_id }
    }

    /// Global orbital id, dense over the whole system
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn label(&self) -> OrbitalLabel {
        self.label
    }

    /// Id of the atom this orbital sits on
    pub fn atom_id(&self) -> usize {
        self.atom_id
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (orbital {} on atom {})", self.label, self.id, self.atom_id)
    }
}
