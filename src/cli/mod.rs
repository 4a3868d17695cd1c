/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! Reads a structure, prints its geometry, the on-site energy of every
//! orbital, and the Slater-Koster elements for every atom pair inside a
//! cutoff, optionally weighted by a Bloch phase.

use crate::atoms::{BasisModel, SpeciesOrbitalTable, Vector3D};
use crate::input::{CoordinateParser, LoadConfig};
use crate::slater_koster::{bloch_phase, on_site_energy, two_center_with, EtaTable};
use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use log::info;
use std::fmt::Write as _;
use std::path::PathBuf;

/// η parameter set selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EtaSet {
    Default,
    Harrison,
}

impl EtaSet {
    pub fn table(&self) -> EtaTable {
        match self {
            Self::Default => EtaTable::DEFAULT,
            Self::Harrison => EtaTable::HARRISON,
        }
    }
}

/// Slater-Koster tight-binding matrix elements for a structure
#[derive(Debug, Parser)]
#[command(name = "sktb", version, about)]
pub struct Cli {
    /// Coordinate file: one header line, then `species x y z` rows
    pub coords: PathBuf,

    /// Species orbital-count table (`<species> <count>` lines, or .json)
    #[arg(short, long)]
    pub species: PathBuf,

    /// Interpret coordinates as fractions of the cell given by --cell
    #[arg(long, requires = "cell")]
    pub fractional: bool,

    /// Orthorhombic cell extents in Angstrom
    #[arg(long, num_args = 3, value_names = ["A", "B", "C"])]
    pub cell: Option<Vec<f64>>,

    /// Neighbour cutoff in Angstrom
    #[arg(long, default_value_t = 2.5)]
    pub cutoff: f64,

    /// Weight each element by exp(i k·r) for this k-point (1/Angstrom)
    #[arg(long, num_args = 3, value_names = ["KX", "KY", "KZ"], allow_negative_numbers = true)]
    pub kpoint: Option<Vec<f64>>,

    /// η parameter set
    #[arg(long, value_enum, default_value_t = EtaSet::Default)]
    pub eta: EtaSet,
}

impl Cli {
    /// Load configuration described by the flags
    pub fn load_config(&self) -> anyhow::Result<LoadConfig> {
        if !self.fractional {
            return Ok(LoadConfig::cartesian());
        }
        match self.cell.as_deref() {
            Some(&[a, b, c]) => Ok(LoadConfig::fractional([a, b, c])),
            _ => bail!("--fractional needs --cell A B C"),
        }
    }

    fn kpoint(&self) -> Option<Vector3D> {
        match self.kpoint.as_deref() {
            Some(&[kx, ky, kz]) => Some(Vector3D::new(kx, ky, kz)),
            _ => None,
        }
    }
}

/// Run the command and return the report text
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let species_table = SpeciesOrbitalTable::load(&cli.species)
        .with_context(|| format!("reading species table {}", cli.species.display()))?;
    info!("Species table: {} entries", species_table.len());

    let parser = CoordinateParser::new(cli.load_config()?);
    let model = parser
        .read_structure(&cli.coords, &species_table)
        .with_context(|| format!("reading structure {}", cli.coords.display()))?;

    report(&model, &cli.eta.table(), cli.cutoff, cli.kpoint())
}

/// On-site and pair listing for a loaded model
pub fn report(
    model: &BasisModel,
    eta: &EtaTable,
    cutoff: f64,
    kpoint: Option<Vector3D>,
) -> anyhow::Result<String> {
    let mut out = model.describe();

    writeln!(out, "\nOn-site energies (eV):")?;
    for orbital in model.orbitals() {
        let atom = &model.atoms()[orbital.atom_id()];
        let energy = on_site_energy(atom.species(), orbital.label().as_str())?;
        writeln!(
            out,
            "{:>5} {:>4} {:<2} {:>12.6}",
            orbital.id(),
            atom.species(),
            orbital.label(),
            energy
        )?;
    }

    let pairs = model.neighbor_pairs(cutoff);
    info!("{} atom pairs within {:.3} Angstrom", pairs.len(), cutoff);

    writeln!(out, "\nInteratomic matrix elements (eV):")?;
    for (i, j) in pairs {
        let bond = model.bond(i, j)?;
        let phase = kpoint.map(|k| bloch_phase(&k, bond.displacement()));
        writeln!(out, "atoms {} -> {}, d = {:.6}", i, j, bond.distance())?;

        for oi in model.orbitals_of_atom(i)? {
            for oj in model.orbitals_of_atom(j)? {
                let v = two_center_with(eta, oi.label(), oj.label(), bond.cosines(), bond.distance());
                match phase {
                    Some(p) => {
                        let weighted = p * v;
                        writeln!(
                            out,
                            "  {:>5} {:>5} {:<2} {:<2} {:>12.6} {:>+12.6}i",
                            oi.id(),
                            oj.id(),
                            oi.label(),
                            oj.label(),
                            weighted.re,
                            weighted.im
                        )?
                    }
                    None => writeln!(
                        out,
                        "  {:>5} {:>5} {:<2} {:<2} {:>12.6}",
                        oi.id(),
                        oj.id(),
                        oi.label(),
                        oj.label(),
                        v
                    )?,
                }
            }
        }
    }

    Ok(out)
}
