/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Main executable for sktb

use clap::Parser;
use sktb_rs::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Cli::parse();

    println!("sktb v{}", sktb_rs::VERSION);
    println!("Slater-Koster tight-binding matrix elements");
    println!("-----------------------------------------------------------");

    let report = cli::run(&args)?;
    println!("{}", report);

    Ok(())
}
