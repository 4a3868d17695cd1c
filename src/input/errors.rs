/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for coordinate-file input

use crate::atoms::AtomError;
use std::io;
use thiserror::Error;

/// Errors that can occur while reading a coordinate file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Invalid structure: {0}")]
    InvalidStructure(#[from] AtomError),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
