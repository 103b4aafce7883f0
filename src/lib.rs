#![doc = include_str!("../README.md")]

pub mod hex;
mod opt;
/// Lookup table of corrected levels.
pub mod table;
pub mod transfer;

pub use crate::{
    hex::ParseError,
    opt::{Opt, DEFAULT_OUTPUT},
    table::GammaTable,
    transfer::gamma_srgb,
};

use log::{debug, info};
use std::{fs, io, path::PathBuf};
use thiserror::Error;

/// Gather different `Error`s in a dedicated enum.
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not write gamma table file {}", path.display())]
    WriteTable { path: PathBuf, source: io::Error },

    #[error("Could not read gamma table file {}", path.display())]
    ReadTable { path: PathBuf, source: io::Error },

    #[error("Could not parse gamma table file {}", path.display())]
    ParseTable { path: PathBuf, source: ParseError },

    #[error("Level {level} is {found:#04X} in the file, expected {expected:#04X}")]
    TableMismatch { level: u8, expected: u8, found: u8 },
}

/// Build the sRGB gamma table, then write it to `opt.output`, or check the file there if `opt.check` is set.
///
/// # Errors
///
/// Will return [`Error::WriteTable`] if the table file can't be created or written.
/// Will return [`Error::ReadTable`] if the file to check can't be read.
/// Will return [`Error::ParseTable`] if the file to check isn't a valid hex table.
/// Will return [`Error::TableMismatch`] if the file to check differs from the computed table.
#[profiling::function]
pub fn run(opt: &Opt) -> Result<(), Error> {
    let table = GammaTable::srgb();
    debug!("Computed {} table entries", table.as_slice().len());

    if opt.check {
        check_table_file(opt, &table)
    } else {
        hex::write_table_file(&opt.output, &table).map_err(|source| Error::WriteTable {
            path: opt.output.clone(),
            source,
        })?;
        info!("sRGB gamma table written to {}", opt.output.display());
        Ok(())
    }
}

fn check_table_file(opt: &Opt, table: &GammaTable) -> Result<(), Error> {
    let text = fs::read_to_string(&opt.output).map_err(|source| Error::ReadTable {
        path: opt.output.clone(),
        source,
    })?;
    let from_file = hex::parse_table(&text).map_err(|source| Error::ParseTable {
        path: opt.output.clone(),
        source,
    })?;

    if let Some((level, expected, found)) = first_difference(table, &from_file) {
        return Err(Error::TableMismatch {
            level,
            expected,
            found,
        });
    }
    info!("{} matches the sRGB gamma table", opt.output.display());
    Ok(())
}

/// First `(level, expected, found)` where the tables differ.
fn first_difference(expected: &GammaTable, found: &GammaTable) -> Option<(u8, u8, u8)> {
    expected
        .iter()
        .zip(found.iter())
        .find(|((_, a), (_, b))| a != b)
        .map(|((level, a), (_, b))| (level, a, b))
}
