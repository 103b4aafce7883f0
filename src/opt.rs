use clap::Parser;
use std::path::PathBuf;

/// Path of the table file when none is given.
pub const DEFAULT_OUTPUT: &str = "gamma_table.hex";

/// Command line options.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Opt {
    /// Path of the hexadecimal table file.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Check that the existing table file matches the computed table instead of writing it.
    #[arg(long)]
    pub check: bool,
}
