//! Subcommand implementations

pub mod decode;
pub mod encode;
pub mod selftest;

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

/// On-disk representation of a packed buffer
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Raw binary octets
    Raw,
    /// Hex digits, whitespace ignored
    Hex,
}

/// Read a file argument, with '-' standing for stdin
pub(crate) fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}

/// Decode packed bytes from their on-disk representation
pub(crate) fn parse_packed(data: &[u8], format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Raw => Ok(data.to_vec()),
        Format::Hex => {
            let text = std::str::from_utf8(data).with_context(|| "Hex input is not UTF-8")?;
            let compact: String = text.split_whitespace().collect();
            hex::decode(&compact).with_context(|| "Failed to parse hex input")
        }
    }
}
