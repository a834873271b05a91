use anyhow::{Context, Result};
use bytes::Bytes;
use septapack_core::{transcoder, PackedText};
use std::fs;
use std::io::{self, Write};
use tracing::info;

use super::{parse_packed, read_input, Format};

pub fn execute(
    input: &str,
    output: Option<&str>,
    format: Format,
    septets: Option<usize>,
) -> Result<()> {
    info!("Decoding packed octets from {}", input);

    let raw = read_input(input)?;
    let octets = parse_packed(&raw, format)?;

    let text = match septets {
        // an advertised septet count trims the fill CR a raw decode keeps
        Some(count) => PackedText::new(Bytes::from(octets), count)
            .decode()
            .with_context(|| "Failed to decode packed input")?,
        None => transcoder::decode(&octets).with_context(|| "Failed to decode packed input")?,
    };

    info!("Decoded {} characters", text.len());

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            info!("Decoded text written to: {}", path);
        }
        None => {
            io::stdout().write_all(&text)?;
            io::stdout().write_all(b"\n")?;
        }
    }

    Ok(())
}
