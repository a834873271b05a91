use anyhow::{Context, Result};
use septapack_core::transcoder;
use std::fs;
use tracing::info;

use super::{read_input, Format};

pub fn execute(input: &str, output: Option<&str>, format: Format) -> Result<()> {
    info!("Encoding text from {}", input);

    let text = read_input(input)?;
    let packed = transcoder::encode(&text);

    info!(
        "Encoded {} characters into {} octets",
        text.len(),
        packed.len()
    );

    match output {
        Some(path) => {
            match format {
                Format::Raw => fs::write(path, &packed)
                    .with_context(|| format!("Failed to write output file: {}", path))?,
                Format::Hex => fs::write(path, hex::encode(&packed))
                    .with_context(|| format!("Failed to write output file: {}", path))?,
            }
            info!("Packed octets written to: {}", path);
        }
        None => {
            // stdout is for humans, keep it printable
            println!("{}", hex::encode(&packed));
        }
    }

    Ok(())
}
