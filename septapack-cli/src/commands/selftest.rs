use anyhow::{bail, Context, Result};
use colored::*;
use septapack_core::{decode_to_string, encode_str};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

/// Known-answer fixtures: (name, packed octets as hex, expected text)
const FIXTURES: &[(&str, &str, &str)] = &[
    ("digits", "31d98c56b3dd70", "12345678"),
    ("single-h", "48", "H"),
    ("space", "20", " "),
    ("at-run", "000000", "@@@"),
    ("nul-byte", "00", "@"),
    ("two-chars", "c820", "HA"),
    ("crlf-text", "c8329bfd6e28ee6f399b0c", "Hello\r\nworld"),
    ("currency", "5474190497a7c765507a0e8ac104", "The price is 10$"),
    (
        "paragraph",
        "54747a0e3a52a72072d99c7697e7203aba0c6287dde77af85c6ecde1e571da9c\
         1e83e4e5783d2d2fb7cb6efa1c647ecb41c76913744fd3d16937888e2e83c8e9\
         739a1e6683c66536bbce0ecbe9657679fc6eb7ebeef4384c4fbfdd73d03c3fa7\
         97db2014141d9e9741b217141d9e9741b255ca05",
        "This GTS defines the language-specific requirements for GSM within \
         the digital cellulartelecommunications system (Phase 2/Phase 2+).",
    ),
    (
        "clause",
        "d3b29b0c0abb41e57638cd06d1dfa0b4dbfc06a4ddf4b29b9c0ebbc6ef36",
        "Send an email to info@intendia.com",
    ),
];

#[derive(Serialize, Deserialize)]
struct FixtureResult {
    name: String,
    decode_ok: bool,
    reencode_ok: bool,
    detail: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct SelftestReport {
    total: usize,
    passed: usize,
    failed: usize,
    results: Vec<FixtureResult>,
}

pub fn execute(output: Option<&str>) -> Result<()> {
    info!("Running {} known-answer fixtures", FIXTURES.len());

    let mut results = Vec::new();

    println!("\n=== Septapack Selftest ===");

    for (name, packed_hex, expected) in FIXTURES {
        let octets =
            hex::decode(packed_hex).with_context(|| format!("Bad fixture hex: {}", name))?;

        // each fixture must decode to its text and the text must pack back
        // to the identical octets
        let (decode_ok, detail) = match decode_to_string(&octets) {
            Ok(text) if text == *expected => (true, None),
            Ok(text) => (
                false,
                Some(format!("decoded {:?}, expected {:?}", text, expected)),
            ),
            Err(e) => (false, Some(format!("decode failed: {}", e))),
        };

        let reencode_ok = encode_str(expected).as_ref() == &octets[..];

        if decode_ok && reencode_ok {
            println!("{} {}", "✓".green(), name);
        } else {
            println!("{} {}", "✗".red(), name);
            if let Some(detail) = &detail {
                println!("    {}", detail);
            }
            if !reencode_ok {
                println!("    re-encode differs from the original octets");
            }
        }

        results.push(FixtureResult {
            name: name.to_string(),
            decode_ok,
            reencode_ok,
            detail,
        });
    }

    let passed = results.iter().filter(|r| r.decode_ok && r.reencode_ok).count();
    let failed = results.len() - passed;

    println!();
    println!("Fixtures passed:    {}", passed.to_string().green());
    if failed > 0 {
        println!("Fixtures failed:    {}", failed.to_string().red());
    } else {
        println!("Fixtures failed:    {}", failed);
    }

    let report = SelftestReport {
        total: results.len(),
        passed,
        failed,
        results,
    };

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize selftest report")?;

        fs::write(path, json).with_context(|| format!("Failed to write report file: {}", path))?;

        info!("Selftest report written to: {}", path);
    }

    if failed > 0 {
        bail!("{} of {} fixtures failed", failed, report.total);
    }

    Ok(())
}
