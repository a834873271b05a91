//! Basic encode and decode example

use septapack_core::{packer, PackedText};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Septapack Basic Roundtrip Example\n");

    let messages = [
        "Landing gear check complete",
        "Fuel at 62%. Holding pattern over waypoint 4",
        "Send an email to info@intendia.com",
    ];

    for message in messages {
        let packed = PackedText::from_text(message.as_bytes());

        println!("Text:    {:?}", message);
        println!(
            "Packed:  {} characters -> {} octets (saved {})",
            packed.septets,
            packed.octet_len(),
            packed.septets - packed.octet_len()
        );

        let restored = packed.decode()?;
        println!("Decoded: {:?}\n", String::from_utf8(restored)?);
    }

    // The length formula, without touching any data
    println!("A full 160-character message packs into {} octets", packer::packed_len(160));

    Ok(())
}
