//! Fuzzing placeholder for the septapack-core codec
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_unpack

pub fn fuzz_unpack(data: &[u8]) {
    use septapack_core::unpacker::unpack;

    // Try to unpack - should never panic
    let _ = unpack(data);
}

pub fn fuzz_decode(data: &[u8]) {
    use septapack_core::transcoder::decode_to_string;

    // Full pipeline - should never panic
    let _ = decode_to_string(data);
}

pub fn fuzz_roundtrip(data: &[u8]) {
    use septapack_core::transcoder::{decode, encode};

    // Encoding arbitrary bytes and decoding back should never panic and
    // the decoded prefix must match the alphabet projection of the input
    let packed = encode(data);
    if let Ok(chars) = decode(&packed) {
        assert!(chars.len() >= data.len());
    }
}
