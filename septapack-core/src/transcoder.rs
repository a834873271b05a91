//! Character-level encode and decode pipeline
//!
//! Ties the alphabet mapping and the bit packing together: encoding maps
//! each character to its code point and packs the result, decoding unpacks
//! and maps every recovered code point back. Substitution happens in the
//! alphabet stage, so anything the alphabet cannot express comes back as a
//! space rather than failing the pipeline.

use alloc::string::String;
use alloc::vec::Vec;
use bytes::Bytes;

use crate::alphabet;
use crate::error::CodecError;
use crate::packer;
use crate::unpacker;

/// Encode 8-bit characters into a packed septet stream.
///
/// Never fails: characters without a glyph are substituted with space
/// before packing. The result holds `packed_len(text.len())` octets.
pub fn encode(text: &[u8]) -> Bytes {
    let septets: Vec<u8> = text.iter().copied().map(alphabet::to_septet).collect();
    packer::pack(&septets)
}

/// Encode a string slice.
///
/// Convenience wrapper over [`encode`]; multi-byte UTF-8 sequences are
/// treated byte by byte, which for the supported alphabet means anything
/// beyond ASCII degrades to substitutes.
pub fn encode_str(text: &str) -> Bytes {
    encode(text.as_bytes())
}

/// Decode a packed septet stream back into 8-bit characters.
///
/// Recovers exactly `unpacked_len(octets.len())` characters. A buffer
/// packed from a length one short of a full block decodes with one extra
/// trailing CR, the fill written by the packer.
///
/// # Errors
///
/// Propagates [`CodecError::StrayHighBit`] for a lone octet above 0x7F.
pub fn decode(octets: &[u8]) -> Result<Vec<u8>, CodecError> {
    let septets = unpacker::unpack(octets)?;
    Ok(septets.into_iter().map(alphabet::to_char).collect())
}

/// Decode a packed septet stream into an owned string.
///
/// Every code point maps back into the ASCII range, so the string
/// conversion itself cannot fail.
///
/// # Errors
///
/// Propagates [`CodecError::StrayHighBit`] for a lone octet above 0x7F.
pub fn decode_to_string(octets: &[u8]) -> Result<String, CodecError> {
    Ok(decode(octets)?.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_known_bytes() {
        assert_eq!(encode_str("H").as_ref(), &[0x48]);
        assert_eq!(encode_str("HA").as_ref(), &[0xC8, 0x20]);
        assert_eq!(
            encode_str("12345678").as_ref(),
            &[0x31, 0xD9, 0x8C, 0x56, 0xB3, 0xDD, 0x70]
        );
    }

    #[test]
    fn test_decode_matches_known_text() {
        let text = decode_to_string(&[0xC8, 0x32, 0x9B, 0xFD, 0x6E]).unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_roundtrip_with_line_break() {
        let packed = encode_str("Hello\r\nworld");
        assert_eq!(
            packed.as_ref(),
            &[0xC8, 0x32, 0x9B, 0xFD, 0x6E, 0x28, 0xEE, 0x6F, 0x39, 0x9B, 0x0C]
        );
        assert_eq!(decode_to_string(&packed).unwrap(), "Hello\r\nworld");
    }

    #[test]
    fn test_relocated_characters_roundtrip() {
        let packed = encode_str("info@intendia.com");
        let text = decode_to_string(&packed).unwrap();
        assert_eq!(text, "info@intendia.com");

        let packed = encode_str("The price is 10$");
        assert_eq!(decode_to_string(&packed).unwrap(), "The price is 10$");
    }

    #[test]
    fn test_at_signs_pack_to_zero_bytes() {
        assert_eq!(encode_str("@@@").as_ref(), &[0x00, 0x00, 0x00]);
        assert_eq!(decode_to_string(&[0x00, 0x00, 0x00]).unwrap(), "@@@");
    }

    #[test]
    fn test_unsupported_characters_come_back_as_spaces() {
        let packed = encode_str("a{b}c");
        assert_eq!(decode_to_string(&packed).unwrap(), "a b c");

        let packed = encode(&[b'x', 0x01, b'y']);
        assert_eq!(decode(&packed).unwrap(), b"x y");
    }

    #[test]
    fn test_decode_error_propagates() {
        assert_eq!(decode(&[0x93]), Err(CodecError::StrayHighBit(0x93)));
        assert!(decode_to_string(&[0xD1]).is_err());
    }

    #[test]
    fn test_empty_text() {
        assert!(encode_str("").is_empty());
        assert_eq!(decode_to_string(&[]).unwrap(), "");
    }
}
