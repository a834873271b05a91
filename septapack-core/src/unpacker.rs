//! Recovery of 7-bit code points from packed octets
//!
//! The unpacker mirrors the packer's rotating bit offset. Each input octet
//! is viewed through a 16-bit window that also holds the following octet,
//! so a septet straddling a byte boundary can be read in one shift. At the
//! start of every block the window yields two septets from one octet: the
//! seven low bits left behind by the previous block's absorbed septet, and
//! the usual straddling read.

use alloc::vec::Vec;

use crate::constants::{OCTETS_PER_BLOCK, SEPTET_MASK};
use crate::error::CodecError;

#[cfg(feature = "logging")]
use tracing::debug;

/// Number of code points recovered from `octets` packed bytes.
///
/// Eight septets come out of every full run of seven octets; a ragged tail
/// of `r` octets holds `r` more (its leftover bits cannot complete an
/// eighth).
pub const fn unpacked_len(octets: usize) -> usize {
    octets * 8 / OCTETS_PER_BLOCK
}

/// Unpack a packed buffer into its 7-bit code points.
///
/// The output always contains exactly [`unpacked_len`] septets. Bits of
/// the final octet beyond that count are ignored, so a buffer whose length
/// is not a multiple of seven decodes the same regardless of what its
/// spare top bits hold.
///
/// # Errors
///
/// A buffer of exactly one octet with the high bit set is rejected with
/// [`CodecError::StrayHighBit`]: a single octet holds one septet and one
/// spare bit, and with no continuation byte that bit can never be part of
/// a packed stream. Every other input, including the empty buffer, is
/// accepted.
pub fn unpack(octets: &[u8]) -> Result<Vec<u8>, CodecError> {
    if octets.len() == 1 && octets[0] > SEPTET_MASK {
        return Err(CodecError::StrayHighBit(octets[0]));
    }

    let total = unpacked_len(octets.len());
    let mut septets = Vec::with_capacity(total);
    // rotating bit offset into the current octet, wraps after 6
    let mut offset = 0;

    for (i, &octet) in octets.iter().enumerate() {
        let next = octets.get(i + 1).copied().unwrap_or(0);
        let window = u16::from(octet) | (u16::from(next) << 8);

        if offset == 0 {
            // block start: the low seven bits form a whole septet on
            // their own before the straddling read below
            septets.push(octet & SEPTET_MASK);
            if septets.len() == total {
                break;
            }
        }

        septets.push(((window >> (7 - offset)) as u8) & SEPTET_MASK);
        if septets.len() == total {
            break;
        }

        offset = (offset + 1) % OCTETS_PER_BLOCK;
    }

    #[cfg(feature = "logging")]
    debug!(
        "Unpacked {} octets into {} septets",
        octets.len(),
        septets.len()
    );

    Ok(septets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packer::{pack, packed_len};

    #[test]
    fn test_empty_buffer_yields_nothing() {
        assert_eq!(unpack(&[]).unwrap(), Vec::<u8>::new());
        assert_eq!(unpacked_len(0), 0);
    }

    #[test]
    fn test_single_octet_is_verbatim() {
        assert_eq!(unpack(&[0x48]).unwrap(), vec![0x48]);
        assert_eq!(unpack(&[0x00]).unwrap(), vec![0x00]);
        assert_eq!(unpack(&[0x7F]).unwrap(), vec![0x7F]);
    }

    #[test]
    fn test_lone_octet_with_high_bit_is_rejected() {
        assert_eq!(unpack(&[0x80]), Err(CodecError::StrayHighBit(0x80)));
        assert_eq!(unpack(&[0xFF]), Err(CodecError::StrayHighBit(0xFF)));
    }

    #[test]
    fn test_high_bits_are_valid_in_longer_buffers() {
        // the same 0xFF that a lone buffer rejects is fine with company
        assert_eq!(unpack(&[0xFF, 0xFF]).unwrap(), vec![0x7F, 0x7F]);
        assert_eq!(unpack(&[0x80, 0x00]).unwrap(), vec![0x00, 0x01]);
    }

    #[test]
    fn test_full_block_yields_eight_septets() {
        let septets = unpack(&[0x31, 0xD9, 0x8C, 0x56, 0xB3, 0xDD, 0x70]).unwrap();
        assert_eq!(septets, b"12345678");
    }

    #[test]
    fn test_cr_fill_decodes_as_one_extra_septet() {
        let septets = unpack(&[0x31, 0xD9, 0x8C, 0x56, 0xB3, 0xDD, 0x1A]).unwrap();
        assert_eq!(septets, b"1234567\r");
    }

    #[test]
    fn test_unpacked_len_per_block() {
        assert_eq!(unpacked_len(1), 1);
        assert_eq!(unpacked_len(6), 6);
        assert_eq!(unpacked_len(7), 8);
        assert_eq!(unpacked_len(14), 16);
        assert_eq!(unpacked_len(140), 160);
    }

    #[test]
    fn test_output_length_matches_formula() {
        for m in 0..128usize {
            // values below 0x80 keep the lone-buffer case valid
            let octets: Vec<u8> = (0..m).map(|i| (i * 37 % 0x75) as u8).collect();
            assert_eq!(unpack(&octets).unwrap().len(), unpacked_len(m), "len {m}");
        }
    }

    #[test]
    fn test_pack_then_unpack_preserves_all_septets() {
        for n in 0..64usize {
            let septets: Vec<u8> = (0..n).map(|i| ((i * 11) % 0x80) as u8).collect();
            let recovered = unpack(&pack(&septets)).unwrap();
            // when n is one short of a block an extra CR decodes after it
            assert_eq!(&recovered[..n], &septets[..], "len {n}");
            assert_eq!(recovered.len(), unpacked_len(packed_len(n)), "len {n}");
        }
    }
}
