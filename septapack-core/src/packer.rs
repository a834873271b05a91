//! Packing of 7-bit code points into octets
//!
//! Eight septets fit exactly into seven octets. The packer walks the input
//! with a rotating bit offset: the septet at index `k` contributes its low
//! `8 - (k % 8)` bits to the bottom of the current output byte, and the
//! following septet fills the remainder. Every eighth septet is consumed
//! entirely by the preceding byte and emits nothing itself, which is where
//! the one-byte-per-block saving comes from.

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::{FILL_CR, SEPTETS_PER_BLOCK, SEPTET_MASK};

#[cfg(feature = "logging")]
use tracing::debug;

/// Number of octets produced by packing `septets` code points.
///
/// One byte is saved per complete block of eight septets.
pub const fn packed_len(septets: usize) -> usize {
    septets - septets / SEPTETS_PER_BLOCK
}

/// Pack a sequence of 7-bit code points into the minimum number of octets.
///
/// Each input byte is masked to its low seven bits first, so values above
/// 0x7F lose their high bit here rather than corrupting a neighbour. When
/// the input length is one short of a full block the final octet has seven
/// spare bits; they are filled with a carriage return so that the spare
/// region never decodes as a spurious '@'. In every other ragged case the
/// spare bits are zero.
pub fn pack(septets: &[u8]) -> Bytes {
    let mut packed = BytesMut::with_capacity(packed_len(septets.len()));

    for (k, &septet) in septets.iter().enumerate() {
        let offset = k % SEPTETS_PER_BLOCK;
        if offset == 7 {
            // consumed entirely by the previous output byte
            continue;
        }

        let next = match septets.get(k + 1) {
            Some(&n) => n & SEPTET_MASK,
            // only seven spare bits remain: pad with CR instead of '@'
            None if offset == 6 => FILL_CR,
            None => 0,
        };

        packed.put_u8(((septet & SEPTET_MASK) >> offset) | (next << (7 - offset)));
    }

    #[cfg(feature = "logging")]
    debug!("Packed {} septets into {} octets", septets.len(), packed.len());

    packed.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_packs_to_nothing() {
        assert_eq!(pack(&[]), Bytes::new());
        assert_eq!(packed_len(0), 0);
    }

    #[test]
    fn test_single_septet_is_verbatim() {
        assert_eq!(pack(&[0x48]).as_ref(), &[0x48]);
    }

    #[test]
    fn test_two_septets_share_a_bit() {
        // 'H' = 0x48, 'A' = 0x41: second septet's low bit tops up byte 0
        assert_eq!(pack(&[0x48, 0x41]).as_ref(), &[0xC8, 0x20]);
    }

    #[test]
    fn test_full_block_drops_one_byte() {
        let septets = *b"12345678";
        let packed = pack(&septets);
        assert_eq!(packed.as_ref(), &[0x31, 0xD9, 0x8C, 0x56, 0xB3, 0xDD, 0x70]);
    }

    #[test]
    fn test_seven_septets_pad_with_cr() {
        let packed = pack(b"1234567");
        assert_eq!(packed.as_ref(), &[0x31, 0xD9, 0x8C, 0x56, 0xB3, 0xDD, 0x1A]);
        // top seven bits of the last octet carry 0x0D, not zero
        assert_eq!(packed[6] >> 1, FILL_CR);
    }

    #[test]
    fn test_high_bits_are_masked() {
        assert_eq!(pack(&[0xC8]).as_ref(), &[0x48]);
        assert_eq!(pack(&[0xFF, 0xFF]).as_ref(), pack(&[0x7F, 0x7F]).as_ref());
    }

    #[test]
    fn test_packed_len_per_block() {
        assert_eq!(packed_len(7), 7);
        assert_eq!(packed_len(8), 7);
        assert_eq!(packed_len(9), 8);
        assert_eq!(packed_len(16), 14);
        assert_eq!(packed_len(160), 140);
    }

    #[test]
    fn test_output_length_matches_formula() {
        for n in 0..128usize {
            let septets: Vec<u8> = (0..n).map(|i| (i % 0x7F) as u8).collect();
            assert_eq!(pack(&septets).len(), packed_len(n), "len {n}");
        }
    }
}
