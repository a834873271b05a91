//! Bidirectional mapping between 8-bit characters and alphabet code points
//!
//! The default alphabet keeps almost all of ASCII at its usual value. The
//! exceptions are '@' and '$', which own the code points 0x00 and 0x02, and
//! a set of characters with no glyph in the alphabet, which are substituted
//! with space on the way in and can therefore not be recovered on the way
//! out. LF and CR keep their ASCII values and survive a round trip.

use crate::constants::{SEPTET_AT, SEPTET_DOLLAR, SEPTET_SPACE};

/// True for values with no glyph in the default alphabet: the control
/// region except LF and CR, the national-use block 0x5B..=0x5F, and
/// 0x7B..=0x7F.
const fn has_no_glyph(value: u8) -> bool {
    matches!(value, 0..=9 | 11 | 12 | 14..=31 | 91..=95 | 123..=127)
}

/// Map one 8-bit character to its 7-bit code point.
///
/// Characters without a glyph are substituted with space rather than
/// rejected, so this mapping is total but lossy. Bytes above 0x7F pass
/// through unchanged; the packer keeps only their low seven bits.
pub const fn to_septet(ch: u8) -> u8 {
    match ch {
        b'$' => SEPTET_DOLLAR,
        b'@' => SEPTET_AT,
        _ if has_no_glyph(ch) => SEPTET_SPACE,
        _ => ch,
    }
}

/// Map one 7-bit code point back to its 8-bit character.
///
/// Inverse of [`to_septet`] for every character that is not substituted
/// with space. Code points that name no character also come back as space,
/// using the same range test as the forward direction.
pub const fn to_char(septet: u8) -> u8 {
    match septet {
        SEPTET_AT => b'@',
        SEPTET_DOLLAR => b'$',
        _ if has_no_glyph(septet) => SEPTET_SPACE,
        _ => septet,
    }
}
