//! Constants for the septet alphabet and packing geometry

/// Number of significant bits in one alphabet code point
pub const SEPTET_BITS: u32 = 7;

/// Mask selecting the seven significant bits of a code point
pub const SEPTET_MASK: u8 = 0x7F;

/// Septets per packing block: the eighth septet of every block is fully
/// absorbed into the seven preceding octets and produces no byte of its own
pub const SEPTETS_PER_BLOCK: usize = 8;

/// Octets per packing block (8 septets * 7 bits == 7 octets * 8 bits)
pub const OCTETS_PER_BLOCK: usize = 7;

/// Code point assigned to '@' in the default alphabet
pub const SEPTET_AT: u8 = 0x00;

/// Code point assigned to '$'
pub const SEPTET_DOLLAR: u8 = 0x02;

/// Code point substituted for characters with no glyph in the alphabet
/// (space, which also maps to itself)
pub const SEPTET_SPACE: u8 = 0x20;

/// Fill value for the seven spare bits of the final octet when the septet
/// count is one short of a full block: a carriage return, so the spare
/// region never decodes as a spurious '@'
pub const FILL_CR: u8 = 0x0D;
