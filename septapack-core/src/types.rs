//! Core types for packed septet streams

use alloc::vec::Vec;
use bytes::Bytes;

use crate::error::CodecError;
use crate::packer;
use crate::transcoder;

/// A packed buffer paired with the number of septets it carries.
///
/// The octet count alone cannot always recover the character count: a
/// length one short of a full block decodes with one extra fill character,
/// and a trailing 0x00 octet is real data ('@') rather than padding. Keeping
/// the septet count beside the buffer makes decoding exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedText {
    /// The packed octets
    pub octets: Bytes,

    /// Number of meaningful septets encoded in `octets`
    pub septets: usize,
}

impl PackedText {
    /// Wrap an already packed buffer with its explicit septet count
    pub fn new(octets: Bytes, septets: usize) -> Self {
        Self { octets, septets }
    }

    /// Encode text, remembering how many characters went in
    pub fn from_text(text: &[u8]) -> Self {
        Self {
            septets: text.len(),
            octets: transcoder::encode(text),
        }
    }

    /// Decode back to characters, trimmed to the stored septet count.
    ///
    /// This is the counterpart of [`from_text`](Self::from_text) that does
    /// not grow by a fill CR when the count sits one short of a block.
    ///
    /// # Errors
    ///
    /// Propagates [`CodecError::StrayHighBit`] from the unpacker.
    pub fn decode(&self) -> Result<Vec<u8>, CodecError> {
        let mut chars = transcoder::decode(&self.octets)?;
        chars.truncate(self.septets);
        Ok(chars)
    }

    /// Number of packed octets
    pub fn octet_len(&self) -> usize {
        self.octets.len()
    }

    /// True when no septets are encoded
    pub fn is_empty(&self) -> bool {
        self.septets == 0
    }

    /// Number of octets the stored septet count should occupy
    pub fn expected_octets(&self) -> usize {
        packer::packed_len(self.septets)
    }
}
