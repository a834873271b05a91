//! Error types for septapack operations

/// Errors that can occur while decoding a packed buffer
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// A lone packed octet cannot use its high bit: with no continuation
    /// byte to borrow from, the value encodes no septet sequence
    #[cfg_attr(
        feature = "std",
        error("Invalid packed data: lone octet {0:#04x} has its high bit set")
    )]
    StrayHighBit(u8),
}
