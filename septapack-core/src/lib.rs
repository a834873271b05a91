//! # Septapack Core
//!
//! A reversible transcoder between 8-bit text and the packed 7-bit default
//! alphabet used by GSM-style short-message payloads.
//!
//! ## Modules
//!
//! - `constants`: Alphabet code points and packing geometry
//! - `alphabet`: Character to code point mapping and back
//! - `packer`: Bit packing of septets into octets (8 into 7)
//! - `unpacker`: Recovery of septets from packed octets
//! - `transcoder`: Character-level encode and decode pipeline
//! - `types`: Packed buffer with an explicit septet count (PackedText)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod alphabet;
pub mod constants;
pub mod error;
pub mod packer;
pub mod transcoder;
pub mod types;
pub mod unpacker;

// Re-export commonly used items
pub use error::CodecError;
pub use transcoder::{decode, decode_to_string, encode, encode_str};
pub use types::PackedText;

/// Result type alias for Septapack operations
pub type Result<T> = core::result::Result<T, CodecError>;
