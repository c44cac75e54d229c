//! Standard base64 encoding and decoding.
//!
//! This crate provides:
//! - Encoding with the standard alphabet (`A-Z a-z 0-9 + /`) and `=` padding
//! - A permissive decoder that never fails and tolerates missing padding
//! - A strict decoder that rejects characters outside the alphabet
//! - Padding trimming for the unpadded canonical form
//!
//! # Example
//!
//! ```
//! use base64_codec::{decode, encode, trim_padding};
//!
//! let encoded = encode(b"Ma");
//! assert_eq!(encoded, "TWE=");
//! assert_eq!(decode(&encoded), b"Ma");
//! assert_eq!(trim_padding(&encoded), "TWE");
//! ```

mod codec;
mod constants;
mod decode;
mod encode;
mod trim;

pub use codec::{Codec, CodecConfig, DecodeMode};
pub use constants::{ALPHABET, ALPHABET_BYTES, FROM_BASE64, MAX_CODE, PAD, PAD_BYTE, SENTINEL};
pub use decode::{decode, decode_strict};
pub use encode::{encode, encoded_len};
pub use trim::trim_padding;

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// A character outside the alphabet, or a misplaced padding character.
    #[error("invalid base64 character {character:?} at index {index}")]
    InvalidCharacter { index: usize, character: char },
    /// The input leaves a lone character in its final group.
    #[error("invalid base64 length {length}: a single trailing character cannot encode a byte")]
    InvalidLength { length: usize },
    /// The decode mode name is not recognized.
    #[error("unknown decode mode: {0}")]
    UnknownDecodeMode(String),
}
