//! Standard base64 decoding functions.

use crate::constants::{sextet, PAD, PAD_BYTE, SENTINEL};
use crate::Base64Error;

/// Decodes a standard base64 string, never failing.
///
/// Input whose length is not a multiple of four is treated as if it were
/// right-padded with `=`. Characters outside the alphabet map to
/// [`SENTINEL`](crate::SENTINEL) and are folded into the bit arithmetic, so
/// malformed input yields unspecified bytes rather than an error. Use
/// [`decode_strict`] to reject such input.
///
/// Within each group of four characters the first byte is always emitted,
/// the second only when the third character is not `=`, and the third only
/// when the fourth character is not `=`.
///
/// # Example
///
/// ```
/// use base64_codec::decode;
///
/// assert_eq!(decode("TWFu"), b"Man");
/// assert_eq!(decode("TWE="), b"Ma");
/// assert_eq!(decode("TQ"), b"M");
/// ```
pub fn decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len().div_ceil(4) * 3);
    let mut folded = 0usize;

    for group in bytes.chunks(4) {
        let char_at = |i: usize| group.get(i).copied().unwrap_or(PAD_BYTE);
        let chars = [char_at(0), char_at(1), char_at(2), char_at(3)];
        let [v0, v1, v2, v3] = chars.map(sextet);

        folded += chars
            .iter()
            .filter(|&&c| c != PAD_BYTE && sextet(c) == SENTINEL)
            .count();

        out.push(((v0 & 0x3f) << 2) | ((v1 & 0x30) >> 4));
        if chars[2] != PAD_BYTE {
            out.push(((v1 & 0x0f) << 4) | ((v2 & 0x3c) >> 2));
        }
        if chars[3] != PAD_BYTE {
            out.push(((v2 & 0x03) << 6) | (v3 & 0x3f));
        }
    }

    if folded > 0 {
        tracing::debug!(
            folded,
            length = bytes.len(),
            "folded invalid characters into permissive base64 decode"
        );
    }

    out
}

/// Decodes a standard base64 string, rejecting malformed input.
///
/// Missing padding is still tolerated. Every character before the final
/// padding run must belong to the alphabet, the run may hold at most two
/// `=` (counting the implied ones), and a lone character in the last group
/// is rejected. On valid input the result equals [`decode`].
///
/// # Errors
///
/// - [`Base64Error::InvalidCharacter`] for a non-alphabet character or a
///   misplaced `=`.
/// - [`Base64Error::InvalidLength`] when the length leaves one character in
///   the final group.
///
/// # Example
///
/// ```
/// use base64_codec::{decode_strict, Base64Error};
///
/// assert_eq!(decode_strict("TWE").unwrap(), b"Ma");
/// assert_eq!(
///     decode_strict("TW!u"),
///     Err(Base64Error::InvalidCharacter { index: 2, character: '!' })
/// );
/// ```
pub fn decode_strict(input: &str) -> Result<Vec<u8>, Base64Error> {
    let length = input.len();
    let data = input.trim_end_matches(PAD);

    if let Some((index, character)) = data
        .char_indices()
        .find(|&(_, c)| !c.is_ascii() || sextet(c as u8) == SENTINEL)
    {
        tracing::debug!(index, ?character, "rejected base64 input");
        return Err(Base64Error::InvalidCharacter { index, character });
    }

    if length % 4 == 1 {
        tracing::debug!(length, "rejected base64 length");
        return Err(Base64Error::InvalidLength { length });
    }

    let padding = length.div_ceil(4) * 4 - data.len();
    if padding > 2 {
        tracing::debug!(index = data.len(), padding, "rejected base64 padding run");
        return Err(Base64Error::InvalidCharacter {
            index: data.len(),
            character: PAD,
        });
    }

    Ok(decode(input))
}
