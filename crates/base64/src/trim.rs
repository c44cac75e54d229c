use crate::constants::PAD;

/// Strips every trailing `=` from an encoded string.
///
/// Does not decode; the result borrows a prefix of `input`.
///
/// ```
/// use base64_codec::trim_padding;
///
/// assert_eq!(trim_padding("TQ=="), "TQ");
/// assert_eq!(trim_padding("TWFu"), "TWFu");
/// ```
pub fn trim_padding(input: &str) -> &str {
    input.trim_end_matches(PAD)
}
