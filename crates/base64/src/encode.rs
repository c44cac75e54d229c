//! Standard base64 encoding function.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Returns the length of the padded encoding of `length` input bytes.
///
/// ```
/// use base64_codec::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub const fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Encodes bytes to a standard base64 string.
///
/// Every group of three bytes becomes four characters. A short final group
/// is zero-extended before slicing, and one `=` replaces the character of
/// each missing byte. Empty input gives an empty string.
///
/// # Example
///
/// ```
/// use base64_codec::encode;
///
/// assert_eq!(encode("Man"), "TWFu");
/// assert_eq!(encode(b"Ma"), "TWE=");
/// assert_eq!(encode(vec![b'M']), "TQ==");
/// ```
pub fn encode(input: impl AsRef<[u8]>) -> String {
    let bytes = input.as_ref();
    if bytes.is_empty() {
        return String::new();
    }

    let missing = (3 - bytes.len() % 3) % 3;
    let mut out = String::with_capacity(encoded_len(bytes.len()));

    for group in bytes.chunks(3) {
        let b0 = group[0];
        let b1 = group.get(1).copied().unwrap_or(0);
        let b2 = group.get(2).copied().unwrap_or(0);

        let s0 = b0 >> 2;
        let s1 = ((b0 & 0x03) << 4) | ((b1 & 0xf0) >> 4);
        let s2 = ((b1 & 0x0f) << 2) | ((b2 & 0xc0) >> 6);
        let s3 = b2 & 0x3f;

        out.push(ALPHABET_BYTES[s0 as usize] as char);
        out.push(ALPHABET_BYTES[s1 as usize] as char);
        out.push(ALPHABET_BYTES[s2 as usize] as char);
        out.push(ALPHABET_BYTES[s3 as usize] as char);
    }

    // Characters standing for zero filler are replaced by padding.
    out.truncate(out.len() - missing);
    for _ in 0..missing {
        out.push(PAD);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode(b"Man"), "TWFu");
        assert_eq!(encode(b"Ma"), "TWE=");
        assert_eq!(encode(b"M"), "TQ==");
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg==");
        assert_eq!(encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_accepts_strings() {
        assert_eq!(encode("hello world"), "aGVsbG8gd29ybGQ=");
        assert_eq!(encode(String::from("hello world")), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_high_bits() {
        assert_eq!(encode([0xff, 0xff, 0xff]), "////");
        assert_eq!(encode([0xfb, 0xff]), "+/8=");
        assert_eq!(encode([0x00]), "AA==");
    }

    #[test]
    fn test_output_length() {
        for n in 1..50 {
            let data = vec![0xa5u8; n];
            assert_eq!(encode(&data).len(), 4 * n.div_ceil(3));
        }
    }
}
