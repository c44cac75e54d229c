/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array, indexed by 6-bit value.
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Padding character as a byte.
pub const PAD_BYTE: u8 = b'=';

/// Reverse-table marker for codes that are not alphabet characters.
pub const SENTINEL: u8 = 255;

/// Highest character code the reverse table can map to a value.
pub const MAX_CODE: u8 = b'z';

/// Reverse lookup table: character code to 6-bit value, or [`SENTINEL`].
pub static FROM_BASE64: [u8; 256] = {
    let mut table = [SENTINEL; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Maps a character code to its 6-bit value without indexing past [`MAX_CODE`].
#[inline]
pub(crate) fn sextet(code: u8) -> u8 {
    if code <= MAX_CODE {
        FROM_BASE64[code as usize]
    } else {
        SENTINEL
    }
}
