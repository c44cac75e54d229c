//! Tests for padding removal (trim_padding).

use base64_codec::{decode, encode, trim_padding};
use rand::Rng;

#[test]
fn trims_encoded_output() {
    assert_eq!(trim_padding(&encode("M")), "TQ");
    assert_eq!(trim_padding(&encode("Ma")), "TWE");
    assert_eq!(trim_padding(&encode("Man")), "TWFu");
}

#[test]
fn trimmed_form_still_decodes() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let length = rng.gen_range(0..=100);
        let blob: Vec<u8> = (0..length).map(|_| rng.gen::<u8>()).collect();
        let encoded = encode(&blob);
        let trimmed = trim_padding(&encoded);
        assert!(!trimmed.ends_with('='));
        assert!(encoded.starts_with(trimmed));
        assert_eq!(decode(trimmed), blob);
    }
}
