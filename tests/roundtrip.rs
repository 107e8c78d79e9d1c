//! Roundtrip tests (encode then read the literal back)

use bin2cpp::{EncodingConfig, decode_source, emit_declarations, encode_to_fragments, unescape_fragment};
use proptest::prelude::*;

fn roundtrip(config: &EncodingConfig, original: &[u8]) -> Vec<u8> {
    let mut encoded = Vec::new();
    emit_declarations(config, original, &mut encoded).unwrap();

    let decoded = decode_source(&String::from_utf8(encoded).unwrap()).unwrap();
    assert_eq!(decoded.declared_len, original.len() as u64);
    decoded.data
}

#[test]
fn test_roundtrip_text() {
    let original = b"The quick brown fox jumps over the lazy dog? 100%: yes\r\n";

    assert_eq!(roundtrip(&EncodingConfig::new("text"), original), original);
}

#[test]
fn test_roundtrip_binary_always_escape() {
    let original: Vec<u8> = (0..=255).rev().collect();
    let config = EncodingConfig::new("bin").always_escape().line_length(7);

    assert_eq!(roundtrip(&config, &original), original);
}

#[test]
fn test_roundtrip_random_data() {
    // Pseudo-random data
    let original: Vec<u8> = (0..1000).map(|i| (i * 7 + 13) as u8).collect();

    assert_eq!(roundtrip(&EncodingConfig::new("random").line_length(13), &original), original);
}

fn arb_config() -> impl Strategy<Value = EncodingConfig> {
    (any::<bool>(), any::<bool>(), 1usize..64).prop_map(|(always, mutable, length)| {
        let mut config = EncodingConfig::new("data").line_length(length);
        if always {
            config = config.always_escape();
        }
        if mutable {
            config = config.no_const();
        }
        config
    })
}

proptest! {
    #[test]
    fn test_roundtrip_any_bytes(
        data in prop::collection::vec(any::<u8>(), 0..512),
        config in arb_config(),
    ) {
        prop_assert_eq!(roundtrip(&config, &data), data);
    }

    #[test]
    fn test_fragments_bounded(
        data in prop::collection::vec(any::<u8>(), 0..512),
        config in arb_config(),
    ) {
        let out = encode_to_fragments(&config, &data).unwrap();

        prop_assert_eq!(out.byte_count, data.len() as u64);
        prop_assert_eq!(out.lines.is_empty(), data.is_empty());
        for line in &out.lines {
            prop_assert!(!line.is_empty());
            prop_assert!(line.len() <= config.max_line_length() + 3);
        }

        let joined: Vec<u8> = out
            .lines
            .iter()
            .flat_map(|line| unescape_fragment(line).unwrap())
            .collect();
        prop_assert_eq!(joined, data);
    }

    #[test]
    fn test_single_byte_forms(byte in any::<u8>()) {
        let config = EncodingConfig::new("b");
        let out = encode_to_fragments(&config, &[byte]).unwrap();
        let text = &out.lines[0];

        let passes = (32..=126).contains(&byte) && !b"\"\\?:%".contains(&byte);
        if passes {
            prop_assert_eq!(text.as_bytes(), &[byte][..]);
        } else if b"\r\n\t\"\\".contains(&byte) {
            prop_assert_eq!(text.len(), 2);
            prop_assert!(text.starts_with('\\'));
        } else {
            prop_assert_eq!(text.len(), 4);
            prop_assert_eq!(u32::from_str_radix(&text[1..], 8).unwrap(), u32::from(byte));
        }
    }

    #[test]
    fn test_always_escape_octal(byte in any::<u8>()) {
        let config = EncodingConfig::new("b").always_escape();
        let out = encode_to_fragments(&config, &[byte]).unwrap();

        prop_assert_eq!(out.lines.len(), 1);
        prop_assert_eq!(out.lines[0].len(), 4);
        prop_assert_eq!(u32::from_str_radix(&out.lines[0][1..], 8).unwrap(), u32::from(byte));
    }
}
