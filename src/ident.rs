//! Identifier derivation from arbitrary strings

/// Turn any string (usually a file path) into a bare C identifier.
///
/// Works on bytes: every ASCII alphanumeric byte is kept and every other
/// byte becomes `_`, so a multi-byte UTF-8 character turns into one `_` per
/// byte. Consecutive replacements are not collapsed, so the output has the
/// same byte length as the input.
///
/// An empty input yields an empty string, which is not a valid identifier.
/// Callers check with [`is_valid_identifier`] before emitting anything.
///
/// # Example
/// ```
/// assert_eq!(bin2cpp::make_identifier("assets/logo.png"), "assets_logo_png");
/// ```
pub fn make_identifier(input: &str) -> String {
    input
        .bytes()
        .map(|b| if b.is_ascii_alphanumeric() { b as char } else { '_' })
        .collect()
}

/// Whether `ident` can be emitted as a declaration name
pub fn is_valid_identifier(ident: &str) -> bool {
    !ident.is_empty()
        && ident
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_make_identifier_path() {
        assert_eq!(make_identifier("res/font-8x8.bin"), "res_font_8x8_bin");
    }

    #[test]
    fn test_make_identifier_no_collapse() {
        assert_eq!(make_identifier("a..b"), "a__b");
        assert_eq!(make_identifier("./"), "__");
    }

    #[test]
    fn test_make_identifier_non_ascii() {
        assert_eq!(make_identifier("café.txt"), "caf___txt");
        assert_eq!(make_identifier("café.txt").len(), "café.txt".len());
    }

    #[test]
    fn test_make_identifier_empty() {
        assert_eq!(make_identifier(""), "");
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("stdin"));
        assert!(is_valid_identifier("_data_0"));
        assert!(!is_valid_identifier("a-b"));
    }

    proptest! {
        #[test]
        fn test_make_identifier_shape(s in "\\PC{0,64}") {
            let ident = make_identifier(&s);

            prop_assert_eq!(ident.len(), s.len());
            for (src, out) in s.bytes().zip(ident.bytes()) {
                if src.is_ascii_alphanumeric() {
                    prop_assert_eq!(src, out);
                } else {
                    prop_assert_eq!(out, b'_');
                }
            }
        }
    }
}
