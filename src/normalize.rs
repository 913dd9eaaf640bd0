//! Password canonicalization ahead of hashing.

use secrecy::{ExposeSecret, SecretSlice, SecretString};
use unicode_normalization::UnicodeNormalization;

/// Normalizes `password` as Unicode NFKC and returns its UTF-8 encoding,
/// ready to be passed to a password hash such as bcrypt or Argon2.
///
/// Deterministic and idempotent. Text without compatibility or composition
/// mappings (e.g. printable ASCII) comes back byte-for-byte unchanged.
///
/// A `&str` cannot hold unpaired surrogates; UTF-16 input must be decoded
/// first, and `String::from_utf16_lossy` turns them into U+FFFD, which NFKC
/// leaves as is.
pub fn normalize(password: &str) -> Vec<u8> {
    password.nfkc().collect::<String>().into_bytes()
}

/// Same as [`normalize`], keeping the result wrapped as a secret.
pub fn normalize_secret(password: &SecretString) -> SecretSlice<u8> {
    normalize(password.expose_secret()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_ligature_and_precomposed() {
        assert_eq!(
            normalize("\u{C4}\u{FB03}n"),
            vec![0xC3, 0x84, 0x66, 0x66, 0x69, 0x6E]
        );
    }

    #[test]
    fn test_normalize_composes_combining_sequence() {
        // "A" + combining diaeresis composes to U+00C4
        assert_eq!(normalize("A\u{308}\u{FB03}n"), normalize("\u{C4}\u{FB03}n"));
    }

    #[test]
    fn test_normalize_fullwidth_to_ascii() {
        assert_eq!(normalize("\u{FF50}\u{FF41}\u{FF53}\u{FF53}"), b"pass".to_vec());
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize("").is_empty());
    }

    #[test]
    fn test_normalize_replacement_char_unchanged() {
        let decoded = String::from_utf16_lossy(&[0x0061, 0xD800, 0x0062]);
        assert_eq!(decoded, "a\u{FFFD}b");
        assert_eq!(normalize(&decoded), "a\u{FFFD}b".as_bytes().to_vec());
    }

    #[test]
    fn test_normalize_secret_matches_plain() {
        let pwd = SecretString::new("\u{C4}\u{FB03}n".to_string().into());
        let bytes = normalize_secret(&pwd);
        assert_eq!(bytes.expose_secret(), &[0xC3, 0x84, 0x66, 0x66, 0x69, 0x6E][..]);
    }

    proptest! {
        #[test]
        fn basic_latin_round_trips(s in "[ -~]{10,20}") {
            let bytes = normalize(&s);
            prop_assert_eq!(String::from_utf8(bytes).unwrap(), s);
        }

        #[test]
        fn normalize_is_idempotent(chars in prop::collection::vec(any::<char>(), 0..32)) {
            let s: String = chars.into_iter().collect();
            let once = normalize(&s);
            let again = normalize(std::str::from_utf8(&once).unwrap());
            prop_assert_eq!(again, once);
        }
    }
}
