//! One-off password generation for the user-creation form.
//!
//! Not a vault-grade generator: passwords produced here are provisional
//! credentials the administrator hands over for the user to replace, so the
//! source is the platform's plain `Math.random`.

/// Characters a generated password draws from. Look-alikes (`l`, `I`, `O`,
/// `0`, `1`) are excluded so the password survives being read out loud.
pub const ALPHABET: &[u8] = b"abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789!@#$%";

/// Generated password length.
pub const LENGTH: usize = 8;

/// Build a password by sampling `ALPHABET` with replacement.
///
/// `random` must yield values in `[0.0, 1.0)`; each draw selects one
/// character independently.
pub fn generate_with<F>(mut random: F) -> String
where
    F: FnMut() -> f64,
{
    (0..LENGTH)
        .map(|_| {
            let idx = (random() * ALPHABET.len() as f64).floor() as usize;
            ALPHABET[idx] as char
        })
        .collect()
}

/// Build a password from the browser's `Math.random`.
pub fn generate() -> String {
    generate_with(js_sys::Math::random)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn alphabet_excludes_lookalikes() {
        for c in [b'l', b'I', b'O', b'0', b'1'] {
            assert!(!ALPHABET.contains(&c), "alphabet must not contain {:?}", c as char);
        }
        assert_eq!(ALPHABET.len(), 62);
    }

    #[test]
    fn samples_eight_chars_from_alphabet() {
        let mut state = 0x2545f491u32;
        let password = generate_with(move || {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            f64::from(state >> 8) / f64::from(1u32 << 24)
        });
        assert_eq!(password.len(), LENGTH);
        assert!(password.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn floor_of_zero_source_is_first_character() {
        assert_eq!(generate_with(|| 0.0), "aaaaaaaa");
    }

    #[test]
    fn source_just_under_one_is_last_character() {
        assert_eq!(generate_with(|| 1.0 - f64::EPSILON), "%%%%%%%%");
    }

    #[test]
    fn distinct_sources_give_distinct_passwords() {
        let a = generate_with(|| 0.1);
        let b = generate_with(|| 0.9);
        assert_ne!(a, b);
    }
}
