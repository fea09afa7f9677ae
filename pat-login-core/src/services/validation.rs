//! Login form field validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{FieldError, FormErrors, FormValues};

/// Exactly 40 word characters.
#[allow(clippy::unwrap_used)]
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{40}$").unwrap());

/// Dot-separated labels (1-63 chars, no leading or trailing hyphen) ending in a 2-6 letter label.
#[allow(clippy::unwrap_used)]
static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,6}$").unwrap()
});

/// Whether `token` has the shape of a personal access token.
pub fn is_valid_token(token: &str) -> bool {
    TOKEN_RE.is_match(token)
}

/// Whether `hostname` is a domain name the form accepts.
pub fn is_valid_hostname(hostname: &str) -> bool {
    HOSTNAME_RE.is_match(hostname)
}

/// Validate the login form.
///
/// Pure: the result depends only on `values`.
pub fn validate(values: &FormValues) -> FormErrors {
    let token = match values.token.as_deref() {
        None | Some("") => Some(FieldError::Required),
        Some(token) if !is_valid_token(token) => Some(FieldError::InvalidToken),
        Some(_) => None,
    };

    let hostname = match values.hostname.as_deref() {
        None | Some("") => Some(FieldError::Required),
        Some(hostname) if !is_valid_hostname(hostname) => Some(FieldError::InvalidHostname),
        Some(_) => None,
    };

    FormErrors { token, hostname }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn values(token: Option<&str>, hostname: Option<&str>) -> FormValues {
        FormValues {
            token: token.map(str::to_string),
            hostname: hostname.map(str::to_string),
        }
    }

    #[test]
    fn test_token_required() {
        assert_eq!(
            validate(&values(None, Some("github.com"))).token,
            Some(FieldError::Required)
        );
        assert_eq!(
            validate(&values(Some(""), Some("github.com"))).token,
            Some(FieldError::Required)
        );
    }

    #[test]
    fn test_token_exactly_forty_word_chars() {
        let valid = "A".repeat(40);
        assert_eq!(validate(&values(Some(&valid), Some("github.com"))).token, None);

        let mixed = format!("ghp_{}x", "aZ09_".repeat(7));
        assert_eq!(mixed.len(), 40);
        assert!(is_valid_token(&mixed));
    }

    #[test]
    fn test_token_wrong_length() {
        for len in [1, 39, 41, 93] {
            let token = "a".repeat(len);
            assert_eq!(
                validate(&values(Some(&token), Some("github.com"))).token,
                Some(FieldError::InvalidToken),
                "length {len}"
            );
        }
    }

    #[test]
    fn test_token_invalid_characters() {
        let with_dash = format!("{}-", "a".repeat(39));
        let with_space = format!("{} ", "a".repeat(39));
        let with_unicode = format!("{}é", "a".repeat(39));
        // Kelvin sign case-folds to 'k' under Unicode rules
        let with_kelvin = format!("{}\u{212A}", "a".repeat(39));
        for token in [with_dash, with_space, with_unicode, with_kelvin] {
            assert!(!is_valid_token(&token), "{token:?}");
        }
    }

    fn word_alphabet() -> Vec<char> {
        ('A'..='Z')
            .chain('a'..='z')
            .chain('0'..='9')
            .chain(std::iter::once('_'))
            .collect()
    }

    #[test]
    fn test_every_word_char_accepted_at_every_position() {
        let alphabet = word_alphabet();
        assert_eq!(alphabet.len(), 63);
        for (i, ch) in alphabet.iter().enumerate() {
            let uniform: String = std::iter::repeat_n(*ch, 40).collect();
            assert!(is_valid_token(&uniform), "{uniform}");

            let mut placed: Vec<char> = std::iter::repeat_n('x', 40).collect();
            placed[i % 40] = *ch;
            let placed: String = placed.into_iter().collect();
            assert!(is_valid_token(&placed), "{placed}");
        }
    }

    #[test]
    fn test_every_other_ascii_char_rejected() {
        let alphabet = word_alphabet();
        for ch in (0u8..=127).map(char::from).filter(|c| !alphabet.contains(c)) {
            for pos in [0, 20, 39] {
                let mut token: Vec<char> = std::iter::repeat_n('a', 40).collect();
                token[pos] = ch;
                let token: String = token.into_iter().collect();
                assert!(!is_valid_token(&token), "{ch:?} at {pos}");
            }
        }
    }

    #[test]
    fn test_token_length_sweep() {
        for len in 0..=80 {
            let token = "a".repeat(len);
            let expected = match len {
                0 => Some(FieldError::Required),
                40 => None,
                _ => Some(FieldError::InvalidToken),
            };
            assert_eq!(
                validate(&values(Some(&token), Some("github.com"))).token,
                expected,
                "length {len}"
            );
        }
    }

    #[test]
    fn test_whitespace_token_is_invalid_not_required() {
        assert_eq!(
            validate(&values(Some("   "), Some("github.com"))).token,
            Some(FieldError::InvalidToken)
        );
    }

    #[test]
    fn test_hostname_cases() {
        assert_eq!(validate(&values(None, Some("github.company.com"))).hostname, None);
        assert_eq!(validate(&values(None, Some("github.com"))).hostname, None);
        assert_eq!(
            validate(&values(None, Some("not a host"))).hostname,
            Some(FieldError::InvalidHostname)
        );
        assert_eq!(
            validate(&values(None, Some(""))).hostname,
            Some(FieldError::Required)
        );
        assert_eq!(validate(&values(None, None)).hostname, Some(FieldError::Required));
    }

    #[test]
    fn test_hostname_label_rules() {
        assert!(is_valid_hostname("git-hub.example.io"));
        assert!(is_valid_hostname("a.b.cd"));
        assert!(!is_valid_hostname("-github.com"));
        assert!(!is_valid_hostname("github-.com"));
        assert!(!is_valid_hostname("localhost"));
        assert!(!is_valid_hostname("github.c"));
        assert!(!is_valid_hostname("github.company"));
        assert!(!is_valid_hostname("github.com."));
        assert!(!is_valid_hostname("10.0.0.1"));

        let max_label = "a".repeat(63);
        assert!(is_valid_hostname(&format!("{max_label}.com")));
        let long_label = "a".repeat(64);
        assert!(!is_valid_hostname(&format!("{long_label}.com")));
    }

    #[test]
    fn test_validate_is_pure() {
        let input = values(Some("short"), Some("not a host"));
        let first = validate(&input);
        let second = validate(&input);
        assert_eq!(first, second);
        assert_eq!(input, values(Some("short"), Some("not a host")));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let token = "A".repeat(40);
        assert!(validate(&values(Some(&token), Some("github.com"))).is_empty());
    }
}
