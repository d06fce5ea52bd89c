//! Credential generator
//!
//! Pure helpers producing the three generated profile credentials: the
//! unique code embedded in public links, the 5-digit PIN, and the formatted
//! ID card string. Each call is independent; uniqueness is the backend's
//! responsibility to enforce at creation time.
//!
//! These are not cryptographic tokens. The exact formats are user-visible on
//! the creation success screen and are treated as credentials by the backend,
//! so they must not drift.

use chrono::{Datelike, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{KontactError, Result};

const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const CODE_LEN: usize = 16;

/// Generate a 16-character unique code drawn uniformly from `[a-z0-9]`.
pub fn generate_unique_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate an ID card string of the form `YYYYMMDD-0000-RRRR`.
///
/// The date segment is the current local date. The middle segment is a fixed
/// placeholder, not a per-day sequence number; a real sequence would have to
/// be assigned by the backend.
pub fn generate_id_card() -> String {
    let today = Local::now().date_naive();
    let random: u32 = rand::thread_rng().gen_range(0..10_000);
    format!(
        "{:04}{:02}{:02}-0000-{:04}",
        today.year(),
        today.month(),
        today.day(),
        random
    )
}

/// Generate a 5-digit decimal PIN in `[10000, 99999]`.
pub fn generate_pin() -> String {
    let pin: u32 = rand::thread_rng().gen_range(10_000..100_000);
    pin.to_string()
}

/// Validate an operator-entered PIN before any network call.
///
/// # Errors
///
/// Returns `KontactError::Validation` unless the PIN is exactly five ASCII
/// digits.
pub fn validate_pin(pin: &str) -> Result<()> {
    if pin.len() == 5 && pin.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(KontactError::Validation("PIN must be exactly 5 digits".to_string()))
    }
}

/// The three generated credentials as one bundle ("generate all").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub id: String,
    pub pin: String,
    pub unique_code: String,
}

impl Credentials {
    /// Generate a fresh id card, PIN, and unique code in one step.
    pub fn generate() -> Self {
        Self { id: generate_id_card(), pin: generate_pin(), unique_code: generate_unique_code() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_code_is_sixteen_chars_from_the_alphabet() {
        for _ in 0..200 {
            let code = generate_unique_code();
            assert_eq!(code.len(), 16);
            assert!(code.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn pin_is_always_five_digits_in_range() {
        for _ in 0..200 {
            let pin = generate_pin();
            assert_eq!(pin.len(), 5);
            let value: u32 = pin.parse().unwrap();
            assert!((10_000..=99_999).contains(&value));
        }
    }

    #[test]
    fn id_card_matches_format_and_current_date() {
        for _ in 0..50 {
            let id = generate_id_card();
            let parts: Vec<&str> = id.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0].len(), 8);
            assert!(parts[0].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(parts[1], "0000");
            assert_eq!(parts[2].len(), 4);
            assert!(parts[2].chars().all(|c| c.is_ascii_digit()));

            let today = Local::now().date_naive();
            let expected =
                format!("{:04}{:02}{:02}", today.year(), today.month(), today.day());
            assert_eq!(parts[0], expected);
        }
    }

    #[test]
    fn generate_all_fills_every_credential() {
        let creds = Credentials::generate();
        assert_eq!(creds.unique_code.len(), 16);
        assert_eq!(creds.pin.len(), 5);
        assert!(creds.id.contains("-0000-"));
    }

    #[test]
    fn pin_validation_rejects_malformed_input() {
        assert!(validate_pin("12345").is_ok());
        assert!(validate_pin("1234").is_err());
        assert!(validate_pin("123456").is_err());
        assert!(validate_pin("12a45").is_err());
        assert!(validate_pin("").is_err());
        assert!(matches!(validate_pin("abc").unwrap_err(), KontactError::Validation(_)));
    }
}
