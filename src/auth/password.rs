use pbkdf2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Params, Pbkdf2,
};
use rand_core::OsRng;

use crate::errors::{AppError, AppResult};

const PBKDF2_ROUNDS: u32 = 100_000;
const PBKDF2_OUTPUT_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Valid,
    /// The stored value was a pre-codec plaintext that matched. The caller
    /// must re-encode and persist the credential (write-on-read migration).
    ValidLegacy,
    Invalid,
}

/// Turns a plaintext password into a PHC-formatted PBKDF2-HMAC-SHA256
/// credential and checks plaintexts against stored credentials.
pub struct PasswordCodec;

impl PasswordCodec {
    pub fn encode(plaintext: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Pbkdf2
            .hash_password_customized(
                plaintext.as_bytes(),
                None,
                None,
                Params {
                    rounds: PBKDF2_ROUNDS,
                    output_length: PBKDF2_OUTPUT_LEN,
                },
                salt.as_salt(),
            )
            .map_err(|e| AppError::InternalError(format!("Failed to encode password: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Never panics and never errors into the caller's control flow: a
    /// stored value that does not parse as a PHC string is treated as a
    /// legacy plaintext row, and anything else that fails is `Invalid`.
    pub fn verify(plaintext: &str, stored: &str) -> Verification {
        match PasswordHash::new(stored) {
            Ok(parsed) => {
                if Pbkdf2.verify_password(plaintext.as_bytes(), &parsed).is_ok() {
                    Verification::Valid
                } else {
                    Verification::Invalid
                }
            }
            // Rows created before this codec hold the raw password.
            // TODO: drop this branch once the users table has no
            // unmigrated rows left.
            Err(_) => {
                if stored == plaintext {
                    Verification::ValidLegacy
                } else {
                    Verification::Invalid
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_then_verify() {
        let stored = PasswordCodec::encode("correct horse battery staple").unwrap();

        assert!(stored.starts_with("$pbkdf2-sha256$"));
        assert_eq!(
            PasswordCodec::verify("correct horse battery staple", &stored),
            Verification::Valid
        );
        assert_eq!(
            PasswordCodec::verify("wrong password", &stored),
            Verification::Invalid
        );
    }

    #[test]
    fn test_encode_uses_fresh_salt() {
        let a = PasswordCodec::encode("same password").unwrap();
        let b = PasswordCodec::encode("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_legacy_plaintext_row_matches() {
        assert_eq!(
            PasswordCodec::verify("hunter2", "hunter2"),
            Verification::ValidLegacy
        );
        assert_eq!(
            PasswordCodec::verify("hunter2", "something else"),
            Verification::Invalid
        );
    }

    #[test]
    fn test_malformed_stored_value_fails_closed() {
        // Parses as neither PHC nor matching plaintext
        assert_eq!(
            PasswordCodec::verify("hunter2", "$pbkdf2-sha256$garbage"),
            Verification::Invalid
        );
        assert_eq!(PasswordCodec::verify("hunter2", ""), Verification::Invalid);
    }
}
