//! Password salting and digesting.

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// Number of random salt bytes per account.
pub const PASSWORD_SALT_BYTES: usize = 16;

#[must_use]
pub fn generate_salt() -> String {
    let mut salt = [0_u8; PASSWORD_SALT_BYTES];

    OsRng.fill_bytes(&mut salt);

    hex_encode(&salt)
}

#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();

    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());

    format!("{:x}", hasher.finalize())
}

/// Compare a candidate password against a stored digest without
/// short-circuiting on the first differing byte.
#[must_use]
pub fn verify_password(salt: &str, password: &str, expected_hash: &str) -> bool {
    let computed = hash_password(salt, password);

    if computed.len() != expected_hash.len() {
        return false;
    }

    computed
        .bytes()
        .zip(expected_hash.bytes())
        .fold(0_u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        encoded.push(HEX[(byte >> 4) as usize] as char);
        encoded.push(HEX[(byte & 0x0f) as usize] as char);
    }

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_salts_are_unique_hex() {
        let a = generate_salt();
        let b = generate_salt();

        assert_eq!(a.len(), PASSWORD_SALT_BYTES * 2);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn verify_accepts_the_original_password() {
        let salt = generate_salt();
        let hash = hash_password(&salt, "123456");

        assert!(verify_password(&salt, "123456", &hash));
    }

    #[test]
    fn verify_rejects_a_wrong_password_or_salt() {
        let salt = generate_salt();
        let hash = hash_password(&salt, "123456");

        assert!(!verify_password(&salt, "654321", &hash));
        assert!(!verify_password(&generate_salt(), "123456", &hash));
    }

    #[test]
    fn same_password_different_salts_differ() {
        let a = hash_password(&generate_salt(), "123456");
        let b = hash_password(&generate_salt(), "123456");

        assert_ne!(a, b);
    }
}
