use derive_getters::Getters;
use rand::Rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const SALT_LENGTH: usize = 16;

/// A salted SHA-256 digest of a member's password, hex-encoded.
/// The plaintext is dropped as soon as the digest is computed.
#[derive(Getters, PartialEq, Eq, Clone)]
pub struct HashedPassword {
    salt: String,
    hash: String,
}

impl HashedPassword {
    pub fn new(password: &str) -> Self {
        let salt_bytes: [u8; SALT_LENGTH] = rand::rng().random();
        let salt = hex::encode(salt_bytes);
        let hash = digest(&salt, password);
        Self { salt, hash }
    }

    /// Rebuild a hashed password from its persisted parts.
    pub(crate) fn from_parts(salt: String, hash: String) -> Self {
        Self { salt, hash }
    }

    /// Check a candidate password against the stored digest.
    /// The comparison runs in constant time.
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate_hash = digest(&self.salt, candidate);
        self.hash
            .as_bytes()
            .ct_eq(candidate_hash.as_bytes())
            .into()
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HashedPassword {{MASKED}}")
    }
}

#[cfg(test)]
mod tests {
    use crate::member::password::HashedPassword;

    #[test]
    fn should_verify_original_password() {
        let hashed = HashedPassword::new("s3cr3t");
        assert!(hashed.verify("s3cr3t"));
    }

    #[test]
    fn should_reject_other_password() {
        let hashed = HashedPassword::new("s3cr3t");
        assert!(!hashed.verify("not the one"));
    }

    #[test]
    fn should_salt_equal_passwords_differently() {
        let first = HashedPassword::new("s3cr3t");
        let second = HashedPassword::new("s3cr3t");
        assert_ne!(first.salt(), second.salt());
        assert_ne!(first.hash(), second.hash());
    }

    #[test]
    fn should_verify_after_rebuild_from_parts() {
        let hashed = HashedPassword::new("s3cr3t");
        let rebuilt =
            HashedPassword::from_parts(hashed.salt().clone(), hashed.hash().clone());
        assert!(rebuilt.verify("s3cr3t"));
        assert_eq!(hashed, rebuilt);
    }

    #[test]
    fn should_mask_debug_output() {
        let hashed = HashedPassword::new("s3cr3t");
        let debug = format!("{hashed:?}");
        assert!(!debug.contains(hashed.hash()));
        assert!(!debug.contains("s3cr3t"));
    }
}
