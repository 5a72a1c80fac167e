//! Password hashing - Domain layer password handling.
//!
//! bcrypt with a per-call random salt embedded in the output. Plaintext is
//! trimmed before both hashing and verification, so the two sides always
//! agree on what was typed.

use crate::errors::{AppError, AppResult};

/// Stored password hash value object.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }
}

/// Normalize client-supplied plaintext.
pub fn normalize(plain_text: &str) -> &str {
    plain_text.trim()
}

/// bcrypt hasher with a configurable work factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash the trimmed plaintext with a fresh salt.
    pub fn hash(&self, plain_text: &str) -> AppResult<Password> {
        bcrypt::hash(normalize(plain_text), self.cost)
            .map(Password::from_hash)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))
    }

    /// Check the trimmed plaintext against a stored hash.
    ///
    /// A mismatch is `false`, and so is a stored hash that cannot be parsed.
    pub fn verify(&self, plain_text: &str, stored: &Password) -> bool {
        match bcrypt::verify(normalize(plain_text), stored.as_str()) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!("Stored password hash could not be verified: {}", e);
                false
            }
        }
    }

    /// [`hash`](Self::hash) on the blocking pool.
    pub async fn hash_async(&self, plain_text: String) -> AppResult<Password> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
    }

    /// [`verify`](Self::verify) on the blocking pool.
    pub async fn verify_async(&self, plain_text: String, stored: Password) -> AppResult<bool> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&plain_text, &stored))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = hasher().hash(plain).unwrap();

        assert!(hasher().verify(plain, &password));
        assert!(!hasher().verify("WrongPassword123", &password));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let password = hasher().hash(" secret1 ").unwrap();

        assert!(hasher().verify("secret1", &password));
        assert!(hasher().verify("\tsecret1\n", &password));
        assert!(!hasher().verify("secret 1", &password));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = hasher().hash(plain).unwrap();
        let pass2 = hasher().hash(plain).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(hasher().verify(plain, &pass1));
        assert!(hasher().verify(plain, &pass2));
    }

    #[test]
    fn test_hash_embeds_cost() {
        let password = PasswordHasher::new(5).hash("abc").unwrap();
        assert!(password.as_str().starts_with("$2b$05$"));
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        let stored = Password::from_hash("not-a-bcrypt-hash".to_string());
        assert!(!hasher().verify("anything", &stored));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let hash = hasher().hash(plain).unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(hasher().verify(plain, &restored));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = hasher().hash("hunter2").unwrap();
        assert!(!format!("{:?}", password).contains("$2b$"));
    }

    #[tokio::test]
    async fn test_async_round_trip() {
        let password = hasher().hash_async("  padded  ".to_string()).await.unwrap();
        assert!(hasher()
            .verify_async("padded".to_string(), password)
            .await
            .unwrap());
    }
}
