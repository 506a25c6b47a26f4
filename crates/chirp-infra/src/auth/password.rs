//! Argon2id password hashes stored as PHC strings.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use std::sync::OnceLock;

use chirp_core::ports::{AuthError, PasswordService};

pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
    /// Hash checked by `verify_unknown`; built on first use with the same params.
    decoy: OnceLock<Option<String>>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
            decoy: OnceLock::new(),
        }
    }

    fn decoy_hash(&self) -> Option<&str> {
        self.decoy
            .get_or_init(|| match self.hash("chirp-unknown-user") {
                Ok(hash) => Some(hash),
                Err(e) => {
                    tracing::error!("Could not build decoy password hash: {e}");
                    None
                }
            })
            .as_deref()
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, stored_hash: &str) -> Result<(), AuthError> {
        let stored = PasswordHash::new(stored_hash).map_err(|e| AuthError::CorruptHash(e.to_string()))?;

        // Parameters come from the stored hash, so older hashes keep verifying
        match self.argon2.verify_password(password.as_bytes(), &stored) {
            Ok(()) => Ok(()),
            Err(password_hash::Error::Password) => Err(AuthError::InvalidCredentials),
            Err(e) => Err(AuthError::Hashing(e.to_string())),
        }
    }

    fn verify_unknown(&self, password: &str) {
        if let Some(decoy) = self.decoy_hash() {
            // The outcome is irrelevant; only the time spent matters
            let _ = self.verify(password, decoy);
        }
    }
}
