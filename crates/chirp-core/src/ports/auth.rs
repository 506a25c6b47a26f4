//! Password port used by sign-up and log-in.

/// Turns plain passwords into stored hashes and checks log-in attempts.
pub trait PasswordService: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// `Err(AuthError::InvalidCredentials)` when `password` does not match.
    fn verify(&self, password: &str, stored_hash: &str) -> Result<(), AuthError>;

    /// Do the work of one `verify` against a throwaway hash. Called when the
    /// login name is unknown, so the rejection takes as long as a bad password.
    fn verify_unknown(&self, password: &str);
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("username or password does not match")]
    InvalidCredentials,

    #[error("stored password hash is unreadable: {0}")]
    CorruptHash(String),

    #[error("password hashing failed: {0}")]
    Hashing(String),
}
