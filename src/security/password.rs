use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;

use crate::config::auth::AuthConfig;

/// Argon2id password hasher.
///
/// Every call to [`hash`](Self::hash) generates a fresh salt through a
/// cryptographically secure RNG, so hashing the same plaintext twice yields
/// two different PHC strings. Cost parameters come from [`AuthConfig`].
///
/// # Example
/// ```no_run
/// use credo_auth::config::auth::AuthConfig;
/// use credo_auth::security::PasswordHasher;
///
/// let config = AuthConfig::default();
/// let hasher = PasswordHasher::from_config(&config).unwrap();
///
/// let hash = hasher.hash("my_secure_password").unwrap();
/// assert!(hasher.verify("my_secure_password", &hash).unwrap());
/// ```
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher from the configured Argon2 parameters.
    ///
    /// # Errors
    /// Returns an error if the parameters are invalid (e.g. memory cost too
    /// high for the platform).
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &AuthConfig) -> Result<Self, argon2::password_hash::Error> {
        let params = Params::new(
            config.argon2.memory_cost,
            config.argon2.time_cost,
            config.argon2.parallelism,
            Some(config.argon2.hash_length as usize),
        )?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        Ok(Self { argon2 })
    }

    /// Hash a password with a unique salt.
    ///
    /// The output is a PHC string
    /// (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`) carrying its own
    /// salt and parameters, safe to store as-is.
    #[tracing::instrument(skip(self, password))]
    pub fn hash(&self, password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2.hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    /// Verify a password against a stored PHC string.
    ///
    /// Salt and parameters are taken from the hash itself; comparison happens
    /// inside the argon2 primitive, never as raw hash equality.
    #[tracing::instrument(skip(self, password, hash))]
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
