use std::fmt;
use std::sync::Arc;

use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use chrono::Duration;
use tracing::{debug, info, instrument, warn};

use super::domain::{NewUser, SignInInput, SignUpInput};
use super::errors::AuthError;
use super::repository::CredentialStore;
use super::token::{TokenCodec, MAX_TTL_HOURS};
use crate::errors::ServiceError;

// argon2 rejects shorter salts at hash time
const MIN_SALT_BYTES: usize = 8;

/// Credential service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub signing_key: String,
    /// Single salt shared by every password hash. Keeping it fixed is what
    /// makes the hash usable as a lookup key; it is also the known weakness
    /// of this scheme.
    pub password_salt: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(signing_key: impl Into<String>, password_salt: impl Into<String>) -> Self {
        Self { signing_key: signing_key.into(), password_salt: password_salt.into(), token_ttl: Duration::hours(12) }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("signing_key", &"<redacted>")
            .field("password_salt", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

/// Sign-up, sign-in and token validation, independent of web framework.
pub struct CredentialService {
    repo: Arc<dyn CredentialStore>,
    salt: SaltString,
    tokens: TokenCodec,
}

impl CredentialService {
    /// Fails with `Validation` when the salt is outside argon2's accepted length.
    pub fn new(repo: Arc<dyn CredentialStore>, cfg: AuthConfig) -> Result<Self, ServiceError> {
        if cfg.password_salt.len() < MIN_SALT_BYTES {
            return Err(ServiceError::Validation(format!("password salt must be at least {} bytes", MIN_SALT_BYTES)));
        }
        let salt = SaltString::encode_b64(cfg.password_salt.as_bytes())
            .map_err(|e| ServiceError::Validation(format!("password salt: {e}")))?;
        if cfg.token_ttl <= Duration::zero() {
            return Err(ServiceError::Validation("token ttl must be positive".into()));
        }
        if cfg.token_ttl > Duration::hours(MAX_TTL_HOURS) {
            return Err(ServiceError::Validation(format!("token ttl must not exceed {MAX_TTL_HOURS} hours")));
        }
        Ok(Self { repo, salt, tokens: TokenCodec::new(&cfg.signing_key, cfg.token_ttl) })
    }

    /// Register a new user and return its id.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthConfig, CredentialService, domain::SignUpInput};
    /// use service::storage::memory::MemoryStore;
    /// use std::sync::Arc;
    /// let svc = CredentialService::new(Arc::new(MemoryStore::default()), AuthConfig::new("secret", "pepper-salt")).unwrap();
    /// let input = SignUpInput { name: "Ann".into(), username: "ann".into(), password: "pw".into() };
    /// let id = tokio_test::block_on(svc.create_user(input)).unwrap();
    /// assert_eq!(id, 1);
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_user(&self, input: SignUpInput) -> Result<i32, ServiceError> {
        models::user::validate_name(&input.name)?;
        models::user::validate_username(&input.username)?;
        models::user::validate_password(&input.password)?;

        let password_hash = self.hash_password(&input.password)?;
        let id = self
            .repo
            .create_user(NewUser { name: input.name, username: input.username, password_hash })
            .await?;
        info!(user_id = id, "user_registered");
        Ok(id)
    }

    /// Authenticate by username and password and issue a bearer token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthConfig, CredentialService, domain::{SignInInput, SignUpInput}};
    /// use service::storage::memory::MemoryStore;
    /// use std::sync::Arc;
    /// let svc = CredentialService::new(Arc::new(MemoryStore::default()), AuthConfig::new("secret", "pepper-salt")).unwrap();
    /// let id = tokio_test::block_on(svc.create_user(SignUpInput { name: "Ann".into(), username: "ann".into(), password: "pw".into() })).unwrap();
    /// let token = tokio_test::block_on(svc.generate_token(SignInInput { username: "ann".into(), password: "pw".into() })).unwrap();
    /// assert_eq!(svc.parse_token(&token).unwrap(), id);
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn generate_token(&self, input: SignInInput) -> Result<String, ServiceError> {
        models::user::validate_username(&input.username)?;
        models::user::validate_password(&input.password)?;

        let password_hash = self.hash_password(&input.password)?;
        let user = match self.repo.get_user(&input.username, &password_hash).await? {
            Some(user) => user,
            None => {
                warn!("sign-in rejected");
                return Err(AuthError::InvalidCredentials.into());
            }
        };
        let token = self.tokens.issue(user.id)?;
        debug!(user_id = user.id, ttl_secs = self.tokens.ttl().num_seconds(), "token issued");
        Ok(token)
    }

    /// Validate a token and return the user id it asserts.
    pub fn parse_token(&self, token: &str) -> Result<i32, ServiceError> {
        match self.tokens.parse(token) {
            Ok(claims) => Ok(claims.user_id),
            Err(e) => {
                debug!(reason = %e, code = e.code(), "token rejected");
                Err(e.into())
            }
        }
    }

    // Deterministic for a given salt, so equal passwords give equal hashes.
    fn hash_password(&self, raw: &str) -> Result<String, ServiceError> {
        Argon2::default()
            .hash_password(raw.as_bytes(), &self.salt)
            .map(|h| h.to_string())
            .map_err(|e| ServiceError::Dependency(format!("hash password: {e}")))
    }
}
