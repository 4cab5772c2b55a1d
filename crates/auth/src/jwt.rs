//! JWT token generation and validation.

use chrono::{Duration, Utc};
use entities::Role;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AuthError, AuthResult, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_JWT_ISSUER};

/// JWT claims for Shepherd session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: String,
    /// Email address.
    pub email: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Role, consumed by the per-action authorization gates.
    pub role: Role,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
    /// Issuer.
    pub iss: String,
    /// JWT ID.
    pub jti: String,
}

impl Claims {
    /// Creates new claims for a user.
    pub fn new(
        user_id: Uuid,
        email: String,
        name: Option<String>,
        role: Role,
        expiration_hours: u64,
    ) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: user_id.to_string(),
            email,
            name,
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: DEFAULT_JWT_ISSUER.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Returns the user ID.
    pub fn user_id(&self) -> AuthResult<Uuid> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }

    /// Returns true if the token is expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Token expiration in hours.
    pub expiration_hours: u64,
    /// Token issuer.
    pub issuer: String,
}

impl JwtConfig {
    /// Creates a new JWT configuration.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            issuer: DEFAULT_JWT_ISSUER.to_string(),
        }
    }

    /// Sets the expiration time in hours.
    pub fn with_expiration_hours(mut self, hours: u64) -> Self {
        self.expiration_hours = hours;
        self
    }

    /// Sets the issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }
}

/// JWT token manager.
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JwtManager {
    /// Creates a new JWT manager.
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generates a session token for a user.
    pub fn generate_token(
        &self,
        user_id: Uuid,
        email: String,
        name: Option<String>,
        role: Role,
    ) -> AuthResult<String> {
        let claims = Claims::new(user_id, email, name, role, self.config.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::JwtEncoding(e.to_string()))
    }

    /// Validates and decodes a token.
    pub fn validate_token(&self, token: &str) -> AuthResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }

    /// Returns the expiration time in seconds.
    pub fn expiration_seconds(&self) -> u64 {
        self.config.expiration_hours * 3600
    }
}
