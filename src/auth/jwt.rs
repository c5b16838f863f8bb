use crate::core::errors::SettingsError;
use crate::core::models::Ship;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const TOKEN_LIFETIME_SECS: usize = 3600;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Ship, with sig
    pub exp: usize,
}

impl Claims {
    pub fn ship(&self) -> Result<Ship, SettingsError> {
        Ship::parse(&self.sub).map_err(|_| SettingsError::InvalidToken(format!("bad subject {}", self.sub)))
    }
}

pub struct JwtService {
    secret: String,
}

impl JwtService {
    pub fn new(secret: String) -> Self {
        JwtService { secret }
    }

    pub fn generate_token(&self, ship: &Ship) -> Result<String, SettingsError> {
        let expiration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as usize + TOKEN_LIFETIME_SECS)
            .map_err(|e| SettingsError::InternalServerError(format!("Time error: {}", e)))?;

        let claims = Claims {
            sub: ship.to_string(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| SettingsError::InternalServerError(format!("JWT encoding error: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, SettingsError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| SettingsError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }
}
