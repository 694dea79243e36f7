use crate::models::user::{Claims, Role, TokenPayload};
use anyhow::{Context, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Issues and validates the bearer tokens that every authenticated endpoint
/// relies on.
///
/// Constructed once at startup with the signing secret and handed to handlers
/// through `AppState`, so no request path ever touches the environment.
pub struct TokenService {
    secret: String,
    expiry_days: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_days: 7,
        }
    }

    /// Encode {id, role} into a signed token with an expiry.
    pub fn issue(&self, user_id: Uuid, role: Role) -> Result<String> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::days(self.expiry_days))
            .context("valid timestamp")?
            .timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .context("Failed to sign token")
    }

    /// Decode and verify a token.
    ///
    /// None covers every rejection case the same way: bad signature, malformed
    /// token, expired, or a subject that is not a UUID. A missing token never
    /// reaches this function — that is the extractor's 401.
    pub fn validate(&self, token: &str) -> Option<TokenPayload> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .ok()?;

        let id = Uuid::parse_str(&data.claims.sub).ok()?;

        Some(TokenPayload {
            id,
            role: data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_and_validate_roundtrip() {
        let service = TokenService::new("test-secret-key-12345");
        let id = Uuid::new_v4();

        let token = service.issue(id, Role::Admin).unwrap();
        assert!(!token.is_empty());

        let payload = service.validate(&token).unwrap();
        assert_eq!(payload.id, id);
        assert_eq!(payload.role, Role::Admin);
    }

    #[test]
    fn signup_tokens_carry_normal_role() {
        let service = TokenService::new("test-secret-key-12345");
        let token = service.issue(Uuid::new_v4(), Role::Normal).unwrap();
        assert_eq!(service.validate(&token).unwrap().role, Role::Normal);
    }

    #[test]
    fn malformed_token_is_invalid() {
        let service = TokenService::new("test-secret-key-12345");
        assert!(service.validate("not.a.token").is_none());
        assert!(service.validate("").is_none());
    }

    #[test]
    fn token_from_different_secret_is_invalid() {
        let service1 = TokenService::new("secret-one");
        let service2 = TokenService::new("secret-two");

        let token = service1.issue(Uuid::new_v4(), Role::Normal).unwrap();
        assert!(service2.validate(&token).is_none());
    }

    #[test]
    fn expired_token_is_invalid() {
        let secret = "test-secret-key-12345";
        let service = TokenService::new(secret);

        // Hand-craft a token that expired an hour ago (beyond default leeway).
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: Role::Normal,
            exp: chrono::Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap();

        assert!(service.validate(&token).is_none());
    }

    #[test]
    fn non_uuid_subject_is_invalid() {
        let secret = "test-secret-key-12345";
        let service = TokenService::new(secret);

        let claims = Claims {
            sub: "definitely-not-a-uuid".to_string(),
            role: Role::Normal,
            exp: chrono::Utc::now().timestamp() + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap();

        assert!(service.validate(&token).is_none());
    }
}
