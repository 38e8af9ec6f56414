use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use tracing::debug;

use crate::domain::{
    authentication::{entities::JwtClaims, ports::TokenVerifier},
    common::{AuthConfig, entities::app_errors::CoreError},
};

/// Verifies HS256 access tokens signed with the identity provider's shared secret.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[config.jwt_audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<JwtClaims, CoreError> {
        decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => {
                    debug!("rejected access token: {}", e);
                    CoreError::InvalidToken
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    const SECRET: &str = "test-secret";

    fn verifier() -> JwtTokenVerifier {
        JwtTokenVerifier::new(&AuthConfig {
            jwt_secret: SECRET.to_string(),
            jwt_audience: "authenticated".to_string(),
        })
    }

    fn token(exp: i64, aud: &str, secret: &str) -> String {
        let claims = JwtClaims {
            sub: "0194a000-0000-7000-8000-0000000000ff".to_string(),
            exp,
            aud: Some(aud.to_string()),
            email: None,
            role: Some("authenticated".to_string()),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_yields_claims() {
        let exp = Utc::now().timestamp() + 3600;
        let claims = verifier()
            .verify(&token(exp, "authenticated", SECRET))
            .unwrap();
        assert_eq!(claims.sub, "0194a000-0000-7000-8000-0000000000ff");
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let exp = Utc::now().timestamp() - 3600;
        let result = verifier().verify(&token(exp, "authenticated", SECRET));
        assert_eq!(result.unwrap_err(), CoreError::TokenExpired);
    }

    #[test]
    fn wrong_secret_or_audience_is_invalid() {
        let exp = Utc::now().timestamp() + 3600;
        assert_eq!(
            verifier().verify(&token(exp, "authenticated", "other")),
            Err(CoreError::InvalidToken)
        );
        assert_eq!(
            verifier().verify(&token(exp, "anon", SECRET)),
            Err(CoreError::InvalidToken)
        );
    }
}
