use crate::config::AuthConfig;
use crate::error::ErrorBackend;
use crate::server::app_state::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::header::AUTHORIZATION;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Identity carried by tokens minted by the account service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub exp: usize,
}

pub fn decode_claims(config: &AuthConfig, token: &str) -> Result<Claims, ErrorBackend> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256))
        .map(|data| data.claims)
        .map_err(|e| ErrorBackend::InvalidToken(e.to_string()))
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Rejects requests without a valid bearer token and stores the decoded
/// [`Claims`] in the request extensions.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ErrorBackend> {
    let token = bearer_token(&req).ok_or(ErrorBackend::Unauthenticated)?;
    let claims = decode_claims(&state.auth, token)?;
    debug!(user_id = claims.id, "authenticated request");
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
pub mod test_support {
    use super::Claims;
    use crate::config::AuthConfig;
    use jsonwebtoken::{EncodingKey, Header, encode};

    pub const TEST_SECRET: &str = "test-secret";

    pub fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
        }
    }

    pub fn token_for(id: i32, username: &str) -> String {
        let claims = Claims {
            id,
            email: Some(format!("{username}@example.com")),
            username: Some(username.to_string()),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{auth_config, token_for};
    use super::*;

    #[test]
    fn decodes_valid_token() {
        let claims = decode_claims(&auth_config(), &token_for(42, "ada")).unwrap();
        assert_eq!(claims.id, 42);
        assert_eq!(claims.username.as_deref(), Some("ada"));
    }

    #[test]
    fn rejects_foreign_signature() {
        let config = AuthConfig {
            jwt_secret: String::from("another-secret"),
        };
        let err = decode_claims(&config, &token_for(1, "ada")).unwrap_err();
        assert!(matches!(err, ErrorBackend::InvalidToken(_)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            decode_claims(&auth_config(), "not.a.jwt"),
            Err(ErrorBackend::InvalidToken(_))
        ));
    }
}
