use std::collections::HashMap;

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::WebError;

/// API keys loaded from the environment, one `token:user-uuid` pair per
/// comma-separated entry. Malformed entries are skipped.
#[derive(Clone)]
pub struct ApiKeys {
    keys: HashMap<String, Uuid>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|entry| {
                let (token, user) = entry.split_once(':')?;
                let user_id = Uuid::parse_str(user.trim()).ok()?;
                Some((token.trim().to_string(), user_id))
            })
            .collect();

        Self { keys }
    }

    pub fn user_for(&self, key: &str) -> Option<Uuid> {
        self.keys.get(key).copied()
    }
}

/// The resolved caller. Extraction is the only authorization step;
/// everything downstream trusts the user id it carries.
pub struct AuthedUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    ApiKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let api_keys = ApiKeys::from_ref(state);
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(WebError::Unauthorized)?;

        match api_keys.user_for(token) {
            Some(user_id) => Ok(Self(user_id)),
            None => {
                tracing::warn!("Invalid API key attempt");
                Err(WebError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiKeys;
    use uuid::Uuid;

    #[test]
    fn parses_token_user_pairs() {
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();
        let keys =
            ApiKeys::from_comma_separated(&format!("alpha:{user_a}, beta:{user_b} ,, broken"));

        assert_eq!(keys.user_for("alpha"), Some(user_a));
        assert_eq!(keys.user_for("beta"), Some(user_b));
        assert_eq!(keys.user_for("broken"), None);
        assert_eq!(keys.user_for("missing"), None);
    }
}
