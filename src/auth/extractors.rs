use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use super::jwt::{JwtKeys, Role};
use crate::error::ApiError;

/// Extracts and validates the bearer token, yielding the identity and role
/// claims. Rejects with 401 when the token is missing, malformed or expired.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: Role,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError::Auth("No authentication token, access denied".to_string())
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(|| {
                ApiError::Auth("No authentication token, access denied".to_string())
            })?;

        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::Auth("Token is invalid or expired".to_string())
        })?;

        Ok(AuthUser {
            id: claims.sub,
            role: claims.role,
        })
    }
}

/// Admin gate, composed after [`AuthUser`]. The role claim from the token is
/// what is checked, not the stored row.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != Role::Admin {
            warn!(user_id = %user.id, "admin route denied");
            return Err(ApiError::Forbidden("Access denied. Admin only.".to_string()));
        }
        Ok(AdminUser(user))
    }
}

/// Optional identity for routes that allow guests. A missing or invalid token
/// yields `None` rather than a 401; order placement works for anonymous
/// shoppers.
#[derive(Debug, Clone, Copy)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}

#[cfg(test)]
mod extractor_tests {
    use super::*;
    use crate::state::AppState;
    use axum::http::{header::AUTHORIZATION, Request};

    fn parts_with_header(value: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/orders");
        if let Some(v) = value {
            builder = builder.header(AUTHORIZATION, v);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    fn signed_token(state: &AppState, role: Role) -> (Uuid, String) {
        let keys = JwtKeys::from_ref(state);
        let id = Uuid::new_v4();
        (id, keys.sign(id, role).expect("sign"))
    }

    #[tokio::test]
    async fn auth_user_accepts_valid_bearer() {
        let state = AppState::fake();
        let (id, token) = signed_token(&state, Role::User);
        let mut parts = parts_with_header(Some(format!("Bearer {token}")));
        let user = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extract");
        assert_eq!(user.id, id);
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn auth_user_rejects_missing_header() {
        let state = AppState::fake();
        let mut parts = parts_with_header(None);
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[tokio::test]
    async fn auth_user_rejects_non_bearer_scheme() {
        let state = AppState::fake();
        let mut parts = parts_with_header(Some("Basic dXNlcjpwYXNz".into()));
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[tokio::test]
    async fn admin_gate_rejects_plain_user_with_forbidden() {
        let state = AppState::fake();
        let (_, token) = signed_token(&state, Role::User);
        let mut parts = parts_with_header(Some(format!("Bearer {token}")));
        let err = AdminUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[tokio::test]
    async fn admin_gate_accepts_admin_token() {
        let state = AppState::fake();
        let (id, token) = signed_token(&state, Role::Admin);
        let mut parts = parts_with_header(Some(format!("Bearer {token}")));
        let AdminUser(user) = AdminUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extract");
        assert_eq!(user.id, id);
    }

    #[tokio::test]
    async fn maybe_auth_user_treats_garbage_as_guest() {
        let state = AppState::fake();
        let mut parts = parts_with_header(Some("Bearer garbage".into()));
        let MaybeAuthUser(user) = MaybeAuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn maybe_auth_user_picks_up_valid_token() {
        let state = AppState::fake();
        let (id, token) = signed_token(&state, Role::User);
        let mut parts = parts_with_header(Some(format!("Bearer {token}")));
        let MaybeAuthUser(user) = MaybeAuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(user.map(|u| u.id), Some(id));
    }
}
