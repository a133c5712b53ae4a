use crate::state::AppState;
use axum::Router;

mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod repo;
pub mod repo_types;

pub use extractors::{AdminUser, AuthUser, MaybeAuthUser};
pub use jwt::{Claims, JwtKeys, Role};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
