use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use serde_json::json;

use crate::handler::AppModule;

/// Capability guard for admin-only routes: the caller must present the
/// configured bearer token. User management itself lives outside this
/// system.
pub struct RequireAdmin;

#[derive(Debug)]
pub enum AuthError {
    Unauthenticated,
    Forbidden,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AuthError::Unauthenticated => (StatusCode::UNAUTHORIZED, "Authentication required"),
            AuthError::Forbidden => (StatusCode::FORBIDDEN, "Admin role required"),
        };
        let body = Json(json!({
            "success": false,
            "message": message,
        }));
        (status, body).into_response()
    }
}

#[axum::async_trait]
impl FromRequestParts<AppModule> for RequireAdmin {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AuthError::Unauthenticated)?;
        if bearer.token() != state.admin_token() {
            return Err(AuthError::Forbidden);
        }
        Ok(Self)
    }
}
