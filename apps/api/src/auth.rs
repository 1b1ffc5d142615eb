//! Caller identity. Placeholder auth: the `X-User-Id` header names the user,
//! and a request without it acts as the shared demo user.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const DEMO_USER_ID: &str = "demo_user_1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

impl CurrentUser {
    pub fn id(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.headers.get(USER_ID_HEADER) {
            None => Ok(CurrentUser(DEMO_USER_ID.to_string())),
            Some(value) => {
                let id = value.to_str().map_err(|_| AppError::Unauthorized)?.trim();
                if id.is_empty() {
                    return Err(AppError::Unauthorized);
                }
                Ok(CurrentUser(id.to_string()))
            }
        }
    }
}
