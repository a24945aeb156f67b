use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::errors::AppError;

/// The learner attached to a request, read from the identity headers the
/// web client sends. `X-User-Id` is mandatory; the display name and avatar
/// are optional decoration.
#[derive(Clone, Debug)]
pub struct UserIdentity {
    pub id: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl FromRequest for UserIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let identity = header("X-User-Id")
            .map(|id| UserIdentity {
                id,
                display_name: header("X-User-Name"),
                avatar_url: header("X-User-Avatar"),
            })
            .ok_or_else(|| AppError::Unauthorized("Missing X-User-Id header".to_string()));

        ready(identity)
    }
}
