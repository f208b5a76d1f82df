//! Bearer-token authentication middleware and extractor.
//!
//! The middleware resolves `Authorization: Bearer <token>` through the
//! `TokenVerifier` port and injects the resulting [`Principal`] into the
//! request extensions. Requests without a token pass through untouched;
//! handlers that need an authenticated actor use [`RequirePrincipal`],
//! which rejects with 401 when no principal was injected.
//!
//! Keeping verification behind the port means the middleware is identical
//! whether tokens are real JWTs or the test-time mock verifier.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::Principal;
use crate::ports::TokenVerifier;

/// Middleware state - the token verifier port.
pub type AuthState = Arc<dyn TokenVerifier>;

/// Validates the bearer token, if present, and injects the principal.
///
/// An invalid or expired token fails the request immediately with the
/// verifier's error; a missing token is not an error at this layer.
pub async fn auth_middleware(
    State(verifier): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match verifier.verify(token).await {
            Ok(principal) => {
                request.extensions_mut().insert(principal);
                next.run(request).await
            }
            Err(err) => ApiError(err).into_response(),
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated principal.
///
/// Reads the `Principal` the middleware placed in the request extensions
/// and rejects with 401 when it is absent.
#[derive(Debug, Clone)]
pub struct RequirePrincipal(pub Principal);

impl<S> axum::extract::FromRequestParts<S> for RequirePrincipal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<Principal>()
                .cloned()
                .map(RequirePrincipal)
                .ok_or_else(|| {
                    ApiError(crate::domain::foundation::DomainError::unauthorized())
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenVerifier;
    use crate::domain::foundation::{Role, UserId};
    use axum::extract::FromRequestParts;
    use axum::http::{Request, StatusCode};

    fn test_principal() -> Principal {
        Principal::new(UserId::new(), Role::Admin, "admin@example.com")
    }

    #[tokio::test]
    async fn verifier_resolves_known_token() {
        let verifier: Arc<dyn TokenVerifier> =
            Arc::new(MockTokenVerifier::new().with_principal("valid-token", test_principal()));

        let principal = verifier.verify("valid-token").await.unwrap();
        assert_eq!(principal.email, "admin@example.com");
    }

    #[tokio::test]
    async fn verifier_rejects_unknown_token() {
        let verifier: Arc<dyn TokenVerifier> = Arc::new(MockTokenVerifier::new());

        let err = verifier.verify("unknown").await.unwrap_err();
        assert_eq!(
            err.code,
            crate::domain::foundation::ErrorCode::InvalidToken
        );
    }

    #[tokio::test]
    async fn require_principal_extracts_from_extensions() {
        let mut request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(test_principal());
        let (mut parts, _body) = request.into_parts();

        let result = RequirePrincipal::from_request_parts(&mut parts, &()).await;

        let RequirePrincipal(principal) = result.unwrap();
        assert_eq!(principal.email, "admin@example.com");
    }

    #[tokio::test]
    async fn require_principal_rejects_with_401_when_absent() {
        let request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result = RequirePrincipal::from_request_parts(&mut parts, &()).await;

        let rejection = result.err().unwrap();
        assert_eq!(rejection.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bearer_token_extraction() {
        assert_eq!(
            "Bearer my-token".strip_prefix("Bearer "),
            Some("my-token")
        );
        assert_eq!("my-token".strip_prefix("Bearer "), None);
        assert_eq!("Basic dXNlcg==".strip_prefix("Bearer "), None);
    }
}
