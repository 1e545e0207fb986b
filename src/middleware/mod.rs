/// Bearer-token authentication for protected routes.
///
/// Handlers declare an [`AuthSession`] argument; extraction runs the full
/// check (header shape, revocation, signature/expiry) and either yields the
/// authenticated identity or rejects the request before the handler runs.
use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};

use crate::error::AppError;
use crate::security::jwt::{Claims, TokenService};
use crate::store::RevocationList;
use crate::AppState;

/// Authenticated identity for one request.
///
/// Carries the exact token string the caller presented alongside the decoded
/// claims: logout must revoke that string, not a reconstructed one.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub claims: Claims,
    pub token: String,
}

/// Run the credential check for one request.
///
/// Revocation is checked before signature validation, so a revoked token is
/// always reported as `Revoked` regardless of its cryptographic state, and
/// no signature work is spent on tokens already known bad.
pub fn authenticate(
    header: Option<&str>,
    revocations: &RevocationList,
    tokens: &TokenService,
) -> Result<AuthSession, AppError> {
    let header = header.ok_or(AppError::MissingCredential)?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::MalformedCredential)?;
    if token.is_empty() {
        return Err(AppError::MalformedCredential);
    }

    if revocations.is_revoked(token) {
        return Err(AppError::Revoked);
    }

    let claims = tokens.validate(token).map_err(|err| match err {
        AppError::InvalidSignature | AppError::Expired | AppError::Malformed => {
            AppError::Unauthenticated
        }
        other => other,
    })?;

    Ok(AuthSession {
        claims,
        token: token.to_string(),
    })
}

impl FromRequest for AuthSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            None => {
                return ready(Err(AppError::Internal(
                    "application state missing".to_string(),
                )))
            }
        };

        let header = match req.headers().get(header::AUTHORIZATION) {
            Some(value) => match value.to_str() {
                Ok(value) => Some(value),
                Err(_) => return ready(Err(AppError::MalformedCredential)),
            },
            None => None,
        };

        ready(authenticate(header, &state.revocations, &state.tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (RevocationList, TokenService) {
        (RevocationList::new(), TokenService::new("test-secret"))
    }

    #[test]
    fn test_missing_header() {
        let (revocations, tokens) = fixtures();
        assert!(matches!(
            authenticate(None, &revocations, &tokens),
            Err(AppError::MissingCredential)
        ));
    }

    #[test]
    fn test_wrong_scheme() {
        let (revocations, tokens) = fixtures();
        assert!(matches!(
            authenticate(Some("Basic dXNlcjpwYXNz"), &revocations, &tokens),
            Err(AppError::MalformedCredential)
        ));
    }

    #[test]
    fn test_empty_bearer_token() {
        let (revocations, tokens) = fixtures();
        assert!(matches!(
            authenticate(Some("Bearer "), &revocations, &tokens),
            Err(AppError::MalformedCredential)
        ));
    }

    #[test]
    fn test_garbage_token_unauthenticated() {
        let (revocations, tokens) = fixtures();
        assert!(matches!(
            authenticate(Some("Bearer not-a-jwt"), &revocations, &tokens),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn test_valid_token_yields_session() {
        let (revocations, tokens) = fixtures();
        let token = tokens.issue("bob").unwrap();
        let header = format!("Bearer {token}");

        let session = authenticate(Some(&header), &revocations, &tokens).unwrap();
        assert_eq!(session.claims.username, "bob");
        assert_eq!(session.token, token);
    }

    #[test]
    fn test_revocation_precedes_validity() {
        let (revocations, tokens) = fixtures();
        let token = tokens.issue("bob").unwrap();
        revocations.revoke(&token);
        let header = format!("Bearer {token}");

        // Still cryptographically valid and unexpired, but revoked wins.
        assert!(tokens.validate(&token).is_ok());
        assert!(matches!(
            authenticate(Some(&header), &revocations, &tokens),
            Err(AppError::Revoked)
        ));
    }

    #[test]
    fn test_reissued_token_unaffected_by_revocation() {
        let (revocations, tokens) = fixtures();
        let first = tokens.issue("bob").unwrap();
        revocations.revoke(&first);

        let second = tokens.issue("bob").unwrap();
        assert_ne!(first, second);
        assert!(!revocations.is_revoked(&second));

        let header = format!("Bearer {second}");
        let session = authenticate(Some(&header), &revocations, &tokens).unwrap();
        assert_eq!(session.claims.username, "bob");
    }
}
