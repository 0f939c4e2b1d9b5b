// crates/roster-rpc/src/auth.rs
//
// Bearer-token auth guard for the RPC listener.
//
// Wired into the tonic server via InterceptedService, so it runs before
// any handler. A rejected call never reaches the service core and leaves
// no side effects.

use tonic::service::Interceptor;
use tonic::{Request, Status};

/// Per-call bearer credential check against a configured shared secret.
///
/// The expected token is injected at construction time so deployments can
/// rotate it and tests can pick their own.
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    token: String,
}

impl AuthInterceptor {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, request: Request<()>) -> Result<Request<()>, Status> {
        let mut values = request.metadata().get_all("authorization").iter();

        let value = match values.next() {
            Some(v) => v,
            None => return Err(Status::unauthenticated("missing authorization metadata")),
        };
        // Exactly one value is required.
        if values.next().is_some() {
            return Err(Status::unauthenticated("invalid token"));
        }
        match value.to_str() {
            Ok(token) if token == self.token => Ok(request),
            _ => Err(Status::unauthenticated("invalid token")),
        }
    }
}

#[cfg(test)]
mod tests {
    use tonic::metadata::MetadataValue;
    use tonic::Code;

    use super::*;

    fn interceptor() -> AuthInterceptor {
        AuthInterceptor::new("valid-token")
    }

    #[test]
    fn test_missing_token_rejected() {
        let err = interceptor().call(Request::new(())).unwrap_err();
        assert_eq!(err.code(), Code::Unauthenticated);
    }

    #[test]
    fn test_wrong_token_rejected() {
        let mut request = Request::new(());
        request.metadata_mut().insert(
            "authorization",
            MetadataValue::from_static("wrong-token"),
        );
        let err = interceptor().call(request).unwrap_err();
        assert_eq!(err.code(), Code::Unauthenticated);
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let mut request = Request::new(());
        request.metadata_mut().append(
            "authorization",
            MetadataValue::from_static("valid-token"),
        );
        request.metadata_mut().append(
            "authorization",
            MetadataValue::from_static("valid-token"),
        );
        let err = interceptor().call(request).unwrap_err();
        assert_eq!(err.code(), Code::Unauthenticated);
    }

    #[test]
    fn test_valid_token_forwarded() {
        let mut request = Request::new(());
        request.metadata_mut().insert(
            "authorization",
            MetadataValue::from_static("valid-token"),
        );
        assert!(interceptor().call(request).is_ok());
    }

    #[test]
    fn test_token_is_injected_not_fixed() {
        let mut guard = AuthInterceptor::new("rotated-secret");
        let mut request = Request::new(());
        request.metadata_mut().insert(
            "authorization",
            MetadataValue::from_static("rotated-secret"),
        );
        assert!(guard.call(request).is_ok());

        let mut stale = Request::new(());
        stale.metadata_mut().insert(
            "authorization",
            MetadataValue::from_static("valid-token"),
        );
        assert!(guard.call(stale).is_err());
    }
}
