// crates/roster-rpc/src/service.rs
//
// Business handlers for the three roster operations. Each validates its
// input before touching the store, and each is callable from either
// transport (the RPC listener dispatches here directly; the gateway
// reaches them through a loopback RPC call).

use std::sync::Arc;

use roster_core::{greeting, RosterError, UserRecord, UserStore};

use crate::messages::{
    CreateUserRequest, CreateUserResponse, GetUserRequest, GreetUserRequest,
    GreetUserResponse, User,
};

/// The service core: the three operations over a shared user store.
#[derive(Clone)]
pub struct RosterService {
    store: Arc<dyn UserStore>,
}

impl std::fmt::Debug for RosterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterService").finish()
    }
}

impl RosterService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Create (or overwrite) a user record.
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<CreateUserResponse, RosterError> {
        if request.username.is_empty() {
            return Err(RosterError::invalid_argument("username cannot be empty"));
        }
        if request.role.is_empty() {
            return Err(RosterError::invalid_argument("role cannot be empty"));
        }

        self.store
            .put(UserRecord::new(request.username.clone(), request.role))
            .await?;

        tracing::info!(username = %request.username, "user created");
        Ok(CreateUserResponse {})
    }

    /// Fetch a user record by username.
    pub async fn get_user(&self, request: GetUserRequest) -> Result<User, RosterError> {
        if request.username.is_empty() {
            return Err(RosterError::invalid_argument("username cannot be empty"));
        }

        let record = self
            .store
            .get(&request.username)
            .await?
            .ok_or_else(|| RosterError::not_found("user not found"))?;

        Ok(User {
            username: record.username,
            role: record.role,
        })
    }

    /// Compose a greeting for a user. NotFound from the lookup propagates
    /// with added context but keeps its kind.
    pub async fn greet_user(
        &self,
        request: GreetUserRequest,
    ) -> Result<GreetUserResponse, RosterError> {
        if request.username.is_empty() {
            return Err(RosterError::invalid_argument("username cannot be empty"));
        }
        if request.greeting.is_empty() {
            return Err(RosterError::invalid_argument("greeting cannot be empty"));
        }

        let user = self
            .get_user(GetUserRequest {
                username: request.username,
            })
            .await
            .map_err(|e| e.with_context("failed to find matching user"))?;

        let record = UserRecord::new(user.username, user.role);
        Ok(GreetUserResponse {
            greeting: greeting::greet(&request.greeting, &record),
        })
    }
}

#[cfg(test)]
mod tests {
    use roster_core::FailureKind;
    use roster_store::MemoryUserStore;

    use super::*;

    fn service() -> RosterService {
        RosterService::new(Arc::new(MemoryUserStore::new()))
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let svc = service();
        svc.create_user(CreateUserRequest {
            username: "alice".into(),
            role: "engineer".into(),
        })
        .await
        .unwrap();

        let user = svc
            .get_user(GetUserRequest {
                username: "alice".into(),
            })
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, "engineer");
    }

    #[tokio::test]
    async fn test_create_empty_username_rejected() {
        let svc = service();
        let err = svc
            .create_user(CreateUserRequest {
                username: "".into(),
                role: "engineer".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_create_empty_role_rejected_without_mutation() {
        let store = Arc::new(MemoryUserStore::new());
        let svc = RosterService::new(store.clone());

        let err = svc
            .create_user(CreateUserRequest {
                username: "alice".into(),
                role: "".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidArgument);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_unknown_user_not_found() {
        let svc = service();
        let err = svc
            .get_user(GetUserRequest {
                username: "nobody".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::NotFound);
    }

    #[tokio::test]
    async fn test_greet_exact_format() {
        let svc = service();
        svc.create_user(CreateUserRequest {
            username: "alice".into(),
            role: "engineer".into(),
        })
        .await
        .unwrap();

        let resp = svc
            .greet_user(GreetUserRequest {
                username: "alice".into(),
                greeting: "hello".into(),
            })
            .await
            .unwrap();
        assert_eq!(resp.greeting, "Hello, alice! You are a great engineer!");
    }

    #[tokio::test]
    async fn test_greet_unknown_user_keeps_not_found_kind() {
        let svc = service();
        let err = svc
            .greet_user(GreetUserRequest {
                username: "ghost".into(),
                greeting: "hello".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::NotFound);
        assert!(err.message().starts_with("failed to find matching user"));
    }

    #[tokio::test]
    async fn test_greet_empty_greeting_rejected() {
        let svc = service();
        let err = svc
            .greet_user(GreetUserRequest {
                username: "alice".into(),
                greeting: "".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_concurrent_creates_all_land() {
        let store = Arc::new(MemoryUserStore::new());
        let svc = RosterService::new(store.clone());

        let mut handles = Vec::new();
        for i in 0..32 {
            let svc = svc.clone();
            handles.push(tokio::spawn(async move {
                svc.create_user(CreateUserRequest {
                    username: format!("user-{}", i),
                    role: format!("role-{}", i),
                })
                .await
                .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..32 {
            let user = svc
                .get_user(GetUserRequest {
                    username: format!("user-{}", i),
                })
                .await
                .unwrap();
            assert_eq!(user.role, format!("role-{}", i));
        }
    }
}
