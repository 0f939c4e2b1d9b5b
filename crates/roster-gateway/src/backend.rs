// crates/roster-gateway/src/backend.rs
//
// The gateway's view of the RPC surface. A trait seam so the route
// handlers can be exercised against a stub without a live listener.

use async_trait::async_trait;
use tonic::Status;

use roster_rpc::messages::{
    CreateUserRequest, CreateUserResponse, GetUserRequest, GreetUserRequest,
    GreetUserResponse, User,
};
use roster_rpc::RosterClient;

/// One method per RPC operation. `authorization` is the caller's bearer
/// credential, forwarded verbatim; `None` means the caller sent none and
/// the listener will reject the call.
#[async_trait]
pub trait RosterBackend: Send + Sync {
    async fn create_user(
        &self,
        request: CreateUserRequest,
        authorization: Option<&str>,
    ) -> Result<CreateUserResponse, Status>;

    async fn get_user(
        &self,
        request: GetUserRequest,
        authorization: Option<&str>,
    ) -> Result<User, Status>;

    async fn greet_user(
        &self,
        request: GreetUserRequest,
        authorization: Option<&str>,
    ) -> Result<GreetUserResponse, Status>;
}

#[async_trait]
impl RosterBackend for RosterClient {
    async fn create_user(
        &self,
        request: CreateUserRequest,
        authorization: Option<&str>,
    ) -> Result<CreateUserResponse, Status> {
        RosterClient::create_user(self, request, authorization).await
    }

    async fn get_user(
        &self,
        request: GetUserRequest,
        authorization: Option<&str>,
    ) -> Result<User, Status> {
        RosterClient::get_user(self, request, authorization).await
    }

    async fn greet_user(
        &self,
        request: GreetUserRequest,
        authorization: Option<&str>,
    ) -> Result<GreetUserResponse, Status> {
        RosterClient::greet_user(self, request, authorization).await
    }
}
