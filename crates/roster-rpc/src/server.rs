// crates/roster-rpc/src/server.rs
//
// RPC server setup: RosterRpcServer, RpcConfig, and the hand-written
// tonic service.
//
// The tower Service impl below is codegen-shaped: it routes on the gRPC
// method path and drives each call through tonic::server::Grpc with a
// ProstCodec. Writing it by hand keeps the crate free of proto files and
// build scripts while still using tonic's transport, framing, and
// interceptor machinery.

use std::sync::Arc;

use http_body::Body as HttpBody;
use serde::{Deserialize, Serialize};
use tonic::codegen::{empty_body, BoxFuture};
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Identity, Server, ServerTlsConfig};
use tonic::Status;

use crate::auth::AuthInterceptor;
use crate::error::status_from_error;
use crate::messages::{
    CreateUserRequest, CreateUserResponse, GetUserRequest, GreetUserRequest,
    GreetUserResponse, User, CREATE_USER_PATH, GET_USER_PATH, GREET_USER_PATH,
    SERVICE_NAME,
};
use crate::service::RosterService;

// ---------------------------------------------------------------------------
// RpcConfig
// ---------------------------------------------------------------------------

/// Configuration for the RPC listener.
#[derive(Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Host to bind to (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Path to the PEM server certificate supplied by the certificate store.
    pub cert_path: String,
    /// Path to the PEM private key for the certificate.
    pub key_path: String,
    /// Shared-secret bearer token every call must present.
    pub auth_token: String,
}

impl std::fmt::Debug for RpcConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// RosterRpcServer
// ---------------------------------------------------------------------------

/// The TLS-terminating gRPC listener for the Roster service.
///
/// Every inbound call passes through the auth interceptor before it can
/// reach a handler.
#[derive(Debug, Clone)]
pub struct RosterRpcServer {
    config: RpcConfig,
    service: Arc<RosterService>,
}

impl RosterRpcServer {
    pub fn new(config: RpcConfig, service: Arc<RosterService>) -> Self {
        Self { config, service }
    }

    /// Bind the configured address and serve until `shutdown` resolves,
    /// then stop accepting and drain in-flight calls.
    pub async fn start(
        &self,
        shutdown: impl std::future::Future<Output = ()> + Send,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.host, self.config.port).parse()?;

        let cert = tokio::fs::read(&self.config.cert_path).await?;
        let key = tokio::fs::read(&self.config.key_path).await?;
        let identity = Identity::from_pem(cert, key);

        tracing::info!("roster RPC listener starting on {}", addr);

        Server::builder()
            .tls_config(ServerTlsConfig::new().identity(identity))?
            .add_service(InterceptedService::new(
                RosterServer::new(self.service.clone()),
                AuthInterceptor::new(self.config.auth_token.clone()),
            ))
            .serve_with_shutdown(addr, shutdown)
            .await?;

        tracing::info!("roster RPC listener stopped");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tonic service wiring
// ---------------------------------------------------------------------------

/// The tonic service wrapper: one unary gRPC method per operation,
/// dispatched on the request URI path.
#[derive(Clone)]
pub struct RosterServer {
    service: Arc<RosterService>,
}

impl RosterServer {
    pub fn new(service: Arc<RosterService>) -> Self {
        Self { service }
    }
}

impl tonic::server::NamedService for RosterServer {
    const NAME: &'static str = SERVICE_NAME;
}

impl<B> tower_service::Service<http::Request<B>> for RosterServer
where
    B: HttpBody + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + Send + 'static,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = std::convert::Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let service = Arc::clone(&self.service);

        match req.uri().path() {
            CREATE_USER_PATH => Box::pin(async move {
                let method = CreateUserSvc(service);
                let codec = tonic::codec::ProstCodec::default();
                let mut grpc = tonic::server::Grpc::new(codec);
                Ok(grpc.unary(method, req).await)
            }),
            GET_USER_PATH => Box::pin(async move {
                let method = GetUserSvc(service);
                let codec = tonic::codec::ProstCodec::default();
                let mut grpc = tonic::server::Grpc::new(codec);
                Ok(grpc.unary(method, req).await)
            }),
            GREET_USER_PATH => Box::pin(async move {
                let method = GreetUserSvc(service);
                let codec = tonic::codec::ProstCodec::default();
                let mut grpc = tonic::server::Grpc::new(codec);
                Ok(grpc.unary(method, req).await)
            }),
            _ => Box::pin(async move {
                Ok(http::Response::builder()
                    .status(200)
                    .header("grpc-status", tonic::Code::Unimplemented as i32)
                    .header(http::header::CONTENT_TYPE, "application/grpc")
                    .body(empty_body())
                    .unwrap())
            }),
        }
    }
}

struct CreateUserSvc(Arc<RosterService>);

impl tonic::server::UnaryService<CreateUserRequest> for CreateUserSvc {
    type Response = CreateUserResponse;
    type Future = BoxFuture<tonic::Response<Self::Response>, Status>;

    fn call(&mut self, request: tonic::Request<CreateUserRequest>) -> Self::Future {
        let service = Arc::clone(&self.0);
        Box::pin(async move {
            service
                .create_user(request.into_inner())
                .await
                .map(tonic::Response::new)
                .map_err(status_from_error)
        })
    }
}

struct GetUserSvc(Arc<RosterService>);

impl tonic::server::UnaryService<GetUserRequest> for GetUserSvc {
    type Response = User;
    type Future = BoxFuture<tonic::Response<Self::Response>, Status>;

    fn call(&mut self, request: tonic::Request<GetUserRequest>) -> Self::Future {
        let service = Arc::clone(&self.0);
        Box::pin(async move {
            service
                .get_user(request.into_inner())
                .await
                .map(tonic::Response::new)
                .map_err(status_from_error)
        })
    }
}

struct GreetUserSvc(Arc<RosterService>);

impl tonic::server::UnaryService<GreetUserRequest> for GreetUserSvc {
    type Response = GreetUserResponse;
    type Future = BoxFuture<tonic::Response<Self::Response>, Status>;

    fn call(&mut self, request: tonic::Request<GreetUserRequest>) -> Self::Future {
        let service = Arc::clone(&self.0);
        Box::pin(async move {
            service
                .greet_user(request.into_inner())
                .await
                .map(tonic::Response::new)
                .map_err(status_from_error)
        })
    }
}
