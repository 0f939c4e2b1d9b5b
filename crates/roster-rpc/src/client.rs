// crates/roster-rpc/src/client.rs
//
// TLS client for the roster.v1.Roster service.
//
// The gateway uses this to loop HTTP requests back through the RPC
// listener; tests and tooling can use it directly. One-way TLS: the
// server certificate is verified against a CA PEM, no client certificate
// is presented. The caller's bearer credential, when present, rides along
// as `authorization` metadata.

use http::uri::PathAndQuery;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};
use tonic::{Request, Response, Status};

use crate::messages::{
    CreateUserRequest, CreateUserResponse, GetUserRequest, GreetUserRequest,
    GreetUserResponse, User, CREATE_USER_PATH, GET_USER_PATH, GREET_USER_PATH,
};

/// Configuration for a client connection to the RPC listener.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Listener URI, e.g. "https://127.0.0.1:50051".
    pub endpoint: String,
    /// Path to the PEM certificate (or issuing CA) to trust.
    pub ca_cert_path: String,
    /// Domain name the server certificate was issued for.
    pub tls_domain: String,
}

/// A thin typed wrapper over a lazily-connected tonic channel.
#[derive(Debug, Clone)]
pub struct RosterClient {
    grpc: Grpc<Channel>,
}

impl RosterClient {
    /// Build the TLS channel without connecting; the transport dials on
    /// the first call, so the client can be constructed before the
    /// listener is accepting.
    pub fn connect_lazy(config: &ClientConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let ca = std::fs::read(&config.ca_cert_path)?;
        let tls = ClientTlsConfig::new()
            .ca_certificate(Certificate::from_pem(ca))
            .domain_name(config.tls_domain.clone());

        let channel = Endpoint::from_shared(config.endpoint.clone())?
            .tls_config(tls)?
            .connect_lazy();

        Ok(Self {
            grpc: Grpc::new(channel),
        })
    }

    pub async fn create_user(
        &self,
        request: CreateUserRequest,
        authorization: Option<&str>,
    ) -> Result<CreateUserResponse, Status> {
        self.unary(request, CREATE_USER_PATH, authorization).await
    }

    pub async fn get_user(
        &self,
        request: GetUserRequest,
        authorization: Option<&str>,
    ) -> Result<User, Status> {
        self.unary(request, GET_USER_PATH, authorization).await
    }

    pub async fn greet_user(
        &self,
        request: GreetUserRequest,
        authorization: Option<&str>,
    ) -> Result<GreetUserResponse, Status> {
        self.unary(request, GREET_USER_PATH, authorization).await
    }

    async fn unary<Req, Resp>(
        &self,
        message: Req,
        path: &'static str,
        authorization: Option<&str>,
    ) -> Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.grpc.clone();
        grpc.ready()
            .await
            .map_err(|e| Status::unavailable(format!("RPC listener not ready: {}", e)))?;

        let mut request = Request::new(message);
        if let Some(token) = authorization {
            let value: MetadataValue<Ascii> = token
                .parse()
                .map_err(|_| Status::unauthenticated("authorization value is not valid metadata"))?;
            request.metadata_mut().insert("authorization", value);
        }

        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        grpc.unary(request, PathAndQuery::from_static(path), codec)
            .await
            .map(Response::into_inner)
    }
}
