// crates/roster-rpc/src/lib.rs
//
// roster-rpc: gRPC surface for the Roster service.
//
// Provides the prost message types, the business handlers, the bearer-token
// auth interceptor, a TLS-terminating tonic server, and a TLS client used
// by the gateway. The tonic service is written by hand (codegen-shaped
// dispatch on URI path) rather than generated from a proto file.

pub mod auth;
pub mod client;
pub mod error;
pub mod messages;
pub mod server;
pub mod service;

// Re-export the main types for ergonomic access.
pub use auth::AuthInterceptor;
pub use client::{ClientConfig, RosterClient};
pub use server::{RosterRpcServer, RpcConfig};
pub use service::RosterService;
