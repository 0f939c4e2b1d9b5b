// crates/roster-rpc/src/messages.rs
//
// Wire message types for the roster.v1.Roster service.
//
// Hand-maintained prost structs instead of proto codegen; the serde
// derives are the JSON projection the gateway serves, so the two
// transports cannot drift apart.

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub role: String,
}

/// CreateUser succeeds with no payload.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserResponse {}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserRequest {
    #[prost(string, tag = "1")]
    pub username: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub role: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetUserRequest {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub greeting: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetUserResponse {
    #[prost(string, tag = "1")]
    pub greeting: String,
}

/// Fully-qualified gRPC method paths, shared by the server dispatch and
/// the client so they cannot disagree.
pub const SERVICE_NAME: &str = "roster.v1.Roster";
pub const CREATE_USER_PATH: &str = "/roster.v1.Roster/CreateUser";
pub const GET_USER_PATH: &str = "/roster.v1.Roster/GetUser";
pub const GREET_USER_PATH: &str = "/roster.v1.Roster/GreetUser";
