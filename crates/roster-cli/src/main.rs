// crates/roster-cli/src/main.rs
//
// CLI entrypoint for the Roster developer tools.
//
// Drives the HTTP gateway: create a user, fetch a user, compose a
// greeting. The bearer token is forwarded as the Authorization header and
// checked by the RPC listener behind the gateway.

mod http;

use clap::{Parser, Subcommand};

/// Roster CLI — developer tools for the Roster service.
#[derive(Parser, Debug)]
#[command(name = "roster", version = "0.1.0", about = "Roster service CLI")]
struct Cli {
    /// HTTP gateway endpoint.
    #[arg(long, global = true, default_value = "http://localhost:8080")]
    endpoint: String,

    /// Bearer token presented to the RPC listener.
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Create (or overwrite) a user record.
    Create {
        /// Unique username.
        username: String,
        /// Role label, e.g. "engineer".
        role: String,
    },

    /// Fetch a user record.
    Get {
        /// Username to look up.
        username: String,
    },

    /// Compose a greeting for a user.
    Greet {
        /// Username to greet.
        username: String,
        /// Greeting text, e.g. "hello".
        greeting: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = http::GatewayClient::new(&cli.endpoint, cli.token.as_deref());

    match &cli.command {
        Commands::Create { username, role } => {
            client
                .post(
                    "/v1/users",
                    serde_json::json!({ "username": username, "role": role }),
                )
                .await?;
            println!("created {}", username);
        }
        Commands::Get { username } => {
            let user = client.get(&format!("/v1/users/{}", username)).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        Commands::Greet { username, greeting } => {
            let response = client
                .post(
                    &format!("/v1/users/{}/greet", username),
                    serde_json::json!({ "greeting": greeting }),
                )
                .await?;
            match response.get("greeting").and_then(|v| v.as_str()) {
                Some(text) => println!("{}", text),
                None => println!("{}", serde_json::to_string_pretty(&response)?),
            }
        }
    }

    Ok(())
}
