// crates/roster-cli/src/http.rs
//
// Lightweight JSON client for the Roster HTTP gateway.

use serde_json::Value;

/// JSON client bound to one gateway endpoint, with an optional bearer
/// token forwarded on every request.
pub struct GatewayClient {
    endpoint: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl GatewayClient {
    pub fn new(endpoint: &str, token: Option<&str>) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value, Box<dyn std::error::Error>> {
        let mut request = self.client.get(format!("{}{}", self.endpoint, path));
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }
        Self::into_result(request.send().await?).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: Value,
    ) -> Result<Value, Box<dyn std::error::Error>> {
        let mut request = self
            .client
            .post(format!("{}{}", self.endpoint, path))
            .json(&body);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }
        Self::into_result(request.send().await?).await
    }

    /// Turn a gateway response into the JSON payload, or the gateway's
    /// `{"error": ...}` message on a non-success status.
    async fn into_result(
        response: reqwest::Response,
    ) -> Result<Value, Box<dyn std::error::Error>> {
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            return Ok(body);
        }
        let message = body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("request failed");
        Err(format!("{}: {}", status, message).into())
    }
}
