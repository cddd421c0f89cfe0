//! HttpGateway - REST implementation of the remote data gateway.
//!
//! Talks JSON to the NovaMatch backend under a single base URL. Requests carry
//! no timeout: a hung backend leaves the caller waiting.

use async_trait::async_trait;
use novamatch_core::auth::{AuthResponse, IdTokenRequest};
use novamatch_core::error::{NovaError, Result};
use novamatch_core::gateway::RemoteGateway;
use novamatch_core::matchmaking::{MatchQuery, MatchResult};
use novamatch_core::profile::{
    CreatedRecord, InvestorProfile, NewInvestor, NewStartup, StartupProfile,
};
use novamatch_core::AppConfig;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

const STARTUPS_PATH: &str = "/api/startups";
const INVESTORS_PATH: &str = "/api/investors";
const MATCHMAKING_PATH: &str = "/api/matchmaking";
const GOOGLE_AUTH_PATH: &str = "/api/auth/google";

/// Gateway that issues JSON HTTP requests with reqwest.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway for `base_url`. Trailing slashes are ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a gateway that sends through a preconfigured client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.backend_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, None::<&()>).await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "Sending request");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NovaError::network(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::debug!(%method, %url, status = status.as_u16(), "Request rejected");
            return Err(NovaError::http_status(status.as_u16(), error_text));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let url = response.url().to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| NovaError::network(format!("Failed to read response from {}: {}", url, e)))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| NovaError::decode(format!("Unexpected response from {}: {}", url, e)))
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn list_startups(&self) -> Result<Vec<StartupProfile>> {
        self.get_json(STARTUPS_PATH).await
    }

    async fn list_investors(&self) -> Result<Vec<InvestorProfile>> {
        self.get_json(INVESTORS_PATH).await
    }

    async fn create_startup(&self, payload: &NewStartup) -> Result<CreatedRecord> {
        self.post_json(STARTUPS_PATH, payload).await
    }

    async fn create_investor(&self, payload: &NewInvestor) -> Result<CreatedRecord> {
        self.post_json(INVESTORS_PATH, payload).await
    }

    async fn run_match_query(&self, query: &MatchQuery) -> Result<Vec<MatchResult>> {
        self.post_json(MATCHMAKING_PATH, query).await
    }

    async fn exchange_identity(&self, id_token: &str) -> Result<AuthResponse> {
        let body = IdTokenRequest {
            id_token: id_token.to_string(),
        };
        self.post_json(GOOGLE_AUTH_PATH, &body).await
    }
}
