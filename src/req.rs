use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    consts::{AUTH_SEGMENT, SIGNATURE_PATH_PREFIX},
    helpers::{join_path, next_nonce},
    prelude::*,
    signature::Credentials,
    BaseUrl, Error,
};

/// Default timeout applied by [`HttpClient`]
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Body sent on authenticated requests that carry no payload.
const EMPTY_BODY: &[u8] = b"{}";

/// Permission scope of an authenticated endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Read,
    Write,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Read => "r",
            Permission::Write => "w",
        }
    }
}

/// A request ready to be executed: endpoint, body and auth headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedRequest {
    pub permission: Permission,
    /// Endpoint path relative to the authenticated API root, e.g. `orders/tBTCUSD`.
    pub path: String,
    pub body: Vec<u8>,
    pub headers: Vec<(String, String)>,
}

impl AuthenticatedRequest {
    pub fn new(permission: Permission, path: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            permission,
            path: path.into(),
            body,
            headers: Vec::new(),
        }
    }

    /// Path including the `auth/{r|w}` prefix, as it appears in the URL.
    pub fn auth_path(&self) -> String {
        join_path(&[AUTH_SEGMENT, self.permission.as_str(), &self.path])
    }

    pub fn body_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.body).map_err(|e| Error::json_parse(e.to_string()))
    }
}

/// Builds signed requests and executes them.
///
/// The order service only talks to the venue through this trait, so tests and
/// alternative transports can substitute their own implementation.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Build a signed request with an empty JSON object body.
    fn new_authenticated_request(
        &self,
        permission: Permission,
        path: &str,
    ) -> Result<AuthenticatedRequest> {
        self.new_authenticated_request_with_body(permission, path, EMPTY_BODY.to_vec())
    }

    fn new_authenticated_request_with_body(
        &self,
        permission: Permission,
        path: &str,
        body: Vec<u8>,
    ) -> Result<AuthenticatedRequest>;

    /// Execute the request, returning the raw response body.
    async fn execute(&self, request: AuthenticatedRequest) -> Result<Vec<u8>>;
}

#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    pub base_url: BaseUrl,
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::Production,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Venue error body: `["error", code, message]`
#[derive(Deserialize, Debug)]
struct ErrorData(String, Option<i64>, String);

#[derive(Debug)]
pub struct HttpClient {
    pub client: Client,
    pub base_url: String,
    credentials: Credentials,
}

async fn parse_response(response: Response) -> Result<Vec<u8>> {
    let status_code = response.status().as_u16();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::GenericRequest(e.to_string()))?;

    if status_code < 400 {
        return Ok(bytes.to_vec());
    }
    let text = String::from_utf8_lossy(&bytes).into_owned();
    warn!(status = status_code, "Authenticated request failed");

    if (400..500).contains(&status_code) {
        let client_error = match serde_json::from_str::<ErrorData>(&text) {
            Ok(ErrorData(_, code, msg)) => Error::ClientRequest {
                status_code,
                error_code: code,
                error_message: msg,
            },
            Err(_) => Error::ClientRequest {
                status_code,
                error_code: None,
                error_message: text,
            },
        };
        return Err(client_error);
    }

    Err(Error::ServerRequest {
        status_code,
        error_message: text,
    })
}

impl HttpClient {
    pub fn new(credentials: Credentials, config: HttpClientConfig) -> Result<HttpClient> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Configuration(e.to_string()))?;
        Ok(Self::with_client(client, credentials, config.base_url))
    }

    pub fn with_client(client: Client, credentials: Credentials, base_url: BaseUrl) -> HttpClient {
        HttpClient {
            client,
            base_url: base_url.get_url(),
            credentials,
        }
    }

    fn url_for(&self, request: &AuthenticatedRequest) -> String {
        format!("{}{}", self.base_url, request.auth_path())
    }
}

#[async_trait]
impl RequestExecutor for HttpClient {
    fn new_authenticated_request_with_body(
        &self,
        permission: Permission,
        path: &str,
        body: Vec<u8>,
    ) -> Result<AuthenticatedRequest> {
        let mut request = AuthenticatedRequest::new(permission, path, body);
        let nonce = next_nonce().to_string();
        let payload = format!(
            "{SIGNATURE_PATH_PREFIX}{}{nonce}{}",
            request.auth_path(),
            request.body_str()?
        );
        let signature = self.credentials.sign(&payload)?;

        request.headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("bfx-nonce".to_string(), nonce),
            ("bfx-apikey".to_string(), self.credentials.api_key.clone()),
            ("bfx-signature".to_string(), signature),
        ];
        Ok(request)
    }

    async fn execute(&self, request: AuthenticatedRequest) -> Result<Vec<u8>> {
        let url = self.url_for(&request);
        debug!(
            path = %request.path,
            permission = request.permission.as_str(),
            "Sending authenticated request"
        );

        let mut builder = self.client.post(&url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|e| Error::GenericRequest(e.to_string()))?;

        parse_response(response).await
    }
}
