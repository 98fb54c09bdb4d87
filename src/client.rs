//! Terminal client for the service's `/hello` route.
//!
//! [`HelloClient`] performs the request; [`HelloView`] keeps whatever was last
//! fetched successfully so a failed call never clears what is on screen.

use std::time::Duration;

use tracing::{debug, error, instrument};
use url::Url;

use crate::config::Config;
use crate::error::ClientError;
use crate::metrics::{inc_client_failures, inc_client_requests};
use crate::types::GreetingResponse;

/// HTTP client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct HelloClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HelloClient {
    /// Create a client for the given base URL, e.g. `http://localhost:8787`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::UnsupportedScheme(base_url.scheme().to_string()));
        }
        // Keep any path prefix when joining route names.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(2))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Create a client for `SERVER_URL`.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(&config.server_url)
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue one `GET /hello`.
    #[instrument(skip(self), fields(base = %self.base_url))]
    pub async fn fetch_hello(&self) -> Result<GreetingResponse, ClientError> {
        inc_client_requests();
        let url = self.base_url.join("hello")?;

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let body = response.json::<GreetingResponse>().await?;
        debug!(message = %body.message, "received greeting");
        Ok(body)
    }
}

/// What the client currently displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelloView {
    data: Option<GreetingResponse>,
}

impl HelloView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successfully fetched greeting.
    pub fn data(&self) -> Option<&GreetingResponse> {
        self.data.as_ref()
    }

    /// Fetch once and update the display. On failure the error is logged and
    /// the previous value is kept.
    pub async fn refresh(&mut self, client: &HelloClient) -> bool {
        match client.fetch_hello().await {
            Ok(body) => {
                self.data = Some(body);
                true
            }
            Err(e) => {
                inc_client_failures();
                error!("Error fetching data: {}", e);
                false
            }
        }
    }

    /// Text form of the current display; empty until something is fetched.
    pub fn render(&self) -> String {
        match &self.data {
            Some(data) => format!("Message: {}\nSuccess: {}", data.message, data.success),
            None => String::new(),
        }
    }
}
