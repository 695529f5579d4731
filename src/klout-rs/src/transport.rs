use crate::{ClientConfig, ClientError, Result};
use reqwest::Client as HttpClient;
use reqwest::Url;
use serde_json::Value;
use std::fmt;
use tracing::debug;

pub const API_VERSION: u32 = 1;
pub const API_FORMAT: &str = "json";

/// Turns an endpoint plus query parameters into parsed JSON
///
/// Every request carries the configured API key. Connections are not kept
/// idle between calls, so each `get` opens its own.
#[derive(Clone)]
pub struct Transport {
    client: HttpClient,
    host: String,
    api_key: String,
}

impl Transport {
    /// Validate the host and build an HTTP client that keeps no idle connections
    pub fn new(config: ClientConfig) -> Result<Self> {
        let host = config.host.trim_end_matches('/').to_string();
        Url::parse(&host).map_err(|e| ClientError::InvalidUrl(format!("{host}: {e}")))?;

        let client = HttpClient::builder().pool_max_idle_per_host(0).build()?;

        Ok(Self {
            client,
            host,
            api_key: config.api_key,
        })
    }

    /// Build `/1/{endpoint}.json?{params}&key={key}`
    ///
    /// Pairs are written as raw `k=v` with no percent-encoding, so values such
    /// as `alice,bob` go out verbatim. A value containing `&`, `=` or `#` would
    /// corrupt the query; screen names never do.
    pub fn build_path(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let query = params
            .iter()
            .copied()
            .chain(std::iter::once(("key", self.api_key.as_str())))
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        format!("/{API_VERSION}/{endpoint}.{API_FORMAT}?{query}")
    }

    /// Issue a GET and parse the body of a 200 response as JSON
    pub async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.host, self.build_path(endpoint, params));
        debug!("GET {} {:?}", endpoint, params);

        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if status != 200 {
            debug!("{} returned status {}", endpoint, status);
            return Err(ClientError::Request { status });
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Parse { body, source })
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("host", &self.host)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
