/// Per-client settings: the caller's API key and the host it talks to
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,

    /// Scheme and host of the API, without a trailing path
    pub host: String,
}

fn default_host() -> String {
    "http://api.klout.com".to_string()
}

impl ClientConfig {
    /// Config for the public API host
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: default_host(),
        }
    }

    /// Point the client at another host (e.g. a local mock server)
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}
