use serde::Deserialize;

/// Endpoint used when no configuration overrides it
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/summarize";

/// Main configuration structure for Article Digest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Summarization backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Address the summarize request is posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout in seconds; transport default when unset
    #[serde(rename = "timeout-secs", default)]
    pub timeout_secs: Option<u64>,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs", default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

/// Client identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Name sent in the User-Agent header
    #[serde(default = "default_client_name")]
    pub name: String,

    /// Version sent in the User-Agent header
    #[serde(default = "default_client_version")]
    pub version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            name: default_client_name(),
            version: default_client_version(),
        }
    }
}

impl ClientConfig {
    /// Formats the User-Agent header value: `Name/Version`
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_client_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_client_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
