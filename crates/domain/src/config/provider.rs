use serde::{Deserialize, Serialize};

pub const CLOUDFLARE_API_URL: &str = "https://api.cloudflare.com/client/v4";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Bearer token with read access to zones and DNS records
    #[serde(default)]
    pub api_token: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_zones_per_page")]
    pub zones_per_page: u32,

    #[serde(default = "default_records_per_page")]
    pub records_per_page: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: default_base_url(),
            zones_per_page: default_zones_per_page(),
            records_per_page: default_records_per_page(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    CLOUDFLARE_API_URL.to_string()
}

fn default_zones_per_page() -> u32 {
    50
}

fn default_records_per_page() -> u32 {
    100
}

fn default_request_timeout() -> u64 {
    30
}
