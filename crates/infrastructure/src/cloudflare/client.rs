use async_trait::async_trait;
use ferrous_dnsmap_application::ports::DnsRecordProvider;
use ferrous_dnsmap_domain::config::ProviderConfig;
use ferrous_dnsmap_domain::{DnsRecord, DomainError, Zone};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::dto::{ApiEnvelope, ApiMessage, DnsRecordDto, ZoneDto};

/// Cloudflare API v4 client listing zones and DNS records.
pub struct CloudflareClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    zones_per_page: u32,
    records_per_page: u32,
}

impl CloudflareClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.request_timeout))
            .user_agent(concat!("ferrous-dnsmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::ProviderRequest(format!("HTTP client setup: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            zones_per_page: config.zones_per_page,
            records_per_page: config.records_per_page,
        })
    }

    /// Collects every page of a listing endpoint.
    ///
    /// A `success: false` envelope ends the listing early; whatever was
    /// gathered before it is kept.
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        per_page: u32,
    ) -> Result<Vec<T>, DomainError> {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let envelope: ApiEnvelope<Vec<T>> = self.get_page(endpoint, page, per_page).await?;

            if !envelope.success {
                error!(
                    endpoint,
                    page,
                    errors = %join_messages(&envelope.errors),
                    "Provider reported an unsuccessful response"
                );
                break;
            }

            let batch = envelope.result.unwrap_or_default();
            debug!(endpoint, page, count = batch.len(), "Fetched page");
            items.extend(batch);

            let total_pages = envelope
                .result_info
                .as_ref()
                .and_then(|info| info.total_pages)
                .unwrap_or(1);
            if page >= total_pages {
                break;
            }
            page += 1;
        }

        Ok(items)
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ApiEnvelope<T>, DomainError> {
        let url = format!(
            "{}{}?page={}&per_page={}",
            self.base_url, endpoint, page, per_page
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::ProviderRequest(format!("GET {}: {}", endpoint, e)))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            DomainError::ProviderRequest(format!("reading body of {}: {}", endpoint, e))
        })?;

        if !status.is_success() {
            return Err(DomainError::ProviderHttp {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            DomainError::InvalidProviderResponse(format!("{} (page {}): {}", endpoint, page, e))
        })
    }
}

fn join_messages(messages: &[ApiMessage]) -> String {
    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[async_trait]
impl DnsRecordProvider for CloudflareClient {
    #[instrument(skip(self))]
    async fn list_zones(&self) -> Result<Vec<Zone>, DomainError> {
        let zones: Vec<ZoneDto> = self.fetch_all("/zones", self.zones_per_page).await?;
        Ok(zones.into_iter().map(Zone::from).collect())
    }

    #[instrument(skip(self, zone), fields(zone = %zone.name))]
    async fn list_records(&self, zone: &Zone) -> Result<Vec<DnsRecord>, DomainError> {
        let endpoint = format!("/zones/{}/dns_records", zone.id);
        let records: Vec<DnsRecordDto> = self.fetch_all(&endpoint, self.records_per_page).await?;
        Ok(records.into_iter().map(DnsRecord::from).collect())
    }
}
