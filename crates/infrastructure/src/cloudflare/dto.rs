use ferrous_dnsmap_domain::{DnsRecord, RecordType, Zone};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub errors: Vec<ApiMessage>,

    pub result: Option<T>,

    pub result_info: Option<ResultInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub code: Option<i64>,

    #[serde(default)]
    pub message: String,
}

impl std::fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultInfo {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub total_pages: Option<u32>,
    pub count: Option<u32>,
    pub total_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneDto {
    pub id: String,
    pub name: String,
}

impl From<ZoneDto> for Zone {
    fn from(dto: ZoneDto) -> Self {
        Zone::new(&dto.id, &dto.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecordDto {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    #[serde(default)]
    pub content: Option<String>,

    /// Cloudflare reports MX/SRV priority outside of `content`.
    #[serde(default)]
    pub priority: Option<u16>,
}

impl From<DnsRecordDto> for DnsRecord {
    fn from(dto: DnsRecordDto) -> Self {
        let record_type = RecordType::parse(&dto.record_type);
        let content = with_priority(&record_type, dto.content.unwrap_or_default(), dto.priority);
        DnsRecord::new(&dto.name, record_type, content)
    }
}

/// Prepends the priority when `content` lacks it, so MX reads
/// `priority host` and SRV reads `priority weight port target`.
fn with_priority(record_type: &RecordType, content: String, priority: Option<u16>) -> String {
    let expected_without_priority = match record_type {
        RecordType::MX => 1,
        RecordType::SRV => 3,
        _ => return content,
    };
    match priority {
        Some(priority) if content.split_whitespace().count() == expected_without_priority => {
            format!("{} {}", priority, content.trim())
        }
        _ => content,
    }
}
