//! Cloudflare API v4 record source.
//!
//! Zones and DNS records are listed page by page:
//! ```text
//! GET {base_url}/zones?page=N&per_page=50
//! GET {base_url}/zones/{zone_id}/dns_records?page=N&per_page=100
//! Authorization: Bearer <token>
//! ```
//! Every response is wrapped in the v4 envelope
//! (`success`, `errors`, `result`, `result_info`).

pub mod client;
pub mod dto;

pub use client::CloudflareClient;
