#![allow(dead_code)]
use ferrous_dnsmap_domain::{DnsRecord, RecordType};

pub struct DnsRecordBuilder {
    name: String,
    record_type: RecordType,
    content: String,
}

impl DnsRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            record_type: RecordType::A,
            content: "192.0.2.1".to_string(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn build(self) -> DnsRecord {
        DnsRecord::new(&self.name, self.record_type, self.content)
    }
}

impl Default for DnsRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn a(name: &str, ip: &str) -> DnsRecord {
    DnsRecord::new(name, RecordType::A, ip)
}

pub fn aaaa(name: &str, ip: &str) -> DnsRecord {
    DnsRecord::new(name, RecordType::AAAA, ip)
}

pub fn cname(name: &str, target: &str) -> DnsRecord {
    DnsRecord::new(name, RecordType::CNAME, target)
}

pub fn mx(name: &str, content: &str) -> DnsRecord {
    DnsRecord::new(name, RecordType::MX, content)
}

pub fn srv(name: &str, content: &str) -> DnsRecord {
    DnsRecord::new(name, RecordType::SRV, content)
}

pub fn txt(name: &str, content: &str) -> DnsRecord {
    DnsRecord::new(name, RecordType::TXT, content)
}
