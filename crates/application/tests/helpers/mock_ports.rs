#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_dnsmap_application::ports::{DnsRecordProvider, HierarchyWriter};
use ferrous_dnsmap_domain::{DnsRecord, DomainError, Zone};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockDnsRecordProvider {
    zones: Arc<Mutex<Vec<Zone>>>,
    records: Arc<Mutex<HashMap<String, Vec<DnsRecord>>>>,
    failing_zone: Arc<Mutex<Option<String>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockDnsRecordProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_zone(&self, zone: Zone, records: Vec<DnsRecord>) {
        self.records
            .lock()
            .unwrap()
            .insert(zone.id.to_string(), records);
        self.zones.lock().unwrap().push(zone);
    }

    pub fn fail_on_zone(&self, zone_id: &str) {
        *self.failing_zone.lock().unwrap() = Some(zone_id.to_string());
    }

    pub fn requested_zones(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsRecordProvider for MockDnsRecordProvider {
    async fn list_zones(&self) -> Result<Vec<Zone>, DomainError> {
        Ok(self.zones.lock().unwrap().clone())
    }

    async fn list_records(&self, zone: &Zone) -> Result<Vec<DnsRecord>, DomainError> {
        self.requested.lock().unwrap().push(zone.id.to_string());

        if self.failing_zone.lock().unwrap().as_deref() == Some(zone.id.as_ref()) {
            return Err(DomainError::ProviderHttp {
                status: 403,
                body: "Authentication error".to_string(),
            });
        }

        Ok(self
            .records
            .lock()
            .unwrap()
            .get(zone.id.as_ref())
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Clone, Default)]
pub struct MockHierarchyWriter {
    written: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockHierarchyWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl HierarchyWriter for MockHierarchyWriter {
    async fn write(&self, document: &str) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::OutputError {
                destination: self.destination(),
                reason: "disk full".to_string(),
            });
        }
        self.written.lock().unwrap().push(document.to_string());
        Ok(())
    }

    fn destination(&self) -> String {
        "memory".to_string()
    }
}
