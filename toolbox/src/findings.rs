//! Findings documents replayed into the collector, one task per hunter.
//!
//! Record fields are all optional at parse time: an incomplete record still loads
//! and is then refused by the collector, so one bad entry never sinks the file.

use anyhow::{Context, Result};
use hunt_core::{EventId, HunterInfo, HunterKind, ServiceRecord, VulnerabilityRecord};
use results_memory::Collector;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct Findings {
    #[serde(default)]
    pub hunters: Vec<HunterFindings>,
}

#[derive(Debug, Deserialize)]
pub struct HunterFindings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: HunterKind,
    #[serde(default)]
    pub services: Vec<ServiceInput>,
    #[serde(default)]
    pub vulnerabilities: Vec<VulnerabilityInput>,
}

/// A service as written in the findings file; `event_id` may be left out.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceInput {
    pub event_id: Option<EventId>,
    pub host: String,
    /// Left out means 0, which the collector refuses.
    pub port: u16,
    pub path: String,
    pub name: String,
    pub description: String,
}

impl ServiceInput {
    /// Services without an event id count as their own discovery event.
    pub fn into_record(self) -> ServiceRecord {
        ServiceRecord {
            event_id: self.event_id.unwrap_or_else(EventId::fresh),
            host: self.host,
            port: self.port,
            path: self.path,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VulnerabilityInput {
    pub id: String,
    pub location: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub evidence: String,
    pub hunter: Option<String>,
}

impl VulnerabilityInput {
    /// Findings that name no hunter are credited to the one publishing them.
    pub fn into_record(self, publisher: &str) -> VulnerabilityRecord {
        VulnerabilityRecord {
            id: self.id,
            location: self.location,
            category: self.category,
            name: self.name,
            description: self.description,
            evidence: self.evidence,
            hunter: Some(self.hunter.unwrap_or_else(|| publisher.to_string())),
        }
    }
}

impl HunterFindings {
    pub fn info(&self) -> HunterInfo {
        HunterInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            kind: self.kind,
        }
    }
}

/// YAML unless the file ends in `.json`.
pub fn load_findings(path: &Path) -> Result<Findings> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading findings {}", path.display()))?;
    let is_json = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let findings = if is_json {
        serde_json::from_str(&s)
            .with_context(|| format!("parsing JSON findings {}", path.display()))?
    } else {
        serde_yaml::from_str(&s)
            .with_context(|| format!("parsing YAML findings {}", path.display()))?
    };
    Ok(findings)
}

/// Publish one hunter's findings. Returns how many records the collector refused.
pub fn publish(collector: &Collector, hunter: HunterFindings) -> usize {
    let mut rejected = 0;
    for service in hunter.services {
        if collector.add_service(service.into_record()).is_err() {
            rejected += 1;
        }
    }
    for vuln in hunter.vulnerabilities {
        if collector.add_vulnerability(vuln.into_record(&hunter.name)).is_err() {
            rejected += 1;
        }
    }
    if rejected > 0 {
        warn!(hunter = %hunter.name, rejected, "some findings were rejected");
    }
    rejected
}
