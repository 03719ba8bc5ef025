use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::RecordError;

/// Opaque identifier shared by every service found through the same discovery event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    /// A new, time-ordered id for a discovery event nobody has named yet.
    pub fn fresh() -> Self {
        EventId(Uuid::now_v7().to_string())
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub event_id: EventId,
    pub host: String,
    pub port: u16,
    /// Path below the service root; empty when the service has none.
    pub path: String,
    pub name: String,
    pub description: String,
}

impl ServiceRecord {
    pub fn validate(&self) -> Result<(), RecordError> {
        let missing = |field| RecordError::MissingField { record: "service", field };
        if self.event_id.0.trim().is_empty() {
            return Err(missing("event_id"));
        }
        if self.host.trim().is_empty() {
            return Err(missing("host"));
        }
        if self.name.trim().is_empty() {
            return Err(missing("name"));
        }
        if self.port == 0 {
            return Err(RecordError::InvalidPort { host: self.host.clone() });
        }
        Ok(())
    }

    /// `host:port` followed by the path, which always starts with `/` when present.
    ///
    /// The path is trimmed, and a path that already starts with `/` keeps a single
    /// slash instead of being rendered as `host:port//path`.
    pub fn location(&self) -> String {
        let path = self.path.trim();
        if path.is_empty() {
            format!("{}:{}", self.host, self.port)
        } else if path.starts_with('/') {
            format!("{}:{}{}", self.host, self.port, path)
        } else {
            format!("{}:{}/{}", self.host, self.port, path)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilityRecord {
    pub id: String,
    pub location: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub evidence: String,
    /// Name of the hunter that raised the finding, if known.
    pub hunter: Option<String>,
}

impl VulnerabilityRecord {
    pub fn validate(&self) -> Result<(), RecordError> {
        let missing = |field| RecordError::MissingField { record: "vulnerability", field };
        if self.name.trim().is_empty() {
            return Err(missing("name"));
        }
        if self.category.trim().is_empty() {
            return Err(missing("category"));
        }
        Ok(())
    }
}

/// Discovery hunters only map the cluster and are left out of the statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HunterKind {
    Discovery,
    Passive,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunterInfo {
    pub name: String,
    pub description: String,
    pub kind: HunterKind,
}

impl HunterInfo {
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::MissingField { record: "hunter", field: "name" });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunterStat {
    pub name: String,
    pub description: String,
    pub vulnerability_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(path: &str) -> ServiceRecord {
        ServiceRecord {
            event_id: "e1".into(),
            host: "10.0.0.1".into(),
            port: 10250,
            path: path.into(),
            name: "Kubelet API".into(),
            description: String::new(),
        }
    }

    #[test]
    fn location_with_and_without_path() {
        assert_eq!(service("").location(), "10.0.0.1:10250");
        assert_eq!(service("pods").location(), "10.0.0.1:10250/pods");
        assert_eq!(service("/pods").location(), "10.0.0.1:10250/pods");
    }

    #[test]
    fn location_keeps_a_single_leading_slash() {
        assert_eq!(service(" /api/v1 ").location(), "10.0.0.1:10250/api/v1");
        assert_eq!(service("   ").location(), "10.0.0.1:10250");
    }

    #[test]
    fn rejects_incomplete_service() {
        let mut s = service("");
        s.host = " ".into();
        let missing_host = RecordError::MissingField { record: "service", field: "host" };
        assert_eq!(s.validate(), Err(missing_host));
        let mut s = service("");
        s.port = 0;
        assert!(matches!(s.validate(), Err(RecordError::InvalidPort { .. })));
        assert!(service("").validate().is_ok());
    }

    #[test]
    fn rejects_vulnerability_without_category() {
        let v = VulnerabilityRecord {
            id: "KHV002".into(),
            location: "10.0.0.1:6443".into(),
            category: String::new(),
            name: "K8s Version Disclosure".into(),
            description: String::new(),
            evidence: String::new(),
            hunter: None,
        };
        let missing = RecordError::MissingField { record: "vulnerability", field: "category" };
        assert_eq!(v.validate(), Err(missing));
    }

    #[test]
    fn fresh_event_ids_differ() {
        assert_ne!(EventId::fresh(), EventId::fresh());
    }
}
