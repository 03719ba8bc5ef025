use std::collections::HashSet;

use hunt_core::{HunterStat, ServiceRecord, VulnerabilityRecord};

use crate::table::Table;

/// Longest evidence shown before it is cut and marked with `...`.
pub const EVIDENCE_PREVIEW: usize = 40;
pub const KB_LINK: &str = "https://github.com/aquasecurity/kube-hunter/tree/master/docs/kb";

const NODE_TYPE: &str = "Node/Master";

/// One row per discovery event, located at the host of its first service.
pub fn nodes_table(services: &[ServiceRecord]) -> Table {
    let mut table = Table::new(["Type", "Location"]).sort_by("Type");
    let mut seen = HashSet::new();
    for service in services {
        if seen.insert(&service.event_id) {
            table.add_row([NODE_TYPE.to_string(), service.host.clone()]);
        }
    }
    table
}

pub fn services_table(services: &[ServiceRecord]) -> Table {
    let mut table = Table::new(["Service", "Location", "Description"]).sort_by("Service");
    for service in services {
        table.add_row([service.name.clone(), service.location(), service.description.clone()]);
    }
    table
}

pub fn vulnerabilities_table(vulnerabilities: &[VulnerabilityRecord]) -> Table {
    let columns = ["ID", "Location", "Category", "Vulnerability", "Description", "Evidence"];
    let mut table = Table::new(columns).sort_by("Category");
    for v in vulnerabilities {
        table.add_row([
            v.id.clone(),
            v.location.clone(),
            v.category.clone(),
            v.name.clone(),
            v.description.clone(),
            evidence_preview(&v.evidence),
        ]);
    }
    table
}

pub fn hunters_table(stats: &[HunterStat]) -> Table {
    let mut table = Table::new(["Name", "Description", "Vulnerabilities"]).sort_by("Name");
    for s in stats {
        table.add_row([s.name.clone(), s.description.clone(), s.vulnerability_count.to_string()]);
    }
    table
}

/// First `EVIDENCE_PREVIEW` characters followed by `...`, or the evidence itself when short enough.
pub fn evidence_preview(evidence: &str) -> String {
    if evidence.chars().count() > EVIDENCE_PREVIEW {
        let mut s: String = evidence.chars().take(EVIDENCE_PREVIEW).collect();
        s.push_str("...");
        s
    } else {
        evidence.to_string()
    }
}
