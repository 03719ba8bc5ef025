//! Plain-text scan report: nodes, services, vulnerabilities and hunter statistics as tables.

use std::sync::Arc;

use hunt_core::ReportConfig;
use results_memory::Collector;
use tracing::debug;

pub mod sections;
pub mod table;

pub use sections::{EVIDENCE_PREVIEW, KB_LINK};
pub use table::{Table, MAX_TABLE_WIDTH};

pub const NO_VULNERABILITIES: &str = "\nNo vulnerabilities were found";
pub const NO_HUNTERS: &str = "\nNo hunters were found";
pub const NO_CLUSTERS: &str = "\nKube Hunter couldn't find any clusters";

const VULNERABILITIES_HINT: &str =
    "For further information about a vulnerability, search its ID in: ";

/// Turns the collected scan state into a report.
pub trait Reporter: Send + Sync {
    fn get_report(&self, config: &ReportConfig) -> String;
}

/// Renders the report as nested text tables.
///
/// Section choice uses counts read up front; each table then takes its own
/// snapshot, so a table may show findings added after the counts were read.
pub struct PlainReporter {
    collector: Arc<Collector>,
}

impl PlainReporter {
    pub fn new(collector: Arc<Collector>) -> Self {
        PlainReporter { collector }
    }

    pub fn nodes_section(&self) -> String {
        let services = self.collector.snapshot_services();
        format!("\nNodes\n{}\n", sections::nodes_table(&services).render())
    }

    pub fn services_section(&self) -> String {
        let services = self.collector.snapshot_services();
        format!("\nDetected Services\n{}\n", sections::services_table(&services).render())
    }

    pub fn vulnerabilities_section(&self) -> String {
        let vulnerabilities = self.collector.snapshot_vulnerabilities();
        format!(
            "\nVulnerabilities\n{}\n{}\n{}\n",
            VULNERABILITIES_HINT,
            KB_LINK,
            sections::vulnerabilities_table(&vulnerabilities).render()
        )
    }

    pub fn hunters_section(&self) -> String {
        let stats = self.collector.hunter_statistics();
        format!("\nHunter Statistics\n{}\n", sections::hunters_table(&stats).render())
    }
}

impl Reporter for PlainReporter {
    fn get_report(&self, config: &ReportConfig) -> String {
        let vulnerabilities = self.collector.count_vulnerabilities();
        let hunters = self.collector.count_hunters();
        let services = self.collector.count_services();
        debug!(services, vulnerabilities, hunters, ?config, "building plain report");

        let mut output = String::new();
        if services > 0 {
            output += &self.nodes_section();
            if !config.mapping {
                output += &self.services_section();
                if vulnerabilities > 0 {
                    output += &self.vulnerabilities_section();
                } else {
                    output += NO_VULNERABILITIES;
                }
                if config.statistics {
                    if hunters > 0 {
                        output += &self.hunters_section();
                    } else {
                        output += NO_HUNTERS;
                    }
                }
            }
        } else {
            if vulnerabilities > 0 {
                output += &self.vulnerabilities_section();
            }
            output += NO_CLUSTERS;
        }
        output
    }
}
