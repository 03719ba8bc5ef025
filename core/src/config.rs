use serde::Deserialize;

/// Options the plain reporter consults when choosing sections.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Only map the cluster: print nodes and nothing else.
    pub mapping: bool,
    /// Append per-hunter statistics.
    pub statistics: bool,
}
