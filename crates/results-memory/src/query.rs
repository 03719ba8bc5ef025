use hunt_core::{HunterStat, ServiceRecord, VulnerabilityRecord};

use crate::Collector;

// Counts and snapshots lock separately: a count taken before a snapshot may be
// smaller than the snapshot while hunters are still writing.
impl Collector {
    /// Frozen copy of the services found so far.
    pub fn snapshot_services(&self) -> Vec<ServiceRecord> {
        self.services.lock().clone()
    }

    pub fn snapshot_vulnerabilities(&self) -> Vec<VulnerabilityRecord> {
        self.vulnerabilities.lock().clone()
    }

    pub fn count_services(&self) -> usize {
        self.services.lock().len()
    }

    pub fn count_vulnerabilities(&self) -> usize {
        self.vulnerabilities.lock().len()
    }

    /// Number of registered hunters of every kind.
    pub fn count_hunters(&self) -> usize {
        self.hunters.lock().len()
    }

    /// Published-vulnerability counts for passive and active hunters, in registration order.
    pub fn hunter_statistics(&self) -> Vec<HunterStat> {
        self.hunters.lock().stats()
    }
}
