use hunt_core::{HunterInfo, RecordError, ServiceRecord, VulnerabilityRecord};
use tracing::{debug, warn};

use crate::Collector;

impl Collector {
    /// Append a discovered service. Duplicates are kept; nodes are deduplicated at report time.
    pub fn add_service(&self, record: ServiceRecord) -> Result<(), RecordError> {
        if let Err(e) = record.validate() {
            warn!(error = %e, "rejected service record");
            return Err(e);
        }
        debug!(host = %record.host, port = record.port, service = %record.name, "service added");
        self.services.lock().push(record);
        Ok(())
    }

    /// Append a finding and credit it to the hunter that raised it.
    pub fn add_vulnerability(&self, record: VulnerabilityRecord) -> Result<(), RecordError> {
        if let Err(e) = record.validate() {
            warn!(error = %e, "rejected vulnerability record");
            return Err(e);
        }
        debug!(id = %record.id, name = %record.name, "vulnerability added");
        let hunter = record.hunter.clone();
        self.vulnerabilities.lock().push(record);

        // The hunters lock is taken only after the vulnerabilities lock is released.
        if let Some(name) = hunter {
            if !self.hunters.lock().bump(&name) {
                warn!(hunter = %name, "vulnerability credited to unregistered hunter");
            }
        }
        Ok(())
    }

    /// Register a hunter once; later registrations under the same name are ignored.
    pub fn register_hunter(&self, info: HunterInfo) -> Result<(), RecordError> {
        info.validate()?;
        let name = info.name.clone();
        if self.hunters.lock().register(info) {
            debug!(hunter = %name, "hunter registered");
        }
        Ok(())
    }
}
