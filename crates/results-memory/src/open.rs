use hunt_core::{ServiceRecord, VulnerabilityRecord};
use parking_lot::Mutex;

use crate::models::HunterRegistry;

/// Shared result store for one scan.
///
/// Services, vulnerabilities and hunters each sit behind their own lock, so
/// writers to one collection never wait on another. Build one per scan and
/// hand it out as `Arc<Collector>`.
#[derive(Debug, Default)]
pub struct Collector {
    pub(crate) services: Mutex<Vec<ServiceRecord>>,
    pub(crate) vulnerabilities: Mutex<Vec<VulnerabilityRecord>>,
    pub(crate) hunters: Mutex<HunterRegistry>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }
}
