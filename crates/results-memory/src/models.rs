use std::collections::HashMap;

use hunt_core::{HunterInfo, HunterKind, HunterStat};

#[derive(Debug)]
pub(crate) struct HunterEntry {
    pub info: HunterInfo,
    pub published: usize,
}

/// Registered hunters in registration order, with a name index.
#[derive(Debug, Default)]
pub(crate) struct HunterRegistry {
    entries: Vec<HunterEntry>,
    by_name: HashMap<String, usize>,
}

impl HunterRegistry {
    /// Returns false when a hunter with that name is already known.
    pub fn register(&mut self, info: HunterInfo) -> bool {
        if self.by_name.contains_key(&info.name) {
            return false;
        }
        self.by_name.insert(info.name.clone(), self.entries.len());
        self.entries.push(HunterEntry { info, published: 0 });
        true
    }

    /// Returns false when no hunter with that name is registered.
    pub fn bump(&mut self, name: &str) -> bool {
        match self.by_name.get(name) {
            Some(&idx) => {
                self.entries[idx].published += 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn stats(&self) -> Vec<HunterStat> {
        self.entries
            .iter()
            .filter(|e| e.info.kind != HunterKind::Discovery)
            .map(|e| HunterStat {
                name: e.info.name.clone(),
                description: e.info.description.clone(),
                vulnerability_count: e.published,
            })
            .collect()
    }
}
