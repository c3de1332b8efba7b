use std::collections::HashMap;

use tracing::warn;

use crate::settings::CameraSettings;

/// Every known camera settings record, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct SettingsCatalog {
    settings: HashMap<String, CameraSettings>,
}

impl SettingsCatalog {
    /// Build a catalog from records in load order.
    ///
    /// A name seen twice is logged and the later record replaces the earlier one.
    pub fn from_records(records: impl IntoIterator<Item = CameraSettings>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Insert a record, replacing (with a warning) any record of the same name
    pub fn insert(&mut self, record: CameraSettings) {
        if let Some(existing) = self.settings.get(&record.name) {
            warn!(
                "Duplicate camera setting '{}' found. First entry: '{}'. Second entry: '{}'. Using second.",
                record.name,
                existing.source_display(),
                record.source_display()
            );
        }
        self.settings.insert(record.name.clone(), record);
    }

    pub fn get(&self, name: &str) -> Option<&CameraSettings> {
        self.settings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.settings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Known names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.settings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<CameraSettings> for SettingsCatalog {
    fn from_iter<I: IntoIterator<Item = CameraSettings>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
