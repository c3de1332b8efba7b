//! Priority-ordered camera modes

use tether_assets::{CameraSettings, SettingsCatalog};
use tracing::{debug, warn};

use crate::rig::{CameraRig, DEFAULT_TARGET_DISTANCE};

/// A named activation of a settings record
#[derive(Debug, Clone, PartialEq)]
pub struct ModeEntry {
    pub priority: i32,
    pub mode: String,
    pub settings: CameraSettings,
}

/// Ordered camera modes; the last entry is the active one.
///
/// Entries are kept sorted by priority, with entries of equal priority in the
/// order they were added, so the most recently added mode of the highest
/// priority wins.
pub struct ModeStack {
    catalog: SettingsCatalog,
    entries: Vec<ModeEntry>,
}

impl ModeStack {
    /// Mode seeded at construction so the stack is never empty
    pub const DEFAULT_MODE: &'static str = "default";
    /// Priority of the seeded default mode
    pub const DEFAULT_MODE_PRIORITY: i32 = -1;

    /// Create a stack over a catalog, seeded with the default mode
    pub fn new(catalog: SettingsCatalog) -> Self {
        let mut stack = Self {
            catalog,
            entries: Vec::new(),
        };
        stack.seed_default();
        stack
    }

    fn seed_default(&mut self) {
        let settings = match self.catalog.get(Self::DEFAULT_MODE) {
            Some(settings) => settings.clone(),
            None => {
                warn!(
                    "Camera settings '{}' missing from catalog, using built-in fallback",
                    Self::DEFAULT_MODE
                );
                CameraSettings::new(Self::DEFAULT_MODE, 0.0, 0.0, DEFAULT_TARGET_DISTANCE)
            }
        };

        self.entries.push(ModeEntry {
            priority: Self::DEFAULT_MODE_PRIORITY,
            mode: Self::DEFAULT_MODE.to_string(),
            settings,
        });
    }

    /// Add a mode at the given priority.
    ///
    /// Unknown modes are logged and ignored. Returns whether an entry was added.
    pub fn add_mode(&mut self, mode: &str, priority: i32) -> bool {
        let Some(settings) = self.catalog.get(mode) else {
            warn!("Attempted to add camera mode '{}' but it does not exist.", mode);
            return false;
        };

        let index = self.insert_index(priority);
        self.entries.insert(
            index,
            ModeEntry {
                priority,
                mode: mode.to_string(),
                settings: settings.clone(),
            },
        );

        debug!("Camera mode '{}' added at priority {}", mode, priority);
        true
    }

    /// Remove every entry of a mode. Returns how many entries were removed.
    ///
    /// Removing the last remaining entry re-seeds the default mode.
    pub fn remove_mode(&mut self, mode: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.mode != mode);
        let removed = before - self.entries.len();

        if removed == 0 {
            warn!("Attempted to remove camera mode '{}' not present in settings.", mode);
        }

        if self.entries.is_empty() {
            debug!("Camera mode stack emptied, restoring '{}'", Self::DEFAULT_MODE);
            self.seed_default();
        }

        removed
    }

    /// Position after the last entry whose priority does not exceed `priority`
    fn insert_index(&self, priority: i32) -> usize {
        self.entries
            .iter()
            .rposition(|entry| entry.priority <= priority)
            .map_or(0, |i| i + 1)
    }

    /// The winning entry
    pub fn active(&self) -> &ModeEntry {
        // Never empty: seeded on construction and re-seeded on removal
        &self.entries[self.entries.len() - 1]
    }

    /// Settings of the winning entry
    pub fn active_settings(&self) -> &CameraSettings {
        &self.active().settings
    }

    /// Push the winning settings into a rig
    pub fn apply_to(&self, rig: &mut CameraRig) {
        let settings = self.active_settings();

        rig.set_horizontal_offset(settings.horizontal_offset);
        rig.set_vertical_offset(settings.vertical_offset);
        rig.set_target_distance(settings.target_distance);
    }

    /// All entries, lowest priority first
    pub fn entries(&self) -> &[ModeEntry] {
        &self.entries
    }

    pub fn catalog(&self) -> &SettingsCatalog {
        &self.catalog
    }
}
