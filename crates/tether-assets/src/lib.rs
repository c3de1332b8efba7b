//! Tether Assets - Camera settings records and catalog loading
//!
//! Settings records are small immutable bundles of offsets and distance, looked
//! up by name. They are loaded from TOML or JSON files once at startup and handed
//! to the mode stack as an owned [`SettingsCatalog`].

mod catalog;
mod error;
mod loader;
mod settings;

pub use catalog::SettingsCatalog;
pub use error::AssetError;
pub use loader::CatalogLoader;
pub use settings::CameraSettings;
