use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::SettingsCatalog;
use crate::error::AssetError;
use crate::settings::CameraSettings;

/// Loads camera settings records from a directory tree.
pub struct CatalogLoader {
    base_path: PathBuf,
}

impl CatalogLoader {
    /// Create a loader rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let base_path = base_path.into();
        info!("CatalogLoader created with base path: {}", base_path.display());
        Self { base_path }
    }

    /// Resolve a relative path against the base path.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Load a single `.toml` or `.json` settings file.
    ///
    /// Records without an explicit name are named after the file stem.
    pub fn load_settings(&self, path: &Path) -> Result<CameraSettings, AssetError> {
        let full_path = self.resolve(path);

        if !full_path.exists() {
            return Err(AssetError::NotFound(full_path));
        }

        let content =
            fs::read_to_string(&full_path).map_err(|e| AssetError::Io(full_path.clone(), e))?;

        let mut settings: CameraSettings = match extension(&full_path).as_deref() {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| AssetError::ParseFailed(full_path.clone(), e.to_string()))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| AssetError::ParseFailed(full_path.clone(), e.to_string()))?,
            _ => return Err(AssetError::UnsupportedFormat(full_path)),
        };

        if settings.name.is_empty() {
            settings.name = full_path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
                .ok_or_else(|| AssetError::MissingName(full_path.clone()))?;
        }

        debug!("Loaded camera settings '{}' from {:?}", settings.name, full_path);
        Ok(settings.with_source(full_path))
    }

    /// Load every settings file under the base path into a catalog.
    ///
    /// Files are visited in sorted path order so duplicate resolution is stable.
    pub fn load_catalog(&self) -> Result<SettingsCatalog, AssetError> {
        if !self.base_path.is_dir() {
            return Err(AssetError::NotFound(self.base_path.clone()));
        }

        let mut files = Vec::new();
        collect_files(&self.base_path, &mut files)?;
        files.sort();

        let mut catalog = SettingsCatalog::default();
        for file in files {
            catalog.insert(self.load_settings(&file)?);
        }

        info!(
            "Loaded {} camera settings from {}",
            catalog.len(),
            self.base_path.display()
        );
        Ok(catalog)
    }

    /// The base path this loader resolves relative paths against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), AssetError> {
    let entries = fs::read_dir(dir).map_err(|e| AssetError::Io(dir.to_path_buf(), e))?;

    for entry in entries {
        let path = entry
            .map_err(|e| AssetError::Io(dir.to_path_buf(), e))?
            .path();

        if path.is_dir() {
            collect_files(&path, out)?;
        } else if matches!(extension(&path).as_deref(), Some("toml" | "json")) {
            out.push(path);
        } else {
            debug!("Skipping non-settings file {:?}", path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("tether-assets-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_returns_error() {
        let loader = CatalogLoader::new("/nonexistent");
        match loader.load_settings(Path::new("default.toml")) {
            Err(AssetError::NotFound(_)) => {}
            other => panic!("expected NotFound, got: {:?}", other),
        }
    }

    #[test]
    fn missing_directory_returns_error() {
        let loader = CatalogLoader::new("/nonexistent/cameras");
        assert!(matches!(loader.load_catalog(), Err(AssetError::NotFound(_))));
    }

    #[test]
    fn resolve_relative_path() {
        let loader = CatalogLoader::new("/home/user/assets");
        assert_eq!(
            loader.resolve(Path::new("cameras/aim.toml")),
            PathBuf::from("/home/user/assets/cameras/aim.toml")
        );
        assert_eq!(
            loader.resolve(Path::new("/absolute/aim.toml")),
            PathBuf::from("/absolute/aim.toml")
        );
    }

    #[test]
    fn toml_record_named_after_file_stem() {
        let dir = scratch_dir("toml");
        fs::write(
            dir.join("aim.toml"),
            "horizontal_offset = 20.0\nvertical_offset = 4.0\ntarget_distance = 40.0\n",
        )
        .unwrap();

        let loader = CatalogLoader::new(&dir);
        let settings = loader.load_settings(Path::new("aim.toml")).unwrap();
        assert_eq!(settings.name, "aim");
        assert_eq!(settings.horizontal_offset, 20.0);
        assert_eq!(settings.target_distance, 40.0);
        assert_eq!(settings.source.as_deref(), Some(dir.join("aim.toml").as_path()));
    }

    #[test]
    fn json_record_accepts_pascal_case() {
        let dir = scratch_dir("json");
        fs::write(
            dir.join("vehicle.json"),
            r#"{ "HorizontalOffset": 0.0, "VerticalOffset": 30.0, "TargetDistance": 200.0 }"#,
        )
        .unwrap();

        let loader = CatalogLoader::new(&dir);
        let settings = loader.load_settings(Path::new("vehicle.json")).unwrap();
        assert_eq!(settings.name, "vehicle");
        assert_eq!(settings.vertical_offset, 30.0);
        assert_eq!(settings.target_distance, 200.0);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = scratch_dir("format");
        fs::write(dir.join("aim.yaml"), "target_distance: 40").unwrap();

        let loader = CatalogLoader::new(&dir);
        assert!(matches!(
            loader.load_settings(Path::new("aim.yaml")),
            Err(AssetError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("aim.toml"), "target_distance = \"far\"").unwrap();

        let loader = CatalogLoader::new(&dir);
        assert!(matches!(loader.load_catalog(), Err(AssetError::ParseFailed(..))));
    }

    #[test]
    fn catalog_scans_nested_directories_in_order() {
        let dir = scratch_dir("catalog");
        fs::create_dir_all(dir.join("b")).unwrap();
        fs::write(dir.join("default.toml"), "target_distance = 80.0").unwrap();
        fs::write(dir.join("aim.toml"), "target_distance = 40.0").unwrap();
        fs::write(dir.join("b").join("aim.toml"), "target_distance = 35.0").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let catalog = CatalogLoader::new(&dir).load_catalog().unwrap();
        assert_eq!(catalog.names(), vec!["aim", "default"]);
        // "b/aim.toml" sorts after "aim.toml" and replaces it
        assert_eq!(catalog.get("aim").unwrap().target_distance, 35.0);
    }
}
