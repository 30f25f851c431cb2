//! `icons` manifest fragment for browser extensions
//!
//! WebExtension manifests reference icons through an object keyed by the
//! icon size in pixels, e.g. `"icons": { "16": "icon16.png" }`. This module
//! builds that fragment for the files the generator wrote so it can be pasted
//! into `manifest.json`.

use anyhow::{Context, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::Path;

/// File name of the written fragment
pub const MANIFEST_FILE_NAME: &str = "icons.json";

/// Root of the fragment
#[derive(serde::Serialize, Debug, Clone, Default)]
pub struct IconsManifest {
    pub icons: IconSet,
}

/// Icon paths keyed by size, kept in ascending size order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet(Vec<(u32, String)>);

impl IconSet {
    pub fn get(&self, size: u32) -> Option<&str> {
        self.0
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, file)| file.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// JSON object keys must be strings, and a plain map would order "128" before "16"
impl Serialize for IconSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (size, file) in &self.0 {
            map.serialize_entry(&size.to_string(), file)?;
        }
        map.end()
    }
}

impl IconsManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the icon written for `size`, replacing an earlier entry for it
    pub fn add_icon(&mut self, size: u32, filename: String) {
        match self.icons.0.binary_search_by_key(&size, |(s, _)| *s) {
            Ok(index) => self.icons.0[index].1 = filename,
            Err(index) => self.icons.0.insert(index, (size, filename)),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize icons manifest")
    }
}

/// Writes `icons.json` into `out_dir`
pub fn write_icons_manifest(out_dir: &Path, manifest: &IconsManifest) -> Result<()> {
    let manifest_path = out_dir.join(MANIFEST_FILE_NAME);
    let manifest_json = manifest.to_json()?;

    std::fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    println!("Created {MANIFEST_FILE_NAME}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manifest() {
        let manifest = IconsManifest::new();
        let value: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert!(value["icons"].as_object().unwrap().is_empty());
        assert!(manifest.icons.is_empty());
    }

    #[test]
    fn test_repeated_size_replaces_entry() {
        let mut manifest = IconsManifest::new();
        manifest.add_icon(16, "old.png".to_string());
        manifest.add_icon(16, "icon16.png".to_string());

        assert!(!manifest.icons.is_empty());
        assert_eq!(manifest.icons.len(), 1);
        assert_eq!(manifest.icons.get(16), Some("icon16.png"));
    }

    #[test]
    fn test_entries_follow_numeric_size_order() {
        let mut manifest = IconsManifest::new();
        manifest.add_icon(128, "icon128.png".to_string());
        manifest.add_icon(16, "icon16.png".to_string());
        manifest.add_icon(48, "icon48.png".to_string());

        let json = manifest.to_json().unwrap();
        let pos_16 = json.find("\"16\"").unwrap();
        let pos_48 = json.find("\"48\"").unwrap();
        let pos_128 = json.find("\"128\"").unwrap();
        assert!(pos_16 < pos_48 && pos_48 < pos_128);
        assert_eq!(manifest.icons.len(), 3);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["icons"]["48"], "icon48.png");
    }

    #[test]
    fn test_write_manifest_to_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut manifest = IconsManifest::new();
        manifest.add_icon(16, "icon16.png".to_string());

        write_icons_manifest(dir.path(), &manifest).unwrap();

        let written = std::fs::read_to_string(dir.path().join(MANIFEST_FILE_NAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["icons"]["16"], "icon16.png");
    }
}
