use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use serde_json::Value;
use crate::enums::manifest_parse::ManifestParse;
use crate::structs::dependency_manifest::DependencyManifest;

/// Reads declared dependencies from a `package.json`. Best effort: anything
/// unreadable or malformed yields an empty manifest.
pub struct DependencyExtractor;

impl DependencyExtractor {
    pub fn extract(descriptor: &Path) -> DependencyManifest {
        Self::parse(descriptor).into_manifest()
    }

    pub fn parse(descriptor: &Path) -> ManifestParse {
        let content = match fs::read_to_string(descriptor) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("⚠️ Could not read {}: {}", descriptor.display(), e);
                return ManifestParse::Empty;
            }
        };

        Self::parse_str(&content).unwrap_or_else(|| {
            log::warn!("⚠️ {} is not a valid JSON object, skipping dependency listing", descriptor.display());
            ManifestParse::Empty
        })
    }

    fn parse_str(content: &str) -> Option<ManifestParse> {
        let json: Value = serde_json::from_str(content).ok()?;
        let object = json.as_object()?;

        Some(ManifestParse::Parsed(DependencyManifest {
            dependencies: Self::version_map(object.get("dependencies")),
            dev_dependencies: Self::version_map(object.get("devDependencies")),
        }))
    }

    /// Keeps only `name: "version"` pairs; other value shapes are ignored.
    fn version_map(section: Option<&Value>) -> BTreeMap<String, String> {
        section
            .and_then(Value::as_object)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(name, version)| version.as_str().map(|v| (name.clone(), v.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }
}
