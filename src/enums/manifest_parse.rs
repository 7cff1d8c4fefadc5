use crate::structs::dependency_manifest::DependencyManifest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestParse {
    Parsed(DependencyManifest),
    Empty,
}

impl ManifestParse {
    pub fn into_manifest(self) -> DependencyManifest {
        match self {
            Self::Parsed(manifest) => manifest,
            Self::Empty => DependencyManifest::default(),
        }
    }
}
