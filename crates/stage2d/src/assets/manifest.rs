//! Texture manifest
//!
//! Declarative name-to-path listing for bulk texture registration. The
//! file format is chosen by extension: `.toml` or `.ron`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Manifest loading errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),

    /// The file extension maps to no supported format
    #[error("unsupported manifest format: {0}")]
    UnsupportedFormat(String),
}

/// Name-to-path texture listing
///
/// ```toml
/// [textures]
/// player = "assets/player.png"
/// tiles = "assets/tiles.png"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Texture name to image path
    pub textures: BTreeMap<String, PathBuf>,
}

impl TextureManifest {
    /// Parse a manifest from TOML source
    pub fn from_toml(source: &str) -> Result<Self, ManifestError> {
        toml::from_str(source).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    /// Parse a manifest from RON source
    pub fn from_ron(source: &str) -> Result<Self, ManifestError> {
        ron::from_str(source).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    /// Load a manifest from a file, dispatching on its extension
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            Some("ron") => Self::from_ron(&contents),
            _ => Err(ManifestError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}
