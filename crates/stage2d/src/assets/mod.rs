//! Texture loading and caching
//!
//! [`Texture`] is a CPU-side RGBA8 pixel block; [`TextureManager`] is the
//! name-addressed cache handing out stable [`TextureHandle`]s. The host
//! renderer is out of scope: embedders upload `Texture::data` however their
//! backend wants.

pub mod manager;
pub mod manifest;
pub mod texture;

pub use manager::{TextureHandle, TextureManager};
pub use manifest::{ManifestError, TextureManifest};
pub use texture::Texture;

use std::path::PathBuf;

use thiserror::Error;

/// Texture subsystem errors
#[derive(Debug, Error)]
pub enum TextureError {
    /// A texture name was looked up before being registered
    #[error("texture '{0}' not found")]
    NotFound(String),

    /// The image file could not be read or decoded
    #[error("failed to load '{path}': {source}")]
    Decode {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying decoder error
        #[source]
        source: image::ImageError,
    },

    /// A texture manifest could not be read or parsed
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),
}
