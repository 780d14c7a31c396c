//! Texture cache
//!
//! Central name-addressed store for decoded textures. Handles stay valid
//! for the lifetime of the manager; re-loading a name swaps the pixels
//! behind the existing handle so sprites keep working.

use std::collections::HashMap;
use std::path::Path;

use slotmap::SlotMap;

use crate::assets::{Texture, TextureError, TextureManifest};

slotmap::new_key_type! {
    /// Stable key into a [`TextureManager`]
    pub struct TextureHandle;
}

/// Name-addressed texture cache
#[derive(Debug, Default)]
pub struct TextureManager {
    textures: SlotMap<TextureHandle, Texture>,
    names: HashMap<String, TextureHandle>,
}

impl TextureManager {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            textures: SlotMap::with_key(),
            names: HashMap::new(),
        }
    }

    /// Decode an image file and register it under a name
    ///
    /// Loading a name again replaces its pixels in place; the previously
    /// issued handle keeps resolving to the new data.
    pub fn load<P: AsRef<Path>>(
        &mut self,
        name: impl Into<String>,
        path: P,
    ) -> Result<TextureHandle, TextureError> {
        let texture = Texture::from_file(path)?;
        Ok(self.insert(name, texture))
    }

    /// Decode and register several name/path pairs
    pub fn load_all<P: AsRef<Path>>(
        &mut self,
        pairs: &[(&str, P)],
    ) -> Result<Vec<TextureHandle>, TextureError> {
        let mut handles = Vec::with_capacity(pairs.len());
        for (name, path) in pairs {
            handles.push(self.load(*name, path)?);
        }
        Ok(handles)
    }

    /// Register every entry of a manifest file
    pub fn load_manifest<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<Vec<TextureHandle>, TextureError> {
        let manifest = TextureManifest::load_from_file(path)?;
        log::info!("loading {} textures from manifest", manifest.textures.len());

        let mut handles = Vec::with_capacity(manifest.textures.len());
        for (name, image_path) in &manifest.textures {
            handles.push(self.load(name.clone(), image_path)?);
        }
        Ok(handles)
    }

    /// Register an already-built texture under a name
    pub fn insert(&mut self, name: impl Into<String>, texture: Texture) -> TextureHandle {
        let name = name.into();
        if let Some(&handle) = self.names.get(&name) {
            log::debug!("replacing texture '{}'", name);
            self.textures[handle] = texture;
            return handle;
        }

        let handle = self.textures.insert(texture);
        self.names.insert(name, handle);
        handle
    }

    /// Look up a texture by name
    pub fn get(&self, name: &str) -> Option<&Texture> {
        self.names.get(name).map(|&handle| &self.textures[handle])
    }

    /// Look up a texture by name, failing loudly when unregistered
    pub fn get_or_err(&self, name: &str) -> Result<&Texture, TextureError> {
        self.get(name)
            .ok_or_else(|| TextureError::NotFound(name.to_string()))
    }

    /// Look up the handle for a name
    pub fn handle(&self, name: &str) -> Option<TextureHandle> {
        self.names.get(name).copied()
    }

    /// Look up the handle for a name, failing loudly when unregistered
    pub fn handle_or_err(&self, name: &str) -> Result<TextureHandle, TextureError> {
        self.handle(name)
            .ok_or_else(|| TextureError::NotFound(name.to_string()))
    }

    /// Resolve a handle to its texture
    pub fn texture(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle)
    }

    /// Whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Registered texture names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
