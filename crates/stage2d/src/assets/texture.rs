//! CPU-side texture data
//!
//! Decoded pixel blocks in RGBA8, ready for whatever upload path the
//! embedding renderer uses.

use std::path::Path;

use crate::assets::TextureError;
use crate::color::Rgba;
use crate::foundation::math::Vec2;

/// Decoded RGBA8 pixel data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Raw RGBA pixel data, `width * height * 4` bytes
    pub data: Vec<u8>,
}

impl Texture {
    /// Decode a texture from a file path
    ///
    /// Any format the `image` crate understands is converted to RGBA8.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let path = path.as_ref();
        log::debug!("loading texture from {:?}", path);

        let decoded = image::open(path).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("loaded texture {}x{} from {:?}", width, height, path);

        Ok(Self {
            width,
            height,
            data: rgba.into_raw(),
        })
    }

    /// Decode a texture from in-memory bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        let decoded = image::load_from_memory(bytes).map_err(|source| TextureError::Decode {
            path: "<memory>".into(),
            source,
        })?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            data: rgba.into_raw(),
        })
    }

    /// Create a solid-color texture
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        let pixel = color.to_bytes();
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            data.extend_from_slice(&pixel);
        }

        Self {
            width,
            height,
            data,
        }
    }

    /// Texture dimensions as a float vector, for sizing sprites
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Size of the pixel data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether both dimensions are powers of two
    pub fn is_power_of_two(&self) -> bool {
        self.width.is_power_of_two() && self.height.is_power_of_two()
    }
}
