//! Offline map pack configuration.
//!
//! A pack is the named, self-contained set of tiles an importer placed
//! under `tiles/{name}/`, plus the metadata needed to resolve them. A
//! pack is validated when it is constructed and immutable afterwards;
//! an empty or absent name never constructs a pack.

use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Names the single pack-wide fallback image stored directly under the
/// pack's root, used when a specific tile is absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefaultTileRef {
    pub tile_name: String,
    pub tile_extension: String,
}

impl DefaultTileRef {
    pub fn new(tile_name: impl Into<String>, tile_extension: impl Into<String>) -> Self {
        Self {
            tile_name: tile_name.into(),
            tile_extension: tile_extension.into(),
        }
    }
}

/// Raw, unvalidated pack settings as produced by the external
/// settings/import flow. Convert with [`MapPack::from_config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPackConfig {
    pub name: Option<String>,
    pub tile_extension: String,
    #[serde(default = "default_content_replacement")]
    pub content_replacement: bool,
    pub min_zoom: Option<u8>,
    pub max_zoom: Option<u8>,
    pub default_tile: Option<DefaultTileRef>,
}

fn default_content_replacement() -> bool {
    true
}

/// A named, self-contained set of offline tiles plus metadata.
///
/// `content_replacement` decides compositing: `true` means the pack's
/// tiles fully replace the base map, `false` means they are transparent
/// overlays drawn over it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPack {
    name: String,
    tile_extension: String,
    content_replacement: bool,
    min_zoom: Option<u8>,
    max_zoom: Option<u8>,
    default_tile: Option<DefaultTileRef>,
}

impl MapPack {
    /// Creates a pack with the given name and tile file extension.
    ///
    /// Fails with [`MapError::InvalidPackConfiguration`] when the name
    /// is empty; no partially valid pack can exist.
    pub fn new(name: impl Into<String>, tile_extension: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(MapError::InvalidPackConfiguration(
                "pack name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name,
            tile_extension: tile_extension.into(),
            content_replacement: true,
            min_zoom: None,
            max_zoom: None,
            default_tile: None,
        })
    }

    /// Builds a validated pack from the raw configuration surface.
    pub fn from_config(config: MapPackConfig) -> Result<Self> {
        let mut pack = Self::new(config.name.unwrap_or_default(), config.tile_extension)?;
        pack.content_replacement = config.content_replacement;
        pack.min_zoom = config.min_zoom;
        pack.max_zoom = config.max_zoom;
        pack.default_tile = config.default_tile;
        Ok(pack)
    }

    /// Parses and validates a JSON pack configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MapPackConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    pub fn with_content_replacement(mut self, content_replacement: bool) -> Self {
        self.content_replacement = content_replacement;
        self
    }

    pub fn with_zoom_bounds(mut self, min_zoom: Option<u8>, max_zoom: Option<u8>) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub fn with_default_tile(mut self, default_tile: DefaultTileRef) -> Self {
        self.default_tile = Some(default_tile);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tile_extension(&self) -> &str {
        &self.tile_extension
    }

    pub fn content_replacement(&self) -> bool {
        self.content_replacement
    }

    pub fn min_zoom(&self) -> Option<u8> {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> Option<u8> {
        self.max_zoom
    }

    pub fn default_tile(&self) -> Option<&DefaultTileRef> {
        self.default_tile.as_ref()
    }

    /// Whether the pack covers the given zoom level. Enforced by tile
    /// sources before resolution; the resolver itself never rejects.
    pub fn allows_zoom(&self, zoom: u8) -> bool {
        self.min_zoom.map_or(true, |min| zoom >= min)
            && self.max_zoom.map_or(true, |max| zoom <= max)
    }
}
