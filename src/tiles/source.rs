use std::path::PathBuf;

use crate::core::geo::TileCoord;
use crate::tiles::pack::MapPack;
use crate::tiles::resolver::{TileAddress, TileLocator, TileResolver};

/// Trait representing anything that can produce a tile locator for a
/// given coordinate.
pub trait TileSource: Send + Sync {
    /// Locator for the requested `coord`, or `None` when this source
    /// does not cover it (e.g. the zoom level is outside its window).
    fn locator(&self, coord: TileCoord) -> Option<TileLocator>;

    /// Whether tiles from this source fully replace the base map, as
    /// opposed to compositing over it as transparent overlays.
    fn replaces_base_map(&self) -> bool {
        false
    }
}

/// Tile source backed by an offline map pack on local storage.
pub struct OfflinePackSource {
    pack: MapPack,
    resolver: TileResolver,
}

impl OfflinePackSource {
    pub fn new(pack: MapPack, root: impl Into<PathBuf>) -> Self {
        Self {
            pack,
            resolver: TileResolver::new(root),
        }
    }

    pub fn pack(&self) -> &MapPack {
        &self.pack
    }
}

impl TileSource for OfflinePackSource {
    fn locator(&self, coord: TileCoord) -> Option<TileLocator> {
        // Zoom bounds are enforced here; the resolver never rejects.
        if !self.pack.allows_zoom(coord.z) {
            return None;
        }

        let address = TileAddress::new(coord, &self.pack);
        Some(self.resolver.resolve(&address, &self.pack))
    }

    fn replaces_base_map(&self) -> bool {
        self.pack.content_replacement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_zoom_window_filters_before_resolution() {
        let root = TempDir::new().unwrap();
        let pack = MapPack::new("offline-city", "png")
            .unwrap()
            .with_zoom_bounds(Some(10), Some(14));
        let source = OfflinePackSource::new(pack, root.path());

        assert!(source.locator(TileCoord::new(0, 0, 9)).is_none());
        assert!(source.locator(TileCoord::new(0, 0, 15)).is_none());

        // Inside the window a locator always comes back, even with no
        // tile on disk (the placeholder branch).
        assert!(source.locator(TileCoord::new(0, 0, 12)).is_some());
    }

    #[test]
    fn test_replaces_base_map_follows_the_pack() {
        let root = TempDir::new().unwrap();

        let opaque = OfflinePackSource::new(
            MapPack::new("opaque", "png").unwrap(),
            root.path(),
        );
        assert!(opaque.replaces_base_map());

        let transparent = OfflinePackSource::new(
            MapPack::new("transparent", "png")
                .unwrap()
                .with_content_replacement(false),
            root.path(),
        );
        assert!(!transparent.replaces_base_map());
    }
}
