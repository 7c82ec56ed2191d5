//! Deterministic offline tile resolution.
//!
//! Resolution is total: every request yields a usable locator. A missing
//! tile degrades to the pack's default tile, then to a synthesized
//! placeholder reference, never to an error. The tile tree layout is a
//! persisted contract shared with pack importers:
//!
//! ```text
//! {root}/tiles/{pack}/{zoom}/{x}/{y}.{extension}
//! {root}/tiles/{pack}/{default_name}.{default_extension}
//! ```

use std::path::PathBuf;

use crate::core::geo::TileCoord;
use crate::tiles::pack::MapPack;

/// Identifies one requested tile: grid position plus the active pack's
/// name and image format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileAddress {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
    pub pack_name: String,
    pub image_extension: String,
}

impl TileAddress {
    /// Address for a tile coordinate under the given pack.
    ///
    /// The coordinate is assumed to lie within the grid its zoom level
    /// implies; that invariant is the mapping layer's to uphold.
    pub fn new(coord: TileCoord, pack: &MapPack) -> Self {
        Self {
            zoom: coord.z,
            x: coord.x,
            y: coord.y,
            pack_name: pack.name().to_string(),
            image_extension: pack.tile_extension().to_string(),
        }
    }
}

/// Where the renderer should read a tile image from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileLocator {
    /// An image file under the local tile tree.
    File(PathBuf),
    /// A synthesized remote-style reference. May point to nothing
    /// loadable; image-load failure is the renderer's concern.
    Remote(String),
}

/// Resolves tile addresses against a pack's on-disk tile tree.
///
/// Stateless apart from the storage root: identical (address, pack)
/// inputs always yield the identical locator, with no side effects.
#[derive(Debug, Clone)]
pub struct TileResolver {
    root: PathBuf,
}

impl TileResolver {
    /// Creates a resolver for the storage root containing the `tiles/` tree.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Resolves an address to a tile locator, in strict priority order:
    /// the exact tile, then the pack's default tile, then a placeholder
    /// reference. Never fails.
    pub fn resolve(&self, address: &TileAddress, pack: &MapPack) -> TileLocator {
        let exact = self
            .root
            .join("tiles")
            .join(&address.pack_name)
            .join(address.zoom.to_string())
            .join(address.x.to_string())
            .join(format!("{}.{}", address.y, address.image_extension));
        if exact.is_file() {
            return TileLocator::File(exact);
        }

        if let Some(default_tile) = pack.default_tile() {
            let fallback = self
                .root
                .join("tiles")
                .join(pack.name())
                .join(format!(
                    "{}.{}",
                    default_tile.tile_name, default_tile.tile_extension
                ));
            if fallback.is_file() {
                return TileLocator::File(fallback);
            }
        }

        // Last resort: a remote-style reference for future network tile
        // sources. The pack name joins the tile path with no separator.
        TileLocator::Remote(format!(
            "{}{}/{}/{}.png",
            address.pack_name, address.zoom, address.x, address.y
        ))
    }
}
