pub mod pack;
pub mod resolver;
pub mod source;

// Re-exports for convenience
pub use pack::{DefaultTileRef, MapPack, MapPackConfig};
pub use resolver::{TileAddress, TileLocator, TileResolver};
pub use source::{OfflinePackSource, TileSource};
