pub mod geo;
pub mod viewport;

// Re-exports for convenience
pub use geo::{LatLng, LatLngBounds, Point, TileCoord};
pub use viewport::Viewport;
