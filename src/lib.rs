//! # Meshmap
//!
//! A modular, Rust-native map engine core for visualizing live
//! mesh-network node positions over offline tile packs.
//!
//! The crate covers deterministic offline tile resolution with a
//! fallback chain, annotation classification and clustering identity
//! for node markers, vector overlay compositing, and long-press
//! coordinate capture. Rendering itself belongs to the host; this core
//! hands it tile locators, annotation styles, and overlay descriptors.

pub mod annotations;
pub mod core;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod spatial;
pub mod surface;
pub mod tiles;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    viewport::Viewport,
};

pub use annotations::{
    classifier::{classify, AnnotationStyle, MarkerIcon, NODE_CLUSTER_GROUP},
    entity::{AnnotationEntity, NodeId, NodePosition},
};

pub use layers::overlay::{OverlayDescriptor, Rgba};

pub use tiles::{
    pack::{DefaultTileRef, MapPack, MapPackConfig},
    resolver::{TileAddress, TileLocator, TileResolver},
    source::{OfflinePackSource, TileSource},
};

pub use input::gestures::{PressConfig, PressPhase, SustainedPressRecognizer};

pub use spatial::clustering::{ClusterEngine, ClusteringConfig};

pub use surface::{MapKind, MapSurfaceController, SurfaceOptions};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("invalid map pack configuration: {0}")]
    InvalidPackConfiguration(String),

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;
