//! Prelude module for common meshmap types
//!
//! Re-exports the most commonly used types and functions for easy
//! importing with `use meshmap::prelude::*;`

pub use crate::core::{
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    viewport::Viewport,
};

pub use crate::tiles::{
    pack::{DefaultTileRef, MapPack, MapPackConfig},
    resolver::{TileAddress, TileLocator, TileResolver},
    source::{OfflinePackSource, TileSource},
};

pub use crate::annotations::{
    classifier::{classify, AnnotationStyle, MarkerIcon, NODE_CLUSTER_GROUP},
    entity::{AnnotationEntity, NodeId, NodePosition},
};

pub use crate::layers::overlay::{OverlayDescriptor, Rgba};

pub use crate::spatial::clustering::{ClusterEngine, ClusteringConfig};

pub use crate::input::gestures::{PressConfig, PressPhase, SustainedPressRecognizer};

pub use crate::surface::{MapKind, MapSurfaceController, SurfaceOptions};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
