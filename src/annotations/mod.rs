pub mod classifier;
pub mod entity;

// Re-exports for convenience
pub use classifier::{classify, AnnotationStyle, MarkerIcon, NODE_CLUSTER_GROUP};
pub use entity::{AnnotationEntity, NodeId, NodePosition, DEFAULT_NODE_GLYPH};
