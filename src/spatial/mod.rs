pub mod clustering;

// Re-exports for convenience
pub use clustering::{ClusterEngine, ClusteringConfig};
