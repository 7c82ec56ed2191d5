pub mod gestures;

// Re-exports for convenience
pub use gestures::{PressConfig, PressPhase, SustainedPressRecognizer};
