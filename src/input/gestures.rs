//! Press gesture recognition for coordinate capture.

use crate::core::geo::Point;
use std::time::{Duration, Instant};

/// Phases reported by the host gesture system for one press sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// Configuration for sustained-press recognition
#[derive(Debug, Clone)]
pub struct PressConfig {
    /// Minimum hold time before a release qualifies
    pub min_press_duration: Duration,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            min_press_duration: Duration::from_secs(1),
        }
    }
}

/// Recognizes sustained presses and reports the release point.
///
/// Fires at most once per press sequence, and only on the terminal
/// `Ended` phase. Movement tolerance stays with the host gesture
/// system: a press it moved or cancelled arrives here as `Cancelled`
/// and never fires.
#[derive(Debug, Default)]
pub struct SustainedPressRecognizer {
    config: PressConfig,
    press_start: Option<Instant>,
}

impl SustainedPressRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PressConfig) -> Self {
        Self {
            config,
            press_start: None,
        }
    }

    pub fn config(&self) -> &PressConfig {
        &self.config
    }

    /// Feeds one phase of a press sequence.
    ///
    /// Returns the screen point to deliver exactly when the sequence
    /// ends as a qualifying press; `None` otherwise.
    pub fn process(&mut self, phase: PressPhase, position: Point, at: Instant) -> Option<Point> {
        match phase {
            PressPhase::Began => {
                self.press_start = Some(at);
                None
            }
            PressPhase::Changed => None,
            PressPhase::Cancelled => {
                self.press_start = None;
                None
            }
            PressPhase::Ended => {
                let started = self.press_start.take()?;
                let held = at.saturating_duration_since(started);
                (held >= self.config.min_press_duration).then_some(position)
            }
        }
    }

    /// Clears any in-flight press sequence
    pub fn reset(&mut self) {
        self.press_start = None;
    }
}
