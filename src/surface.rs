//! Map surface orchestration: viewport lifecycle, tile sources, vector
//! overlays, annotation styling, and gesture wiring.

use std::path::PathBuf;
use std::time::Instant;

use crate::{
    annotations::{
        classifier::{classify, AnnotationStyle},
        entity::{AnnotationEntity, NodePosition},
    },
    core::{
        geo::{LatLng, LatLngBounds, Point, TileCoord},
        viewport::Viewport,
    },
    input::gestures::{PressPhase, SustainedPressRecognizer},
    layers::overlay::OverlayDescriptor,
    spatial::clustering::ClusterEngine,
    tiles::{
        pack::MapPack,
        resolver::TileLocator,
        source::{OfflinePackSource, TileSource},
    },
    MapError, Result,
};

/// Base-map rendering kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    Standard,
    Satellite,
    Hybrid,
}

/// Interaction switches applied when the viewport is initialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub rotate_enabled: bool,
    pub pitch_enabled: bool,
    pub shows_buildings: bool,
    pub shows_user_location: bool,
    pub shows_compass: bool,
    pub shows_scale: bool,
    pub pan_enabled: bool,
    /// Whether the camera follows the user's own position
    pub follows_user: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            rotate_enabled: true,
            pitch_enabled: true,
            shows_buildings: true,
            shows_user_location: true,
            shows_compass: true,
            shows_scale: true,
            pan_enabled: true,
            follows_user: false,
        }
    }
}

/// Owns the map viewport and orchestrates the core: registers tile
/// sources and overlays, feeds classified annotations to the renderer,
/// and delivers long-press coordinates to a single handler.
///
/// Holds the sole mutable state of the engine; a host must drive it
/// from one logical thread at a time.
pub struct MapSurfaceController {
    viewport: Viewport,
    map_kind: MapKind,
    options: SurfaceOptions,
    initialized: Option<(LatLngBounds, MapKind)>,
    tile_sources: Vec<Box<dyn TileSource>>,
    overlays: Vec<OverlayDescriptor>,
    nodes: Vec<NodePosition>,
    cluster_engine: ClusterEngine,
    recognizer: SustainedPressRecognizer,
    on_coordinate: Box<dyn FnMut(LatLng)>,
}

impl MapSurfaceController {
    /// Creates a controller delivering captured coordinates to
    /// `on_coordinate`. Gesture wiring happens here, once; there is no
    /// later registration step.
    pub fn new(on_coordinate: impl FnMut(LatLng) + 'static) -> Self {
        Self {
            viewport: Viewport::default(),
            map_kind: MapKind::Standard,
            options: SurfaceOptions::default(),
            initialized: None,
            tile_sources: Vec::new(),
            overlays: Vec::new(),
            nodes: Vec::new(),
            cluster_engine: ClusterEngine::default(),
            recognizer: SustainedPressRecognizer::new(),
            on_coordinate: Box::new(on_coordinate),
        }
    }

    pub fn with_cluster_engine(mut self, engine: ClusterEngine) -> Self {
        self.cluster_engine = engine;
        self
    }

    pub fn with_press_recognizer(mut self, recognizer: SustainedPressRecognizer) -> Self {
        self.recognizer = recognizer;
        self
    }

    /// Sets the initial camera region and base-map kind, and applies
    /// the surface option set (rotation, tilt, buildings, user
    /// location, compass, scale and panning on; user tracking off).
    ///
    /// One-time: repeating the call with the same parameters is a
    /// no-op; different parameters are ignored with a warning.
    pub fn initialize_viewport(&mut self, region: LatLngBounds, kind: MapKind) -> Result<()> {
        if !region.south_west.is_valid() || !region.north_east.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "region out of range: {:?}",
                region
            )));
        }

        if let Some((existing_region, existing_kind)) = &self.initialized {
            if *existing_region != region || *existing_kind != kind {
                log::warn!("viewport already initialized; ignoring new region");
            }
            return Ok(());
        }

        self.viewport.fit_bounds(&region, None);
        self.map_kind = kind;
        self.options = SurfaceOptions::default();
        self.initialized = Some((region, kind));
        Ok(())
    }

    /// Updates only the base-map rendering kind. Camera, overlays and
    /// annotations are untouched, so it is safe on every view tick.
    pub fn refresh_map_kind(&mut self, kind: MapKind) {
        self.map_kind = kind;
    }

    pub fn map_kind(&self) -> MapKind {
        self.map_kind
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Registers an offline tile pack as a tile source. Sources render
    /// in registration order, later sources on top.
    pub fn attach_tile_overlay(&mut self, pack: MapPack, root: impl Into<PathBuf>) {
        self.tile_sources
            .push(Box::new(OfflinePackSource::new(pack, root)));
    }

    /// Registers a vector overlay, skipping descriptors already present
    /// under the coarse overlay equality. Overlays render in
    /// registration order, later overlays on top.
    pub fn attach_vector_overlay(&mut self, descriptor: OverlayDescriptor) {
        if self.overlays.contains(&descriptor) {
            log::debug!("skipping duplicate vector overlay");
            return;
        }
        self.overlays.push(descriptor);
    }

    pub fn overlays(&self) -> &[OverlayDescriptor] {
        &self.overlays
    }

    pub fn tile_sources(&self) -> &[Box<dyn TileSource>] {
        &self.tile_sources
    }

    /// Locator from the topmost source covering the coordinate, or
    /// `None` when no registered source does.
    pub fn resolve_tile(&self, coord: TileCoord) -> Option<TileLocator> {
        self.tile_sources
            .iter()
            .rev()
            .find_map(|source| source.locator(coord))
    }

    /// Replaces the node snapshot for the next render pass. The input
    /// is copied, never mutated.
    pub fn set_node_positions(&mut self, nodes: &[NodePosition]) {
        self.nodes = nodes.to_vec();
    }

    pub fn node_positions(&self) -> &[NodePosition] {
        &self.nodes
    }

    /// Entities for this render pass, reclustered for the current
    /// viewport and node snapshot.
    pub fn visible_entities(&self) -> Vec<AnnotationEntity> {
        self.cluster_engine.entities(&self.nodes, &self.viewport)
    }

    /// Rendering style for one visible entity
    pub fn style_for(&self, entity: &AnnotationEntity) -> AnnotationStyle {
        classify(entity)
    }

    /// Feeds one press phase from the host gesture system. On the
    /// terminal phase of a qualifying press, converts the screen point
    /// through the current camera transform and invokes the coordinate
    /// handler exactly once.
    pub fn handle_press(&mut self, phase: PressPhase, position: Point, at: Instant) {
        if let Some(screen_point) = self.recognizer.process(phase, position, at) {
            let coordinate = self.viewport.pixel_to_lat_lng(&screen_point);
            (self.on_coordinate)(coordinate);
        }
    }
}
