//! Proximity clustering of visible node markers.
//!
//! Clustering runs per render pass over the currently visible nodes:
//! nothing is retained between passes, so a cluster's identity is
//! exactly its membership. Grouping happens in screen space through the
//! viewport's camera transform, which keeps the proximity radius
//! constant on screen across zoom levels.

use crate::annotations::entity::{AnnotationEntity, NodePosition};
use crate::core::{geo::LatLng, viewport::Viewport};
use crate::prelude::HashMap;

/// Configuration for proximity clustering
#[derive(Debug, Clone)]
pub struct ClusteringConfig {
    /// Proximity radius between markers, in screen pixels
    pub radius: f64,
    /// Zoom level at and above which clustering is disabled
    pub disable_at_zoom: f64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            radius: 60.0,
            disable_at_zoom: 15.0,
        }
    }
}

/// Groups visible nodes into single markers and clusters
#[derive(Debug, Clone, Default)]
pub struct ClusterEngine {
    config: ClusteringConfig,
}

impl ClusterEngine {
    pub fn new(config: ClusteringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Entities for one render pass: visible nodes, grouped by
    /// proximity in the current viewport.
    pub fn entities(&self, nodes: &[NodePosition], viewport: &Viewport) -> Vec<AnnotationEntity> {
        let visible_bounds = viewport.bounds();
        let visible: Vec<&NodePosition> = nodes
            .iter()
            .filter(|node| visible_bounds.contains(&node.position))
            .collect();

        if viewport.zoom >= self.config.disable_at_zoom {
            return visible
                .into_iter()
                .map(|node| AnnotationEntity::SingleNode(node.clone()))
                .collect();
        }

        // Bucket into grid cells of one radius each
        let mut grid: HashMap<(i32, i32), Vec<&NodePosition>> = HashMap::default();
        for node in visible {
            let pixel = viewport.lat_lng_to_pixel(&node.position);
            let cell = (
                (pixel.x / self.config.radius).floor() as i32,
                (pixel.y / self.config.radius).floor() as i32,
            );
            grid.entry(cell).or_default().push(node);
        }

        // Stable output order regardless of hash iteration order
        let mut cells: Vec<((i32, i32), Vec<&NodePosition>)> = grid.into_iter().collect();
        cells.sort_by_key(|(cell, _)| *cell);

        cells
            .into_iter()
            .map(|(_, members)| Self::entity_for_cell(members))
            .collect()
    }

    fn entity_for_cell(members: Vec<&NodePosition>) -> AnnotationEntity {
        if members.len() == 1 {
            return AnnotationEntity::SingleNode(members[0].clone());
        }

        let count = members.len() as f64;
        let (lat_sum, lng_sum) = members.iter().fold((0.0, 0.0), |(lat, lng), node| {
            (lat + node.position.lat, lng + node.position.lng)
        });

        let mut ids: Vec<_> = members.iter().map(|node| node.id).collect();
        ids.sort_unstable();

        AnnotationEntity::ClusterOfNodes {
            members: ids,
            position: LatLng::new(lat_sum / count, lng_sum / count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::Point;

    fn viewport(zoom: f64) -> Viewport {
        Viewport::new(LatLng::new(0.0, 0.0), zoom, Point::new(800.0, 600.0))
    }

    #[test]
    fn test_distant_nodes_stay_single() {
        let engine = ClusterEngine::default();
        let nodes = vec![
            NodePosition::new(1, 0.5, 0.5),
            NodePosition::new(2, -0.5, -0.5),
        ];

        let entities = engine.entities(&nodes, &viewport(8.0));
        assert_eq!(entities.len(), 2);
        assert!(entities
            .iter()
            .all(|e| matches!(e, AnnotationEntity::SingleNode(_))));
    }

    #[test]
    fn test_colocated_nodes_cluster_with_sorted_members() {
        let engine = ClusterEngine::default();
        let nodes = vec![
            NodePosition::new(9, 0.0, 0.0001),
            NodePosition::new(3, 0.0, -0.0001),
            NodePosition::new(5, 0.0, 0.0),
        ];

        let entities = engine.entities(&nodes, &viewport(8.0));
        assert_eq!(entities.len(), 1);
        match &entities[0] {
            AnnotationEntity::ClusterOfNodes { members, position } => {
                assert_eq!(members, &vec![3, 5, 9]);
                assert!(position.lat.abs() < 0.001);
            }
            other => panic!("expected cluster, got {other:?}"),
        }
    }

    #[test]
    fn test_clustering_disabled_at_high_zoom() {
        let engine = ClusterEngine::default();
        let nodes = vec![
            NodePosition::new(1, 0.0, 0.0001),
            NodePosition::new(2, 0.0, 0.0),
        ];

        let entities = engine.entities(&nodes, &viewport(16.0));
        assert_eq!(entities.len(), 2);
        assert!(entities
            .iter()
            .all(|e| matches!(e, AnnotationEntity::SingleNode(_))));
    }

    #[test]
    fn test_offscreen_nodes_are_culled() {
        let engine = ClusterEngine::default();
        let nodes = vec![
            NodePosition::new(1, 0.0, 0.0),
            // Far outside an 800x600 viewport at zoom 8
            NodePosition::new(2, 40.0, 120.0),
        ];

        let entities = engine.entities(&nodes, &viewport(8.0));
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn test_reclustering_has_no_memory() {
        let engine = ClusterEngine::default();
        let nodes = vec![
            NodePosition::new(1, 0.0, 0.0001),
            NodePosition::new(2, 0.0, 0.0),
        ];

        let first = engine.entities(&nodes, &viewport(8.0));
        let second = engine.entities(&nodes, &viewport(8.0));
        assert_eq!(first, second);
    }
}
