//! Maps visible map entities to rendering styles.

use crate::annotations::entity::AnnotationEntity;
use crate::layers::overlay::Rgba;

/// Clustering group shared by every single-node marker, so the
/// renderer's proximity-based clustering groups them together.
pub const NODE_CLUSTER_GROUP: &str = "node-group";

/// Tint for cluster markers
pub const ALERT_TINT: Rgba = Rgba::rgb(255, 59, 48);

/// Tint for single-node markers
pub const ACCENT_TINT: Rgba = Rgba::rgb(0, 122, 255);

/// Marker imagery for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    /// Generic balloon marker used for clusters
    ClusterMarker,
    /// Per-node glyph marker
    DeviceGlyph(char),
}

/// How the renderer should draw one entity
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationStyle {
    pub icon: MarkerIcon,
    pub tint: Rgba,
    pub callout_enabled: bool,
    pub title_visible: bool,
    /// Proximity-grouping key; `None` is terminal (never regrouped)
    pub clustering_group: Option<&'static str>,
}

/// Styling for a visible entity.
///
/// Exhaustive over the closed entity set — a new variant fails to
/// compile until it is styled here.
pub fn classify(entity: &AnnotationEntity) -> AnnotationStyle {
    match entity {
        AnnotationEntity::ClusterOfNodes { .. } => AnnotationStyle {
            icon: MarkerIcon::ClusterMarker,
            tint: ALERT_TINT,
            callout_enabled: false,
            title_visible: false,
            // Clusters do not nest
            clustering_group: None,
        },
        AnnotationEntity::SingleNode(node) => AnnotationStyle {
            icon: MarkerIcon::DeviceGlyph(node.glyph),
            tint: ACCENT_TINT,
            callout_enabled: true,
            title_visible: true,
            clustering_group: Some(NODE_CLUSTER_GROUP),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::entity::NodePosition;
    use crate::core::geo::LatLng;

    #[test]
    fn test_single_node_style() {
        let node = NodePosition::new(42, 48.1, 11.5).with_glyph('⚡');
        let style = classify(&AnnotationEntity::SingleNode(node));

        assert_eq!(style.icon, MarkerIcon::DeviceGlyph('⚡'));
        assert_eq!(style.tint, ACCENT_TINT);
        assert!(style.callout_enabled);
        assert!(style.title_visible);
        assert_eq!(style.clustering_group, Some(NODE_CLUSTER_GROUP));
    }

    #[test]
    fn test_every_single_node_shares_the_group_key() {
        let a = classify(&AnnotationEntity::SingleNode(NodePosition::new(1, 0.0, 0.0)));
        let b = classify(&AnnotationEntity::SingleNode(NodePosition::new(2, 50.0, 9.0)));
        assert_eq!(a.clustering_group, b.clustering_group);
        assert!(a.clustering_group.is_some());
    }

    #[test]
    fn test_cluster_style_is_terminal() {
        let style = classify(&AnnotationEntity::ClusterOfNodes {
            members: vec![1, 2, 3],
            position: LatLng::new(0.0, 0.0),
        });

        assert_eq!(style.icon, MarkerIcon::ClusterMarker);
        assert_eq!(style.tint, ALERT_TINT);
        assert!(style.clustering_group.is_none());
        assert!(!style.title_visible);
    }
}
