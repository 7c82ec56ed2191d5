use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Stable identifier of a mesh node
pub type NodeId = u32;

/// Glyph drawn on a node marker when the node supplies none of its own
pub const DEFAULT_NODE_GLYPH: char = '📟';

/// One node position record as delivered by the device link layer.
///
/// Records arrive as a read-only snapshot per render refresh; this core
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub id: NodeId,
    pub position: LatLng,
    pub name: Option<String>,
    pub glyph: char,
}

impl NodePosition {
    pub fn new(id: NodeId, lat: f64, lng: f64) -> Self {
        Self {
            id,
            position: LatLng::new(lat, lng),
            name: None,
            glyph: DEFAULT_NODE_GLYPH,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }
}

/// Everything the renderer can place on the map surface.
///
/// A closed variant set: the classifier matches exhaustively, so adding
/// a variant is a compile-time-checked extension point.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationEntity {
    /// One node at its last reported position
    SingleNode(NodePosition),
    /// A transient grouping of nearby nodes. Recomputed per render
    /// pass; its identity is nothing beyond its current membership.
    ClusterOfNodes {
        members: Vec<NodeId>,
        position: LatLng,
    },
}

impl AnnotationEntity {
    /// Marker position for this entity
    pub fn position(&self) -> LatLng {
        match self {
            AnnotationEntity::SingleNode(node) => node.position,
            AnnotationEntity::ClusterOfNodes { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_position_defaults() {
        let node = NodePosition::new(7, 48.1, 11.5);
        assert_eq!(node.glyph, DEFAULT_NODE_GLYPH);
        assert!(node.name.is_none());

        let named = node.with_name("base-station").with_glyph('☎');
        assert_eq!(named.name.as_deref(), Some("base-station"));
        assert_eq!(named.glyph, '☎');
    }

    #[test]
    fn test_entity_position() {
        let single = AnnotationEntity::SingleNode(NodePosition::new(1, 10.0, 20.0));
        assert_eq!(single.position(), LatLng::new(10.0, 20.0));

        let cluster = AnnotationEntity::ClusterOfNodes {
            members: vec![1, 2],
            position: LatLng::new(5.0, 6.0),
        };
        assert_eq!(cluster.position(), LatLng::new(5.0, 6.0));
    }
}
