//! Static shape of the four-way intersection as a small weighted graph.
//!
//! This is a data artifact for renderers: five nodes (the junction center
//! plus one per arm), four weighted edges, and layout positions. No
//! algorithm runs over it.

use crate::core::Direction;
use serde::{Deserialize, Serialize};

/// A vertex of the intersection graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum NodeId {
    Center,
    North,
    South,
    East,
    West,
}

impl NodeId {
    /// All nodes, center first.
    pub const ALL: [NodeId; 5] = [
        NodeId::Center,
        NodeId::North,
        NodeId::South,
        NodeId::East,
        NodeId::West,
    ];

    /// Display label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Center => "Center",
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }

    /// The arm this node represents, `None` for the center.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Center => None,
            Self::North => Some(Direction::North),
            Self::South => Some(Direction::South),
            Self::East => Some(Direction::East),
            Self::West => Some(Direction::West),
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Center => 0,
            Self::North => 1,
            Self::South => 2,
            Self::East => 3,
            Self::West => 4,
        }
    }
}

/// A node with its layout position.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    /// Layout position for renderers, center at the origin.
    pub position: (f32, f32),
}

/// An undirected weighted edge between two nodes.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GraphEdge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: u32,
}

/// The intersection's static shape: 5 nodes, 4 weighted edges.
///
/// # Example
///
/// ```rust
/// use crossway::{IntersectionGraph, NodeId};
///
/// let graph = IntersectionGraph::four_way();
/// assert_eq!(graph.nodes().len(), 5);
/// assert_eq!(graph.edges().len(), 4);
///
/// let adjacency = graph.adjacency();
/// // Center connects to every arm with weight 2.
/// assert_eq!(adjacency[0][1], 2);
/// assert_eq!(adjacency[1][0], 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntersectionGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl IntersectionGraph {
    /// The standard four-way shape: center at the origin, one arm per
    /// cardinal direction, every road two units long.
    pub fn four_way() -> Self {
        let nodes = vec![
            GraphNode {
                id: NodeId::Center,
                position: (0.0, 0.0),
            },
            GraphNode {
                id: NodeId::North,
                position: (0.0, 2.0),
            },
            GraphNode {
                id: NodeId::South,
                position: (0.0, -2.0),
            },
            GraphNode {
                id: NodeId::East,
                position: (2.0, 0.0),
            },
            GraphNode {
                id: NodeId::West,
                position: (-2.0, 0.0),
            },
        ];
        let edges = [NodeId::North, NodeId::South, NodeId::East, NodeId::West]
            .into_iter()
            .map(|arm| GraphEdge {
                a: NodeId::Center,
                b: arm,
                weight: 2,
            })
            .collect();

        IntersectionGraph { nodes, edges }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Weighted adjacency matrix in [`NodeId::ALL`] order; zero means no
    /// edge.
    pub fn adjacency(&self) -> [[u32; 5]; 5] {
        let mut matrix = [[0u32; 5]; 5];
        for edge in &self.edges {
            let (i, j) = (edge.a.index(), edge.b.index());
            matrix[i][j] = edge.weight;
            matrix[j][i] = edge.weight;
        }
        matrix
    }
}
