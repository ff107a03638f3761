mod component;
mod geometry;
mod layout;
mod mini;
mod render;
mod state;
mod types;

pub use component::RelationGraph;
pub use mini::MiniRelationGraph;
pub use types::{AssetKind, GraphEdge, GraphNode, RelationKind, RelationshipGraph, impact_color};
