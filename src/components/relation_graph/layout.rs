use std::f64::consts::PI;

use super::types::GraphNode;

/// Drawn radius of a node glyph. Edge clipping and orbit sizing both key
/// off this value so the two never disagree.
pub const NODE_RADIUS: f64 = 40.0;

/// Drawn radius of a thumbnail node glyph.
pub const MINI_NODE_RADIUS: f64 = 8.0;

/// Gap kept between the satellite orbit and the canvas edge.
const CANVAS_MARGIN: f64 = 20.0;

const MINI_CANVAS_MARGIN: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NodeWithPosition {
	pub node: GraphNode,
	pub x: f64,
	pub y: f64,
}

/// Which node anchors the layout: the requested id when it exists in the
/// graph, otherwise the first node.
pub fn resolve_central<'a>(nodes: &'a [GraphNode], requested: Option<&str>) -> Option<&'a str> {
	if nodes.is_empty() {
		return None;
	}
	let idx = requested
		.and_then(|id| nodes.iter().position(|n| n.id == id))
		.unwrap_or(0);
	Some(nodes[idx].id.as_str())
}

/// Radial placement. The central node sits at the canvas center and every
/// other node is spaced evenly on one orbit around it, starting straight up
/// and proceeding clockwise in input order. Pure and deterministic, so a
/// resize is just a re-run with the new dimensions.
pub fn radial_layout(
	nodes: &[GraphNode],
	central_node_id: Option<&str>,
	width: f64,
	height: f64,
) -> Vec<NodeWithPosition> {
	let radius = width.min(height) / 2.0 - NODE_RADIUS - CANVAS_MARGIN;
	orbit_layout(nodes, central_node_id, width, height, radius)
}

/// Thumbnail variant of [`radial_layout`]: identical placement rule with
/// glyph-sized margins.
pub fn mini_layout(
	nodes: &[GraphNode],
	central_node_id: Option<&str>,
	width: f64,
	height: f64,
) -> Vec<NodeWithPosition> {
	let radius = width.min(height) / 2.0 - MINI_NODE_RADIUS - MINI_CANVAS_MARGIN;
	orbit_layout(nodes, central_node_id, width, height, radius)
}

fn orbit_layout(
	nodes: &[GraphNode],
	central_node_id: Option<&str>,
	width: f64,
	height: f64,
	radius: f64,
) -> Vec<NodeWithPosition> {
	let Some(central_id) = resolve_central(nodes, central_node_id) else {
		return Vec::new();
	};

	let (cx, cy) = (width / 2.0, height / 2.0);
	let step = 2.0 * PI / (nodes.len() - 1).max(1) as f64;

	let mut satellite = 0usize;
	nodes
		.iter()
		.map(|node| {
			let (x, y) = if node.id == central_id {
				(cx, cy)
			} else {
				let angle = -PI / 2.0 + step * satellite as f64;
				satellite += 1;
				(cx + radius * angle.cos(), cy + radius * angle.sin())
			};
			NodeWithPosition {
				node: node.clone(),
				x,
				y,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relation_graph::types::AssetKind;

	const EPS: f64 = 1e-9;

	fn node(id: &str) -> GraphNode {
		GraphNode {
			id: id.to_string(),
			name: id.to_uppercase(),
			kind: AssetKind::Service,
			risk_score: None,
			finding_count: None,
		}
	}

	fn assert_close(actual: f64, expected: f64) {
		assert!(
			(actual - expected).abs() < EPS,
			"expected {expected}, got {actual}"
		);
	}

	#[test]
	fn empty_graph_yields_empty_layout() {
		assert!(radial_layout(&[], None, 600.0, 400.0).is_empty());
	}

	#[test]
	fn single_node_sits_at_canvas_center() {
		let placed = radial_layout(&[node("a")], None, 600.0, 400.0);
		assert_eq!(placed.len(), 1);
		assert_close(placed[0].x, 300.0);
		assert_close(placed[0].y, 200.0);
	}

	#[test]
	fn explicit_central_id_wins_over_input_order() {
		let nodes = [node("a"), node("b"), node("c")];
		let placed = radial_layout(&nodes, Some("b"), 600.0, 400.0);
		let b = placed.iter().find(|p| p.node.id == "b").unwrap();
		assert_close(b.x, 300.0);
		assert_close(b.y, 200.0);
	}

	#[test]
	fn missing_central_id_falls_back_to_first_node() {
		let nodes = [node("a"), node("b")];
		let placed = radial_layout(&nodes, Some("zzz"), 600.0, 400.0);
		assert_close(placed[0].x, 300.0);
		assert_close(placed[0].y, 200.0);
	}

	#[test]
	fn satellites_start_up_and_step_evenly_clockwise() {
		let nodes = [node("hub"), node("s1"), node("s2"), node("s3"), node("s4")];
		let placed = radial_layout(&nodes, Some("hub"), 500.0, 500.0);
		let radius = 250.0 - NODE_RADIUS - 20.0;
		let step = 2.0 * PI / 4.0;
		for (k, p) in placed.iter().skip(1).enumerate() {
			let angle = -PI / 2.0 + step * k as f64;
			assert_close(p.x, 250.0 + radius * angle.cos());
			assert_close(p.y, 250.0 + radius * angle.sin());
		}
	}

	#[test]
	fn two_satellites_sit_opposite_each_other() {
		// Central a, b straight up, c straight down.
		let nodes = [node("a"), node("b"), node("c")];
		let placed = radial_layout(&nodes, Some("a"), 600.0, 400.0);
		let radius = 200.0 - NODE_RADIUS - 20.0;
		let b = placed.iter().find(|p| p.node.id == "b").unwrap();
		let c = placed.iter().find(|p| p.node.id == "c").unwrap();
		assert_close(b.x, 300.0);
		assert_close(b.y, 200.0 - radius);
		assert_close(c.x, 300.0);
		assert_close(c.y, 200.0 + radius);
	}

	#[test]
	fn layout_is_deterministic_and_order_preserving() {
		let nodes = [node("a"), node("b"), node("c"), node("d")];
		let first = radial_layout(&nodes, Some("c"), 640.0, 480.0);
		let second = radial_layout(&nodes, Some("c"), 640.0, 480.0);
		assert_eq!(first, second);
		let ids: Vec<&str> = first.iter().map(|p| p.node.id.as_str()).collect();
		assert_eq!(ids, ["a", "b", "c", "d"]);
	}

	#[test]
	fn orbit_radius_follows_the_short_canvas_side() {
		let nodes = [node("a"), node("b")];
		let placed = radial_layout(&nodes, Some("a"), 900.0, 400.0);
		let radius = 200.0 - NODE_RADIUS - 20.0;
		// Sole satellite points straight up from the center.
		assert_close(placed[1].x, 450.0);
		assert_close(placed[1].y, 200.0 - radius);
	}

	#[test]
	fn resize_recomputes_against_the_new_canvas() {
		let nodes = [node("a"), node("b"), node("c")];
		let large = radial_layout(&nodes, None, 600.0, 400.0);
		let small = radial_layout(&nodes, None, 300.0, 200.0);
		assert_close(small[0].x, 150.0);
		assert_close(small[0].y, 100.0);
		let old_radius = 200.0 - NODE_RADIUS - 20.0;
		let new_radius = 100.0 - NODE_RADIUS - 20.0;
		assert_close(large[1].y, 200.0 - old_radius);
		assert_close(small[1].y, 100.0 - new_radius);
	}

	#[test]
	fn mini_layout_shares_the_placement_rule() {
		let nodes = [node("a"), node("b"), node("c")];
		let placed = mini_layout(&nodes, Some("a"), 200.0, 150.0);
		let radius = 75.0 - MINI_NODE_RADIUS - 10.0;
		assert_close(placed[0].x, 100.0);
		assert_close(placed[0].y, 75.0);
		assert_close(placed[1].x, 100.0);
		assert_close(placed[1].y, 75.0 - radius);
		assert_close(placed[2].y, 75.0 + radius);
	}

	#[test]
	fn no_two_nodes_coincide() {
		let nodes: Vec<GraphNode> = (0..7).map(|i| node(&format!("n{i}"))).collect();
		let placed = radial_layout(&nodes, None, 800.0, 600.0);
		for i in 0..placed.len() {
			for j in (i + 1)..placed.len() {
				let dx = placed[i].x - placed[j].x;
				let dy = placed[i].y - placed[j].y;
				assert!(dx.hypot(dy) > 1.0, "nodes {i} and {j} coincide");
			}
		}
	}
}
