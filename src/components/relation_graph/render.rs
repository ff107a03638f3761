use std::f64::consts::FRAC_1_SQRT_2;

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::geometry::{self, Point};
use super::layout::{NODE_RADIUS, NodeWithPosition};
use super::types::{AssetKind, GraphEdge, GraphNode, impact_color};

/// The legend only names the first few kinds so it stays a glanceable strip.
const LEGEND_MAX_KINDS: usize = 4;

const LABEL_PLATE_HEIGHT: f64 = 18.0;
const FINDING_BADGE_RADIUS: f64 = 9.0;

/// Estimated plate width from the label's character count. Byte length
/// would oversize the plate for accented tags.
fn label_plate_width(label: &str) -> f64 {
	label.chars().count() as f64 * 6.5 + 12.0
}

/// One edge: clipped segment, arrowhead and relation label plate. `None`
/// when an endpoint id is not in the layout or the endpoints coincide.
pub fn edge_view(
	edge: &GraphEdge,
	placed: &[NodeWithPosition],
	on_edge_click: Option<Callback<String>>,
) -> Option<AnyView> {
	let source = placed.iter().find(|p| p.node.id == edge.source)?;
	let target = placed.iter().find(|p| p.node.id == edge.target)?;
	let geom = geometry::edge_geometry(
		Point::new(source.x, source.y),
		Point::new(target.x, target.y),
	)?;

	let color = impact_color(edge.impact_weight);
	let label = edge.kind.forward_label().to_string();
	let plate_width = label_plate_width(&label);
	let points = geom
		.arrow
		.iter()
		.map(|p| format!("{},{}", p.x, p.y))
		.collect::<Vec<_>>()
		.join(" ");

	let edge_id = edge.id.clone();
	let handle_click = move |_: MouseEvent| {
		if let Some(callback) = on_edge_click {
			callback.run(edge_id.clone());
		}
	};

	Some(
		view! {
			<g class="relation-edge" style="cursor: pointer;" on:click=handle_click>
				<line
					x1=geom.start.x.to_string()
					y1=geom.start.y.to_string()
					x2=geom.end.x.to_string()
					y2=geom.end.y.to_string()
					stroke=color
					stroke-width="2"
				/>
				<polygon points=points fill=color />
				<rect
					x=(geom.label_anchor.x - plate_width / 2.0).to_string()
					y=(geom.label_anchor.y - LABEL_PLATE_HEIGHT / 2.0).to_string()
					width=plate_width.to_string()
					height=LABEL_PLATE_HEIGHT.to_string()
					rx="4"
					fill="#0f172a"
					fill-opacity="0.85"
				/>
				<text
					x=geom.label_anchor.x.to_string()
					y=(geom.label_anchor.y + 3.5).to_string()
					text-anchor="middle"
					font-size="10"
					fill="#e2e8f0"
				>
					{label}
				</text>
			</g>
		}
		.into_any(),
	)
}

/// One node glyph: kind-colored circle, name, optional risk score and
/// finding-count badge. The central node gets a heavier ring.
pub fn node_view(
	placed: &NodeWithPosition,
	is_central: bool,
	on_node_click: Option<Callback<String>>,
) -> AnyView {
	let node = &placed.node;
	let (x, y) = (placed.x, placed.y);
	let radius = if is_central { NODE_RADIUS + 4.0 } else { NODE_RADIUS };
	let stroke = if is_central { "#f8fafc" } else { "#1e293b" };
	let stroke_width = if is_central { "3" } else { "1.5" };

	let node_id = node.id.clone();
	let handle_click = move |_: MouseEvent| {
		if let Some(callback) = on_node_click {
			callback.run(node_id.clone());
		}
	};

	let risk = node.risk_score.map(|score| {
		view! {
			<text
				x=x.to_string()
				y=(y + 12.0).to_string()
				text-anchor="middle"
				font-size="9"
				fill="#e2e8f0"
			>
				{format!("risk {score:.1}")}
			</text>
		}
	});

	let findings = node.finding_count.filter(|count| *count > 0).map(|count| {
		let badge_x = x + radius * FRAC_1_SQRT_2;
		let badge_y = y - radius * FRAC_1_SQRT_2;
		view! {
			<circle
				cx=badge_x.to_string()
				cy=badge_y.to_string()
				r=FINDING_BADGE_RADIUS.to_string()
				fill="#dc2626"
				stroke="#0f172a"
				stroke-width="1.5"
			/>
			<text
				x=badge_x.to_string()
				y=(badge_y + 3.0).to_string()
				text-anchor="middle"
				font-size="9"
				font-weight="700"
				fill="#fef2f2"
			>
				{count.to_string()}
			</text>
		}
	});

	view! {
		<g class="relation-node" style="cursor: pointer;" on:click=handle_click>
			<circle
				cx=x.to_string()
				cy=y.to_string()
				r=radius.to_string()
				fill=node.kind.color()
				stroke=stroke
				stroke-width=stroke_width
			/>
			<text
				x=x.to_string()
				y=(y - 1.0).to_string()
				text-anchor="middle"
				font-size="10"
				font-weight="600"
				fill="#f8fafc"
			>
				{node.name.clone()}
			</text>
			{risk}
			{findings}
		</g>
	}
	.into_any()
}

/// Distinct asset kinds in first-seen order, capped for the legend strip.
fn legend_kinds(nodes: &[GraphNode]) -> Vec<AssetKind> {
	let mut kinds: Vec<AssetKind> = Vec::new();
	for node in nodes {
		if !kinds.contains(&node.kind) {
			kinds.push(node.kind.clone());
		}
		if kinds.len() == LEGEND_MAX_KINDS {
			break;
		}
	}
	kinds
}

/// Swatch-and-label strip for the asset kinds present in the graph.
pub fn legend_view(nodes: &[GraphNode]) -> AnyView {
	let kinds = legend_kinds(nodes);

	view! {
		<div
			class="relation-legend"
			style="display: flex; gap: 12px; padding: 6px 10px; background: rgba(15, 23, 42, 0.8); border-radius: 6px; font-size: 12px; color: #e2e8f0;"
		>
			{kinds
				.into_iter()
				.map(|kind| {
					view! {
						<div style="display: flex; align-items: center; gap: 5px;">
							<span style=format!(
								"width: 10px; height: 10px; border-radius: 3px; background: {};",
								kind.color(),
							)></span>
							<span>{kind.label().to_string()}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
	.into_any()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, kind: AssetKind) -> GraphNode {
		GraphNode {
			id: id.to_string(),
			name: id.to_string(),
			kind,
			risk_score: None,
			finding_count: None,
		}
	}

	#[test]
	fn legend_keeps_first_seen_order_and_caps_at_four() {
		let nodes = [
			node("a", AssetKind::CrownJewel),
			node("b", AssetKind::Repository),
			node("c", AssetKind::Repository),
			node("d", AssetKind::Identity),
			node("e", AssetKind::Service),
			node("f", AssetKind::DataStore),
		];
		assert_eq!(
			legend_kinds(&nodes),
			vec![
				AssetKind::CrownJewel,
				AssetKind::Repository,
				AssetKind::Identity,
				AssetKind::Service,
			]
		);
	}

	#[test]
	fn legend_names_unknown_kinds_by_their_tag() {
		let nodes = [node("a", AssetKind::from_tag("saas-vendor"))];
		let kinds = legend_kinds(&nodes);
		assert_eq!(kinds.len(), 1);
		assert_eq!(kinds[0].label(), "saas-vendor");
	}

	fn edge(source: &str, target: &str) -> GraphEdge {
		GraphEdge {
			id: format!("{source}-{target}"),
			source: source.to_string(),
			target: target.to_string(),
			kind: crate::components::relation_graph::types::RelationKind::DependsOn,
			impact_weight: 5,
		}
	}

	fn placed(id: &str, x: f64, y: f64) -> NodeWithPosition {
		NodeWithPosition {
			node: node(id, AssetKind::Service),
			x,
			y,
		}
	}

	#[test]
	fn edges_with_unresolved_endpoints_are_skipped() {
		let layout = [placed("a", 100.0, 100.0)];
		assert!(edge_view(&edge("a", "ghost"), &layout, None).is_none());
		assert!(edge_view(&edge("ghost", "a"), &layout, None).is_none());
	}

	#[test]
	fn coincident_endpoints_draw_nothing() {
		let layout = [placed("a", 100.0, 100.0), placed("b", 100.0, 100.0)];
		assert!(edge_view(&edge("a", "b"), &layout, None).is_none());
	}

	#[test]
	fn plate_width_counts_characters_not_bytes() {
		assert_eq!(label_plate_width("contains"), 8.0 * 6.5 + 12.0);
		// Nine characters either way, ten bytes on the accented side.
		assert_eq!(label_plate_width("dépend_de"), label_plate_width("depend_de"));
	}
}
