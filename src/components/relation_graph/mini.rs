use leptos::prelude::*;

use super::layout::{self, MINI_NODE_RADIUS};
use super::types::RelationshipGraph;

const MINI_EDGE_COLOR: &str = "#475569";

/// Non-interactive thumbnail of a relationship graph. Same layout as the
/// full canvas, scaled-down glyphs, no pan or zoom and no click handling.
#[component]
pub fn MiniRelationGraph(
	#[prop(into)] graph: Signal<RelationshipGraph>,
	#[prop(optional, into)] central_node_id: MaybeProp<String>,
	#[prop(default = 200.0)] width: f64,
	#[prop(default = 150.0)] height: f64,
) -> impl IntoView {
	let positions = Memo::new(move |_| {
		let graph = graph.get();
		let central = central_node_id.get();
		layout::mini_layout(&graph.nodes, central.as_deref(), width, height)
	});
	let central_id = Memo::new(move |_| {
		let graph = graph.get();
		let requested = central_node_id.get();
		layout::resolve_central(&graph.nodes, requested.as_deref()).map(str::to_string)
	});

	view! {
		<svg
			class="mini-relation-graph"
			width=width.to_string()
			height=height.to_string()
			viewBox=format!("0 0 {width} {height}")
			style="display: block; background: #0f172a; border-radius: 6px;"
		>
			<Show when=move || !positions.get().is_empty() fallback=move || empty_glyph(width, height)>
				{move || {
					let placed = positions.get();
					graph
						.get()
						.edges
						.iter()
						.filter_map(|edge| {
							let source = placed.iter().find(|p| p.node.id == edge.source)?;
							let target = placed.iter().find(|p| p.node.id == edge.target)?;
							Some(view! {
								<line
									x1=source.x.to_string()
									y1=source.y.to_string()
									x2=target.x.to_string()
									y2=target.y.to_string()
									stroke=MINI_EDGE_COLOR
									stroke-width="1"
								/>
							})
						})
						.collect_view()
				}}
				{move || {
					let central = central_id.get();
					positions
						.get()
						.iter()
						.map(|p| {
							let is_central = central.as_deref() == Some(p.node.id.as_str());
							let radius = if is_central { MINI_NODE_RADIUS + 2.0 } else { MINI_NODE_RADIUS };
							let stroke = if is_central { "#f8fafc" } else { "#1e293b" };
							view! {
								<circle
									cx=p.x.to_string()
									cy=p.y.to_string()
									r=radius.to_string()
									fill=p.node.kind.color()
									stroke=stroke
									stroke-width="1.5"
								/>
							}
						})
						.collect_view()
				}}
			</Show>
		</svg>
	}
}

/// Placeholder drawn when there is nothing to preview.
fn empty_glyph(width: f64, height: f64) -> impl IntoView {
	let cx = width / 2.0;
	let cy = height / 2.0;
	view! {
		<circle
			cx=cx.to_string()
			cy=(cy - 8.0).to_string()
			r="14"
			fill="none"
			stroke="#475569"
			stroke-width="1.5"
			stroke-dasharray="4 3"
		/>
		<text
			x=cx.to_string()
			y=(cy + 22.0).to_string()
			text-anchor="middle"
			font-size="10"
			fill="#64748b"
		>
			"no assets"
		</text>
	}
}
