use leptos::ev;
use leptos::prelude::*;
use web_sys::HtmlDivElement;

use super::layout;
use super::render;
use super::state::ViewState;
use super::types::RelationshipGraph;

const FALLBACK_WIDTH: f64 = 800.0;
const FALLBACK_HEIGHT: f64 = 600.0;

const CONTROL_BUTTON_STYLE: &str = "width: 28px; height: 28px; border: 1px solid #334155; \
	border-radius: 6px; background: #1e293b; color: #e2e8f0; font-size: 14px; cursor: pointer;";

/// Fixed dimension props win over container measurement.
fn measured_size(container: &HtmlDivElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let rect = container.get_bounding_client_rect();
	(
		width.unwrap_or_else(|| rect.width().max(1.0)),
		height.unwrap_or_else(|| rect.height().max(1.0)),
	)
}

/// Interactive relationship graph: radial layout, pan, zoom and click
/// reporting for one asset neighborhood.
#[component]
pub fn RelationGraph(
	#[prop(into)] graph: Signal<RelationshipGraph>,
	#[prop(optional, into)] central_node_id: MaybeProp<String>,
	#[prop(optional, into)] on_node_click: Option<Callback<String>>,
	#[prop(optional, into)] on_edge_click: Option<Callback<String>>,
	#[prop(optional)] width: Option<f64>,
	#[prop(optional)] height: Option<f64>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let size = RwSignal::new((
		width.unwrap_or(FALLBACK_WIDTH),
		height.unwrap_or(FALLBACK_HEIGHT),
	));
	let view_state = RwSignal::new(ViewState::default());

	// Measure the mounted container, then follow window resizes. The listener
	// is unregistered again when the component is dropped.
	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		if width.is_some() && height.is_some() {
			return;
		}
		let container: HtmlDivElement = container.into();
		size.set(measured_size(&container, width, height));

		let resize = window_event_listener(ev::resize, move |_| {
			size.set(measured_size(&container, width, height));
		});
		on_cleanup(move || resize.remove());
	});

	// Layout reruns only when the graph, the focus or the canvas changes.
	let positions = Memo::new(move |_| {
		let graph = graph.get();
		let central = central_node_id.get();
		let (w, h) = size.get();
		layout::radial_layout(&graph.nodes, central.as_deref(), w, h)
	});
	let central_id = Memo::new(move |_| {
		let graph = graph.get();
		let requested = central_node_id.get();
		layout::resolve_central(&graph.nodes, requested.as_deref()).map(str::to_string)
	});

	let pointer_position = move |ev: &web_sys::MouseEvent| {
		let container = container_ref.get()?;
		let container: HtmlDivElement = container.into();
		let rect = container.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let on_mousedown = move |ev: web_sys::MouseEvent| {
		if let Some((x, y)) = pointer_position(&ev) {
			view_state.update(|v| v.begin_drag(x, y));
		}
	};
	let on_mousemove = move |ev: web_sys::MouseEvent| {
		if !view_state.get_untracked().is_dragging() {
			return;
		}
		if let Some((x, y)) = pointer_position(&ev) {
			view_state.update(|v| v.drag_to(x, y));
		}
	};
	let on_mouseup = move |_: web_sys::MouseEvent| view_state.update(|v| v.end_drag());
	let on_mouseleave = move |_: web_sys::MouseEvent| view_state.update(|v| v.end_drag());

	let zoom_in = move |_: web_sys::MouseEvent| view_state.update(|v| v.zoom_in());
	let zoom_out = move |_: web_sys::MouseEvent| view_state.update(|v| v.zoom_out());
	let reset_view = move |_: web_sys::MouseEvent| view_state.update(|v| v.reset_view());

	view! {
		<div
			node_ref=container_ref
			class="relation-graph"
			style="position: relative; width: 100%; height: 100%; min-height: 420px; \
				background: #0f172a; border-radius: 8px; overflow: hidden;"
		>
			<Show
				when=move || !positions.get().is_empty()
				fallback=|| {
					view! {
						<div style="display: flex; align-items: center; justify-content: center; \
							height: 100%; min-height: 420px; color: #64748b; font-size: 14px;">
							"No assets to map yet"
						</div>
					}
				}
			>
				<svg
					style="display: block; width: 100%; height: 100%; cursor: grab;"
					viewBox=move || {
						let (w, h) = size.get();
						format!("0 0 {w} {h}")
					}
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=on_mouseup
					on:mouseleave=on_mouseleave
				>
					<g transform=move || {
						let (w, h) = size.get();
						view_state.get().svg_transform(w, h)
					}>
						// Edges first so node glyphs cover the clipped stubs.
						{move || {
							let placed = positions.get();
							graph
								.get()
								.edges
								.iter()
								.filter_map(|edge| render::edge_view(edge, &placed, on_edge_click))
								.collect_view()
						}}
						{move || {
							let placed = positions.get();
							let central = central_id.get();
							placed
								.iter()
								.map(|p| {
									let is_central =
										central.as_deref() == Some(p.node.id.as_str());
									render::node_view(p, is_central, on_node_click)
								})
								.collect_view()
						}}
					</g>
				</svg>
			</Show>
			<div style="position: absolute; top: 12px; right: 12px; display: flex; gap: 6px;">
				<button style=CONTROL_BUTTON_STYLE title="Zoom in" on:click=zoom_in>
					"+"
				</button>
				<button style=CONTROL_BUTTON_STYLE title="Zoom out" on:click=zoom_out>
					"−"
				</button>
				<button style=CONTROL_BUTTON_STYLE title="Reset view" on:click=reset_view>
					"⟲"
				</button>
			</div>
			<div style="position: absolute; bottom: 12px; left: 12px;">
				{move || {
					let nodes = graph.get().nodes;
					(!nodes.is_empty()).then(|| render::legend_view(&nodes))
				}}
			</div>
		</div>
	}
}
