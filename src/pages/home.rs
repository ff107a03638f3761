use leptos::prelude::*;
use log::debug;

use crate::components::relation_graph::{
	AssetKind, GraphEdge, GraphNode, MiniRelationGraph, RelationGraph, RelationKind,
	RelationshipGraph, impact_color,
};

/// Asset focused when nothing is selected yet.
const DEFAULT_FOCUS: &str = "customer-db";

fn asset(
	id: &str,
	name: &str,
	kind: AssetKind,
	risk_score: Option<f32>,
	finding_count: Option<u32>,
) -> GraphNode {
	GraphNode {
		id: id.to_string(),
		name: name.to_string(),
		kind,
		risk_score,
		finding_count,
	}
}

fn relation(
	id: &str,
	source: &str,
	target: &str,
	kind: RelationKind,
	impact_weight: u8,
) -> GraphEdge {
	GraphEdge {
		id: id.to_string(),
		source: source.to_string(),
		target: target.to_string(),
		kind,
		impact_weight,
	}
}

/// Sample inventory, standing in for the asset service until it is wired up.
fn sample_graph() -> RelationshipGraph {
	RelationshipGraph {
		nodes: vec![
			asset("customer-db", "Customer DB", AssetKind::CrownJewel, Some(9.2), Some(4)),
			asset("payments-api", "Payments API", AssetKind::Repository, Some(7.5), Some(6)),
			asset("web-frontend", "Web Frontend", AssetKind::Repository, Some(4.1), Some(2)),
			asset("auth-service", "Auth Service", AssetKind::Service, Some(5.5), None),
			asset("deploy-bot", "Deploy Bot", AssetKind::Identity, Some(6.8), Some(1)),
			asset("artifact-store", "Artifact Store", AssetKind::DataStore, Some(3.0), None),
			asset("billing-saas", "Billing SaaS", AssetKind::from_tag("saas-vendor"), None, None),
		],
		edges: vec![
			relation("e1", "payments-api", "customer-db", RelationKind::CanAccess, 9),
			relation("e2", "auth-service", "customer-db", RelationKind::Protects, 8),
			relation("e3", "deploy-bot", "payments-api", RelationKind::CanAccess, 7),
			relation("e4", "web-frontend", "payments-api", RelationKind::DependsOn, 5),
			relation("e5", "payments-api", "auth-service", RelationKind::DependsOn, 6),
			relation("e6", "deploy-bot", "artifact-store", RelationKind::DeploysTo, 3),
			relation("e7", "web-frontend", "billing-saas", RelationKind::from_tag("syncs_with"), 2),
		],
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph = Signal::derive(move || sample_graph());
	let selected = RwSignal::new(Option::<String>::None);
	let selected_edge = RwSignal::new(Option::<String>::None);

	// The graph recenters on whichever asset is selected.
	let central = Signal::derive(move || {
		Some(selected.get().unwrap_or_else(|| DEFAULT_FOCUS.to_string()))
	});

	let on_node_click = Callback::new(move |id: String| {
		debug!("asset selected: {id}");
		selected_edge.set(None);
		selected.set(Some(id));
	});
	let on_edge_click = Callback::new(move |id: String| {
		debug!("relation selected: {id}");
		selected_edge.set(Some(id));
	});

	let edge_summary = move || {
		let graph = graph.get();
		selected_edge.get().and_then(|id| {
			let edge = graph.edges.iter().find(|e| e.id == id)?;
			let name_of = |id: &str| {
				graph
					.nodes
					.iter()
					.find(|n| n.id == id)
					.map(|n| n.name.clone())
					.unwrap_or_else(|| id.to_string())
			};
			Some(format!(
				"{} {} {} (impact {})",
				name_of(&edge.source),
				edge.kind.forward_label(),
				name_of(&edge.target),
				edge.impact_weight
			))
		})
	};

	let detail_panel = move || {
		let graph = graph.get();
		let Some(node) = selected
			.get()
			.and_then(|id| graph.nodes.iter().find(|n| n.id == id).cloned())
		else {
			return view! {
				<p style="color: #94a3b8; font-size: 13px;">
					"Select an asset to inspect its relationships."
				</p>
			}
			.into_any();
		};

		let name_of = |id: &str| {
			graph
				.nodes
				.iter()
				.find(|n| n.id == id)
				.map(|n| n.name.clone())
				.unwrap_or_else(|| id.to_string())
		};
		// Outbound relations read forward, inbound read reversed.
		let mut relations: Vec<(String, u8)> = graph
			.edges
			.iter()
			.filter(|e| e.source == node.id)
			.map(|e| {
				(
					format!("{} {}", e.kind.forward_label(), name_of(&e.target)),
					e.impact_weight,
				)
			})
			.collect();
		relations.extend(graph.edges.iter().filter(|e| e.target == node.id).map(|e| {
			(
				format!("{} {}", e.kind.reverse_label(), name_of(&e.source)),
				e.impact_weight,
			)
		}));

		let risk = node
			.risk_score
			.map(|score| format!("risk {score:.1}"))
			.unwrap_or_else(|| "risk n/a".to_string());
		let findings = node
			.finding_count
			.map(|count| format!("{count} findings"))
			.unwrap_or_else(|| "no findings".to_string());

		view! {
			<div>
				<h3 style="margin: 12px 0 2px; font-size: 14px; color: #f8fafc;">
					{node.name.clone()}
				</h3>
				<p style="margin: 0 0 8px; color: #94a3b8; font-size: 12px;">
					{format!("{}, {risk}, {findings}", node.kind.label())}
				</p>
				<ul style="list-style: none; margin: 0; padding: 0; font-size: 13px;">
					{relations
						.into_iter()
						.map(|(text, weight)| {
							view! {
								<li style="display: flex; align-items: center; gap: 6px; padding: 3px 0;">
									<span style=format!(
										"width: 8px; height: 8px; border-radius: 50%; background: {}; flex-shrink: 0;",
										impact_color(weight),
									)></span>
									<span>{text}</span>
								</li>
							}
						})
						.collect_view()}
				</ul>
			</div>
		}
		.into_any()
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div style="max-width: 1200px; margin: 0 auto; padding: 20px;">
				<header style="margin-bottom: 16px;">
					<h1 style="margin: 0; font-size: 22px; color: #f8fafc;">"Asset Atlas"</h1>
					<p style="margin: 4px 0 0; color: #94a3b8; font-size: 14px;">
						"Relationship map for the security asset inventory. \
						Click an asset to refocus the graph."
					</p>
				</header>
				<div style="display: flex; gap: 16px; align-items: stretch;">
					<div style="flex: 1; min-width: 0; height: 72vh;">
						<RelationGraph
							graph=graph
							central_node_id=central
							on_node_click=on_node_click
							on_edge_click=on_edge_click
						/>
					</div>
					<aside style="width: 300px; flex-shrink: 0; background: #1e293b; \
						border-radius: 8px; padding: 14px; color: #e2e8f0; align-self: flex-start;">
						<h2 style="margin: 0 0 10px; font-size: 15px; color: #f8fafc;">
							"Focused asset"
						</h2>
						<MiniRelationGraph
							graph=graph
							central_node_id=central
							width=272.0
							height=160.0
						/>
						{move || {
							edge_summary()
								.map(|text| {
									view! {
										<p style="margin: 10px 0 0; padding: 8px; background: #0f172a; \
											border-radius: 6px; font-size: 12px; color: #e2e8f0;">
											{text}
										</p>
									}
								})
						}}
						{detail_panel}
						<Show when=move || selected.get().is_some()>
							<button
								style="margin-top: 12px; padding: 6px 10px; border: 1px solid #334155; \
									border-radius: 6px; background: #0f172a; color: #e2e8f0; \
									font-size: 12px; cursor: pointer;"
								on:click=move |_| {
									selected.set(None);
									selected_edge.set(None);
								}
							>
								"Clear focus"
							</button>
						</Show>
					</aside>
				</div>
			</div>
		</ErrorBoundary>
	}
}
