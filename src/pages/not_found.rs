use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div style="display: flex; flex-direction: column; align-items: center; \
			justify-content: center; height: 100vh; color: #e2e8f0;">
			<h1 style="margin: 0; font-size: 48px;">"404"</h1>
			<p style="color: #94a3b8;">"This page does not exist."</p>
			<a href="/" style="color: #3b82f6;">"Back to the asset map"</a>
		</div>
	}
}
