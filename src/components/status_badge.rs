//! Header badge reporting backend liveness from `GET /api/status`.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::ApiStatus;

pub const STATUS_UNAVAILABLE: &str = "API indisponível";

#[cfg(any(test, feature = "csr"))]
fn status_label(status: Option<&ApiStatus>) -> String {
    match status {
        Some(s) if !s.status.is_empty() => format!("API: {}", s.status),
        _ => STATUS_UNAVAILABLE.to_owned(),
    }
}

#[cfg(any(test, feature = "csr"))]
fn status_title(status: Option<&ApiStatus>) -> String {
    status.map(|s| s.app.clone()).unwrap_or_default()
}

/// Fetches the status once on mount.
#[component]
pub fn StatusBadge() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let label = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let status = crate::net::api::fetch_status(&config).await;
        if status.is_none() {
            log::warn!("api status unavailable at {}", config.status_url());
        }
        label.set(status_label(status.as_ref()));
        title.set(status_title(status.as_ref()));
    });
    #[cfg(not(feature = "csr"))]
    let _ = config;

    view! {
        <span class="api-status" title=move || title.get()>
            {move || label.get()}
        </span>
    }
}
