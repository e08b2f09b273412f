//! Client configuration resolved once at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend may live on another origin. Hosting pages can set a global
//! `window.API_BASE`; otherwise requests go to the page's own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Name of the optional window global overriding the backend origin.
pub const API_BASE_GLOBAL: &str = "API_BASE";

/// Delay between a successful create and the redirect to the list.
pub const CREATE_REDIRECT_DELAY: Duration = Duration::from_secs(3);
/// Delay between a successful update and the redirect to the list.
pub const UPDATE_REDIRECT_DELAY: Duration = Duration::from_secs(4);
/// Lifetime of non-persistent messages on the edit page.
pub const EDIT_MESSAGE_TTL: Duration = Duration::from_secs(7);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    /// Build the config from an optional override and the page origin.
    ///
    /// Blank overrides are ignored. Trailing slashes are trimmed before
    /// `/api` is appended.
    pub fn from_parts(override_base: Option<&str>, origin: &str) -> Self {
        let base = override_base
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(origin)
            .trim_end_matches('/');
        Self { api_base: format!("{base}/api") }
    }

    /// Resolve the config from the browser window.
    pub fn from_window() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Self::from_parts(None, "");
            };
            let override_base = js_sys::Reflect::get(&window, &API_BASE_GLOBAL.into())
                .ok()
                .and_then(|v| v.as_string());
            let origin = window.location().origin().unwrap_or_default();
            let config = Self::from_parts(override_base.as_deref(), &origin);
            log::debug!("api base resolved to {}", config.api_base);
            config
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::from_parts(None, "")
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}/produtos", self.api_base)
    }

    pub fn product_url(&self, id: &str) -> String {
        format!("{}/produtos/{id}", self.api_base)
    }

    pub fn status_url(&self) -> String {
        format!("{}/status", self.api_base)
    }
}
