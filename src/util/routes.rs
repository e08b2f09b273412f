//! Route paths for the three catalog pages.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LIST_PATH: &str = "/produtos";
pub const CREATE_PATH: &str = "/produtos/novo";
pub const EDIT_PATH: &str = "/produtos/editar";

/// Edit page URL carrying the product id as a query parameter.
pub fn edit_href(id: i64) -> String {
    format!("{EDIT_PATH}?id={id}")
}

/// Extract the product id from the edit page query value.
/// Blank values count as missing.
pub fn product_id_param(raw: Option<String>) -> Option<String> {
    raw.map(|id| id.trim().to_owned()).filter(|id| !id.is_empty())
}

/// Leave the current page with a full browser navigation.
pub fn navigate_to(path: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(path) {
            log::error!("navigation to {path} failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}
