//! REST helpers for the `/api/produtos` backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a transport error, since these endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A request that never completed is `ApiError::Transport`. A completed
//! request with an unwanted status is `NotFound`/`Status`. Responses the
//! page must interpret (validation envelopes) come back as `Ok` outcomes so
//! callers can tell "the backend said no" from "the call failed".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiStatus, CreateErrorBody, Product, ProductPayload, UpdateErrorBody};
use crate::config::ClientConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("product not found")]
    NotFound,
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Result of a create request that reached the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum CreateOutcome {
    Created(Product),
    /// Non-success status. The body is `None` when it was not the expected envelope.
    Rejected(Option<CreateErrorBody>),
}

/// Result of an update request that reached the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateOutcome {
    Updated,
    /// `400` response. The body is `None` when it could not be parsed.
    Invalid(Option<UpdateErrorBody>),
}

/// Map a non-success status to an error.
pub fn status_error(status: u16) -> ApiError {
    if status == 404 { ApiError::NotFound } else { ApiError::Status(status) }
}

/// Only `204 No Content` counts as a successful delete.
pub fn classify_delete_status(status: u16) -> Result<(), ApiError> {
    if status == 204 { Ok(()) } else { Err(status_error(status)) }
}

/// Interpret a list response body. Anything other than an array is treated
/// as an empty catalog.
pub fn products_from_value(value: serde_json::Value) -> Result<Vec<Product>, ApiError> {
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
        _ => Ok(Vec::new()),
    }
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "csr")]
fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

/// Create a product via `POST /api/produtos`.
///
/// # Errors
///
/// Returns `Transport` if the request did not complete, or `Decode` if a
/// success response did not carry a product.
pub async fn create_product(config: &ClientConfig, payload: &ProductPayload) -> Result<CreateOutcome, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.products_url())
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            log::warn!("create rejected with status {}", resp.status());
            return Ok(CreateOutcome::Rejected(resp.json::<CreateErrorBody>().await.ok()));
        }
        let product = resp.json::<Product>().await.map_err(decode)?;
        Ok(CreateOutcome::Created(product))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, payload);
        Err(unavailable())
    }
}

/// Fetch one product via `GET /api/produtos/{id}`.
///
/// # Errors
///
/// Returns `NotFound` for `404`, `Status` for other non-success codes.
pub async fn fetch_product(config: &ClientConfig, id: &str) -> Result<Product, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&config.product_url(id))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.json::<Product>().await.map_err(decode)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, id);
        Err(unavailable())
    }
}

/// Replace a product via `PUT /api/produtos/{id}`.
///
/// # Errors
///
/// Returns `NotFound`/`Status` for non-success codes other than `400`.
pub async fn update_product(config: &ClientConfig, id: &str, payload: &ProductPayload) -> Result<UpdateOutcome, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::put(&config.product_url(id))
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if resp.status() == 400 {
            return Ok(UpdateOutcome::Invalid(resp.json::<UpdateErrorBody>().await.ok()));
        }
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        Ok(UpdateOutcome::Updated)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, id, payload);
        Err(unavailable())
    }
}

/// Fetch the full catalog via `GET /api/produtos`.
///
/// # Errors
///
/// Returns `Status`/`NotFound` for non-success codes and `Decode` when the
/// array does not hold products.
pub async fn list_products(config: &ClientConfig) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&config.products_url())
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        let value = resp.json::<serde_json::Value>().await.map_err(decode)?;
        products_from_value(value)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(unavailable())
    }
}

/// Delete a product via `DELETE /api/produtos/{id}`.
///
/// # Errors
///
/// Returns `NotFound` for `404` and `Status` for anything but `204`.
pub async fn delete_product(config: &ClientConfig, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&config.product_url(id))
            .send()
            .await
            .map_err(transport)?;
        classify_delete_status(resp.status())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, id);
        Err(unavailable())
    }
}

/// Fetch backend liveness from `GET /api/status`.
/// Returns `None` on any failure or outside the browser.
pub async fn fetch_status(config: &ClientConfig) -> Option<ApiStatus> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&config.status_url()).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ApiStatus>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        None
    }
}
