//! Wire types exchanged with the `/api/produtos` backend.
//!
//! DESIGN
//! ======
//! The backend reports validation failures in two envelopes: create returns
//! an `errors` array of field objects, update returns an `erros` object keyed
//! by label. Both are kept as distinct types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A product record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub preco: Option<f64>,
    #[serde(default, rename = "quantidadeEstoque")]
    pub quantidade_estoque: Option<i64>,
    #[serde(default)]
    pub fabricante: Option<String>,
}

/// Request body for create (`POST`) and full replacement (`PUT`).
///
/// Empty numeric inputs serialize as `null`, never omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductPayload {
    pub nome: String,
    pub descricao: String,
    pub preco: Option<f64>,
    #[serde(rename = "quantidadeEstoque")]
    pub quantidade_estoque: Option<i64>,
    pub fabricante: String,
}

/// One entry of the create endpoint's `errors` array.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default, rename = "objectName")]
    pub object_name: Option<String>,
    #[serde(default, rename = "defaultMessage", alias = "message")]
    pub default_message: Option<String>,
}

impl FieldError {
    /// Field identifier, falling back to the object name.
    pub fn key(&self) -> &str {
        self.field
            .as_deref()
            .filter(|f| !f.is_empty())
            .or(self.object_name.as_deref())
            .unwrap_or_default()
    }
}

/// Error body returned by a rejected create.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CreateErrorBody {
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
}

/// Error body returned by a `400` update: `erros` maps label to message.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UpdateErrorBody {
    #[serde(default)]
    pub erros: Option<serde_json::Value>,
}

/// Payload of `GET /api/status`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub app: String,
    #[serde(default)]
    pub status: String,
}
