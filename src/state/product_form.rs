//! Raw form inputs shared by the create and edit pages.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use crate::net::types::{Product, ProductPayload};
use crate::util::format::{input_value, parse_price_input, parse_quantity_input};

/// Current text of each form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub manufacturer: String,
}

impl ProductForm {
    /// Populate inputs from a stored product. Missing values become empty inputs.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.nome.clone().unwrap_or_default(),
            description: product.descricao.clone().unwrap_or_default(),
            price: input_value(product.preco),
            quantity: input_value(product.quantidade_estoque),
            manufacturer: product.fabricante.clone().unwrap_or_default(),
        }
    }

    /// Build the request body. Text is trimmed; empty numeric inputs are `None`.
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            nome: self.name.trim().to_owned(),
            descricao: self.description.trim().to_owned(),
            preco: parse_price_input(&self.price),
            quantidade_estoque: parse_quantity_input(&self.quantity),
            fabricante: self.manufacturer.trim().to_owned(),
        }
    }
}
