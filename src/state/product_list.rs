//! List page state: catalog view model and the pending-delete modal.
//!
//! DESIGN
//! ======
//! Cards are re-derived from the fetched records on every load, and each card
//! exposes its actions as data keyed by product id. The id awaiting delete
//! confirmation lives here instead of a free variable, and the modal is open
//! exactly when it is set.

#[cfg(test)]
#[path = "product_list_test.rs"]
mod product_list_test;

use super::messages::Severity;
use crate::net::api::ApiError;
use crate::net::types::Product;
use crate::util::format::{format_price, input_value, is_low_stock};

pub const LOADING_TEXT: &str = "Carregando produtos...";
pub const EMPTY_TEXT: &str = "Nenhum produto cadastrado.";
pub const LOAD_FAILED_PLACEHOLDER: &str = "Erro ao carregar a lista de produtos.";
pub const LOAD_FAILED_MESSAGE: &str = "Erro ao carregar a lista de produtos. Tente novamente.";

/// User intent emitted by a card control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListAction {
    Edit(i64),
    Delete(i64),
}

/// A card control bound to one product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardAction {
    pub label: &'static str,
    pub class: &'static str,
    pub action: ListAction,
}

/// Display-ready summary of one product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: i64,
    pub name: String,
    pub manufacturer: String,
    pub price: String,
    pub quantity: String,
    pub low_stock: bool,
    pub description: String,
}

impl ProductCardView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.nome.clone().unwrap_or_default(),
            manufacturer: product.fabricante.clone().unwrap_or_default(),
            price: format!("R$ {}", format_price(product.preco)),
            quantity: input_value(product.quantidade_estoque),
            low_stock: is_low_stock(product.quantidade_estoque),
            description: product.descricao.clone().unwrap_or_default(),
        }
    }

    pub fn actions(&self) -> [CardAction; 2] {
        [
            CardAction { label: "Alterar", class: "btn btn-table btn-edit", action: ListAction::Edit(self.id) },
            CardAction { label: "Excluir", class: "btn btn-table btn-delete", action: ListAction::Delete(self.id) },
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    #[default]
    Loading,
    Failed,
    Empty,
    Loaded(Vec<ProductCardView>),
}

/// What the page does after a delete attempt settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteFollowUp {
    pub severity: Severity,
    pub text: String,
    pub reload: bool,
}

/// Map a delete result to feedback. Only a confirmed delete reloads the list.
pub fn delete_feedback(result: &Result<(), ApiError>) -> DeleteFollowUp {
    let (severity, text, reload) = match result {
        Ok(()) => (Severity::Success, "Produto excluído com sucesso!".to_owned(), true),
        Err(ApiError::NotFound) => (Severity::Error, "Produto não encontrado para exclusão.".to_owned(), false),
        Err(ApiError::Status(code)) => (Severity::Error, format!("Erro ao excluir produto. Código: {code}"), false),
        Err(ApiError::Transport(_) | ApiError::Decode(_)) => {
            (Severity::Error, "Erro de comunicação com o servidor ao excluir.".to_owned(), false)
        }
    };
    DeleteFollowUp { severity, text, reload }
}

#[derive(Clone, Debug, Default)]
pub struct ListState {
    pub view: ListView,
    pending_delete: Option<i64>,
}

impl ListState {
    pub fn begin_load(&mut self) {
        self.view = ListView::Loading;
    }

    /// Apply a list fetch result. Returns the message to show on failure.
    pub fn apply_load(&mut self, result: Result<Vec<Product>, ApiError>) -> Option<&'static str> {
        match result {
            Ok(products) if products.is_empty() => {
                self.view = ListView::Empty;
                None
            }
            Ok(products) => {
                self.view = ListView::Loaded(products.iter().map(ProductCardView::from_product).collect());
                None
            }
            Err(_) => {
                self.view = ListView::Failed;
                Some(LOAD_FAILED_MESSAGE)
            }
        }
    }

    pub fn open_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn modal_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Close the modal and forget the target, whatever the outcome.
    pub fn finish_delete(&mut self, result: &Result<(), ApiError>) -> DeleteFollowUp {
        self.pending_delete = None;
        delete_feedback(result)
    }

    /// Placeholder text for non-loaded views.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.view {
            ListView::Loading => Some(LOADING_TEXT),
            ListView::Failed => Some(LOAD_FAILED_PLACEHOLDER),
            ListView::Empty => Some(EMPTY_TEXT),
            ListView::Loaded(_) => None,
        }
    }
}
