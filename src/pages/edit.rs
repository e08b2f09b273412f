//! Edit page: loads one product by `?id=`, submits a full replacement.
//!
//! SYSTEM CONTEXT
//! ==============
//! A failed load disables the submit control for the rest of the page's
//! life. A `400` update carries an `erros` object keyed by label, a different
//! envelope from create's `errors` array.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use serde_json::Value;

use crate::components::message_area::{MessageArea, notify};
use crate::components::product_fields::ProductFields;
use crate::config::{ClientConfig, EDIT_MESSAGE_TTL};
use crate::net::api::{ApiError, UpdateOutcome};
use crate::net::types::Product;
use crate::state::messages::{Lifetime, MessageBody, MessageBoard, Severity, VALIDATION_HEADING};
use crate::state::product_form::ProductForm;
use crate::util::routes::{LIST_PATH, navigate_to, product_id_param};
use crate::util::timer::TimerScope;

pub const MISSING_ID_ON_LOAD: &str = "ID do produto não informado na URL.";
pub const MISSING_ID_ON_SUBMIT: &str = "ID do produto não informado.";
pub const NOT_FOUND: &str = "Produto não encontrado.";
pub const LOAD_FAILED: &str = "Erro ao carregar dados do produto.";
pub const INVALID_DATA: &str = "Dados inválidos. Verifique os campos do formulário.";
pub const UPDATED: &str = "Produto atualizado com sucesso!";
pub const UPDATE_FAILED: &str = "Erro de comunicação com o servidor ao atualizar o produto.";

/// Persistent message for a failed product load.
pub fn load_error_message(err: &ApiError) -> String {
    match err {
        ApiError::NotFound => NOT_FOUND.to_owned(),
        ApiError::Status(code) => format!("Erro ao buscar produto. Código: {code}"),
        ApiError::Transport(_) | ApiError::Decode(_) => LOAD_FAILED.to_owned(),
    }
}

/// What the page does once the initial load settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadFeedback {
    Populate(ProductForm),
    /// Show `text` and, when `disable_submit`, lock the form for the page's life.
    Fail { text: String, lifetime: Lifetime, disable_submit: bool },
}

/// Load outcome when the URL carries no `?id=`.
pub fn missing_id_feedback() -> LoadFeedback {
    LoadFeedback::Fail { text: MISSING_ID_ON_LOAD.to_owned(), lifetime: Lifetime::Persistent, disable_submit: true }
}

/// Map a product fetch to feedback. Every failure is persistent and locks submit.
pub fn load_feedback(result: &Result<Product, ApiError>) -> LoadFeedback {
    match result {
        Ok(product) => LoadFeedback::Populate(ProductForm::from_product(product)),
        Err(err) => {
            LoadFeedback::Fail { text: load_error_message(err), lifetime: Lifetime::Persistent, disable_submit: true }
        }
    }
}

fn apply_load_feedback(
    feedback: LoadFeedback,
    form: RwSignal<ProductForm>,
    messages: RwSignal<MessageBoard>,
    submit_disabled: RwSignal<bool>,
    timers: &TimerScope,
) {
    match feedback {
        LoadFeedback::Populate(values) => form.set(values),
        LoadFeedback::Fail { text, lifetime, disable_submit } => {
            notify(messages, timers, Severity::Error, MessageBody::Text(text), lifetime);
            if disable_submit {
                submit_disabled.set(true);
            }
        }
    }
}

/// What to show after an update attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitFeedback {
    /// Clear the area, then show the heading and one alert per entry.
    FieldErrors(Vec<String>),
    Notice { severity: Severity, text: &'static str, lifetime: Lifetime, redirect: bool },
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn entry_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `label: message` lines from an `erros` value, in backend order.
pub fn validation_lines(erros: &Value) -> Vec<String> {
    match erros {
        Value::Object(map) => map.iter().map(|(label, msg)| format!("{label}: {}", entry_text(msg))).collect(),
        Value::Array(items) => items.iter().enumerate().map(|(i, msg)| format!("{i}: {}", entry_text(msg))).collect(),
        _ => Vec::new(),
    }
}

pub fn update_feedback(result: &Result<UpdateOutcome, ApiError>) -> SubmitFeedback {
    match result {
        Ok(UpdateOutcome::Updated) => {
            SubmitFeedback::Notice { severity: Severity::Success, text: UPDATED, lifetime: Lifetime::Persistent, redirect: true }
        }
        Ok(UpdateOutcome::Invalid(body)) => match body.as_ref().and_then(|b| b.erros.as_ref()) {
            Some(erros) if is_truthy(erros) => SubmitFeedback::FieldErrors(validation_lines(erros)),
            _ => SubmitFeedback::Notice {
                severity: Severity::Error,
                text: INVALID_DATA,
                lifetime: Lifetime::Expires(EDIT_MESSAGE_TTL),
                redirect: false,
            },
        },
        Err(_) => SubmitFeedback::Notice {
            severity: Severity::Error,
            text: UPDATE_FAILED,
            lifetime: Lifetime::Expires(EDIT_MESSAGE_TTL),
            redirect: false,
        },
    }
}

#[cfg(feature = "csr")]
fn apply_feedback(feedback: SubmitFeedback, messages: RwSignal<MessageBoard>, timers: &TimerScope) {
    match feedback {
        SubmitFeedback::FieldErrors(lines) => {
            messages.update(|board| {
                board.clear();
                board.push(Severity::Error, MessageBody::text(VALIDATION_HEADING));
                for line in lines {
                    board.push(Severity::Error, MessageBody::Text(line));
                }
            });
        }
        SubmitFeedback::Notice { severity, text, lifetime, redirect } => {
            notify(messages, timers, severity, MessageBody::text(text), lifetime);
            if redirect {
                timers.schedule(crate::config::UPDATE_REDIRECT_DELAY, || navigate_to(LIST_PATH));
            }
        }
    }
}

#[cfg(feature = "csr")]
async fn load_product(
    config: ClientConfig,
    id: String,
    form: RwSignal<ProductForm>,
    messages: RwSignal<MessageBoard>,
    submit_disabled: RwSignal<bool>,
    timers: TimerScope,
) {
    let result = crate::net::api::fetch_product(&config, &id).await;
    if let Err(err) = &result {
        log::error!("failed to load product {id}: {err}");
    }
    apply_load_feedback(load_feedback(&result), form, messages, submit_disabled, &timers);
}

#[cfg(feature = "csr")]
async fn submit_update(
    config: ClientConfig,
    id: String,
    payload: crate::net::types::ProductPayload,
    messages: RwSignal<MessageBoard>,
    timers: TimerScope,
) {
    let result = crate::net::api::update_product(&config, &id, &payload).await;
    match &result {
        Err(err) => log::error!("failed to update product {id}: {err}"),
        Ok(UpdateOutcome::Invalid(_)) => log::warn!("update of product {id} rejected by validation"),
        Ok(UpdateOutcome::Updated) => log::info!("product {id} updated"),
    }
    apply_feedback(update_feedback(&result), messages, &timers);
}

#[component]
pub fn EditPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let query = use_query_map();
    let product_id = product_id_param(query.with_untracked(|q| q.get("id")));

    let form = RwSignal::new(ProductForm::default());
    let messages = RwSignal::new(MessageBoard::default());
    let submit_disabled = RwSignal::new(false);
    let timers = TimerScope::for_page();

    match product_id.clone() {
        None => apply_load_feedback(missing_id_feedback(), form, messages, submit_disabled, &timers),
        Some(id) => {
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(load_product(config.clone(), id, form, messages, submit_disabled, timers.clone()));
            #[cfg(not(feature = "csr"))]
            let _ = id;
        }
    }

    let submit_timers = timers.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        messages.update(MessageBoard::clear);
        let Some(id) = product_id.clone() else {
            notify(
                messages,
                &submit_timers,
                Severity::Error,
                MessageBody::text(MISSING_ID_ON_SUBMIT),
                Lifetime::Expires(EDIT_MESSAGE_TTL),
            );
            return;
        };
        let payload = form.get_untracked().to_payload();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(submit_update(config.clone(), id, payload, messages, submit_timers.clone()));
        #[cfg(not(feature = "csr"))]
        let _ = (&config, id, payload);
    };

    view! {
        <main class="container">
            <h1>"Editar Produto"</h1>
            <MessageArea board=messages id="mensagensEditar"/>
            <form id="formProdutoEditar" class="form-produto" on:submit=on_submit>
                <ProductFields form=form/>
                <div class="form-acoes">
                    <button class="btn btn-primary" type="submit" disabled=move || submit_disabled.get()>
                        "Salvar alterações"
                    </button>
                    <button class="btn btn-secondary" id="btnCancelar" type="button" on:click=move |_| navigate_to(LIST_PATH)>
                        "Cancelar"
                    </button>
                </div>
            </form>
        </main>
    }
}
