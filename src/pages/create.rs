//! Create page: submits a new product and redirects to the list.
//!
//! SYSTEM CONTEXT
//! ==============
//! A rejected create carries an `errors` array of field objects. Known field
//! ids are shown with their form labels; unknown ids are shown as-is.

#[cfg(test)]
#[path = "create_test.rs"]
mod create_test;

use leptos::prelude::*;

use crate::components::message_area::MessageArea;
use crate::components::product_fields::ProductFields;
use crate::config::ClientConfig;
use crate::net::types::CreateErrorBody;
use crate::state::messages::{MessageBody, MessageBoard, VALIDATION_HEADING};
use crate::state::product_form::ProductForm;
use crate::util::timer::TimerScope;

pub const CREATE_TRANSPORT_ERROR: &str = "Erro de comunicação com o servidor. Tente novamente.";

/// Form label for a backend field id; unknown ids pass through.
pub fn field_label(field: &str) -> &str {
    match field {
        "nome" => "Nome",
        "descricao" => "Descrição",
        "preco" => "Preço",
        "quantidadeEstoque" => "Quantidade",
        "fabricante" => "Fabricante",
        other => other,
    }
}

/// Build the error block for a rejected create. Without a usable `errors`
/// array only the heading is shown.
pub fn rejection_message(body: Option<&CreateErrorBody>) -> MessageBody {
    let lines = body
        .and_then(|b| b.errors.as_ref())
        .map(|errors| {
            errors
                .iter()
                .map(|e| format!("{}: {}", field_label(e.key()), e.default_message.as_deref().unwrap_or_default()))
                .collect()
        })
        .unwrap_or_default();
    MessageBody::Formatted { heading: VALIDATION_HEADING.to_owned(), lines }
}

pub fn created_message(id: i64) -> String {
    format!("Produto salvo com sucesso! ID: {id}. Você será redirecionado em breve!")
}

#[cfg(feature = "csr")]
async fn submit_create(
    config: ClientConfig,
    payload: crate::net::types::ProductPayload,
    form: RwSignal<ProductForm>,
    messages: RwSignal<MessageBoard>,
    timers: TimerScope,
) {
    use crate::components::message_area::notify;
    use crate::config::CREATE_REDIRECT_DELAY;
    use crate::net::api::{CreateOutcome, create_product};
    use crate::state::messages::{Lifetime, Severity};
    use crate::util::routes::{LIST_PATH, navigate_to};

    match create_product(&config, &payload).await {
        Ok(CreateOutcome::Rejected(body)) => {
            notify(messages, &timers, Severity::Error, rejection_message(body.as_ref()), Lifetime::Persistent);
        }
        Ok(CreateOutcome::Created(product)) => {
            log::info!("product {} created", product.id);
            notify(
                messages,
                &timers,
                Severity::Success,
                MessageBody::Text(created_message(product.id)),
                Lifetime::Persistent,
            );
            form.set(ProductForm::default());
            timers.schedule(CREATE_REDIRECT_DELAY, || navigate_to(LIST_PATH));
        }
        Err(err) => {
            log::error!("failed to save product: {err}");
            notify(messages, &timers, Severity::Error, MessageBody::text(CREATE_TRANSPORT_ERROR), Lifetime::Persistent);
        }
    }
}

#[component]
pub fn CreatePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let form = RwSignal::new(ProductForm::default());
    let messages = RwSignal::new(MessageBoard::default());
    let timers = TimerScope::for_page();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        messages.update(MessageBoard::clear);
        let payload = form.get_untracked().to_payload();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(submit_create(config.clone(), payload, form, messages, timers.clone()));
        #[cfg(not(feature = "csr"))]
        let _ = (&config, &timers, payload);
    };

    view! {
        <main class="container">
            <h1>"Cadastro de Produto"</h1>
            <MessageArea board=messages/>
            <form id="formProduto" class="form-produto" on:submit=on_submit>
                <ProductFields form=form/>
                <button class="btn btn-primary" type="submit">
                    "Salvar"
                </button>
            </form>
        </main>
    }
}
