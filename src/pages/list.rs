//! List page: renders the catalog and confirms deletes in a modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every load and every successful delete re-fetches the whole collection
//! and re-derives the card view models, so card controls always refer to
//! current records.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::delete_modal::DeleteModal;
use crate::components::message_area::MessageArea;
use crate::components::product_card::ProductCard;
use crate::config::ClientConfig;
use crate::state::messages::MessageBoard;
use crate::state::product_list::{ListAction, ListState, ListView};
use crate::util::routes::{edit_href, navigate_to};

#[cfg(feature = "csr")]
async fn load_list(config: &ClientConfig, state: RwSignal<ListState>, messages: RwSignal<MessageBoard>) {
    use crate::state::messages::{MessageBody, Severity};

    messages.update(MessageBoard::clear);
    state.update(ListState::begin_load);
    let result = crate::net::api::list_products(config).await;
    if let Err(err) = &result {
        log::error!("failed to load products: {err}");
    }
    if let Some(text) = state.try_update(|s| s.apply_load(result)).flatten() {
        messages.update(|board| {
            board.push(Severity::Error, MessageBody::text(text));
        });
    }
}

#[cfg(feature = "csr")]
async fn confirm_delete(config: ClientConfig, id: i64, state: RwSignal<ListState>, messages: RwSignal<MessageBoard>) {
    use crate::state::messages::MessageBody;

    let result = crate::net::api::delete_product(&config, &id.to_string()).await;
    if let Err(err) = &result {
        log::error!("failed to delete product {id}: {err}");
    }
    let Some(follow_up) = state.try_update(|s| s.finish_delete(&result)) else {
        return;
    };
    if follow_up.reload {
        load_list(&config, state, messages).await;
    }
    messages.update(|board| {
        board.push(follow_up.severity, MessageBody::Text(follow_up.text));
    });
}

#[component]
pub fn ListPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let state = RwSignal::new(ListState::default());
    let messages = RwSignal::new(MessageBoard::default());

    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move { load_list(&config, state, messages).await });
    }

    let on_action = Callback::new(move |action: ListAction| match action {
        ListAction::Edit(id) => navigate_to(&edit_href(id)),
        ListAction::Delete(id) => state.update(|s| s.open_delete(id)),
    });

    let on_cancel = Callback::new(move |()| state.update(ListState::cancel_delete));

    let on_confirm = Callback::new(move |()| {
        let Some(id) = state.with_untracked(ListState::pending_delete) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(confirm_delete(config.clone(), id, state, messages));
        #[cfg(not(feature = "csr"))]
        let _ = (&config, id);
    });

    view! {
        <main class="container">
            <h1>"Produtos cadastrados"</h1>
            <MessageArea board=messages id="mensagensLista"/>
            <div id="listaProdutos" class="lista-produtos">
                {move || {
                    state
                        .with(|s| match &s.view {
                            ListView::Loaded(cards) => cards
                                .iter()
                                .cloned()
                                .map(|card| view! { <ProductCard card=card on_action=on_action/> })
                                .collect::<Vec<_>>()
                                .into_any(),
                            _ => view! { <p>{s.placeholder().unwrap_or_default()}</p> }.into_any(),
                        })
                }}
            </div>
            {move || {
                state
                    .with(ListState::pending_delete)
                    .map(|id| view! { <DeleteModal product_id=id on_confirm=on_confirm on_cancel=on_cancel/> })
            }}
        </main>
    }
}
