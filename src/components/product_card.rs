//! Card summarizing one product in the catalog list.

use leptos::prelude::*;

use crate::state::product_list::{ListAction, ProductCardView};

/// Renders a card; its edit/delete controls report `ListAction`s keyed by id.
#[component]
pub fn ProductCard(card: ProductCardView, on_action: Callback<ListAction>) -> impl IntoView {
    let actions = card.actions();
    let id = card.id;

    view! {
        <article class="produto-card">
            <div class="produto-header">
                <span class="produto-id">{format!("ID {id}")}</span>
                <h3 class="produto-nome">{card.name}</h3>
            </div>
            <div class="produto-linha">
                <span class="produto-label">"Fabricante:"</span>
                <span class="produto-valor">{card.manufacturer}</span>
            </div>
            <div class="produto-linha">
                <span class="produto-label">"Preço:"</span>
                <span class="produto-valor">{card.price}</span>
            </div>
            <div class="produto-linha">
                <span class="produto-label">"Quantidade:"</span>
                <span class="produto-valor">
                    {card.quantity}
                    {card.low_stock.then(|| view! { <span class="badge-low-inline">"Estoque baixo"</span> })}
                </span>
            </div>
            <div class="produto-linha">
                <span class="produto-label">"Descrição:"</span>
                <span class="produto-valor produto-valor-descricao">{card.description}</span>
            </div>
            <div class="produto-acoes">
                {actions
                    .into_iter()
                    .map(|control| {
                        view! {
                            <button
                                class=control.class
                                data-id=id.to_string()
                                on:click=move |_| on_action.run(control.action)
                            >
                                {control.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}
