//! Form inputs for a product, shared by the create and edit pages.

use leptos::prelude::*;

use crate::state::product_form::ProductForm;

#[component]
pub fn ProductFields(form: RwSignal<ProductForm>) -> impl IntoView {
    view! {
        <label for="nome">"Nome"</label>
        <input
            id="nome"
            type="text"
            prop:value=move || form.with(|f| f.name.clone())
            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
        />

        <label for="descricao">"Descrição"</label>
        <textarea
            id="descricao"
            prop:value=move || form.with(|f| f.description.clone())
            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
        ></textarea>

        <label for="preco">"Preço"</label>
        <input
            id="preco"
            type="number"
            step="0.01"
            prop:value=move || form.with(|f| f.price.clone())
            on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
        />

        <label for="quantidade">"Quantidade"</label>
        <input
            id="quantidade"
            type="number"
            step="1"
            prop:value=move || form.with(|f| f.quantity.clone())
            on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
        />

        <label for="fabricante">"Fabricante"</label>
        <input
            id="fabricante"
            type="text"
            prop:value=move || form.with(|f| f.manufacturer.clone())
            on:input=move |ev| form.update(|f| f.manufacturer = event_target_value(&ev))
        />
    }
}
