//! Confirmation overlay shown before deleting a product.

use leptos::prelude::*;

#[component]
pub fn DeleteModal(product_id: i64, on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-overlay" id="modalExcluir" role="dialog" aria-modal="true">
            <div class="modal">
                <h3>"Excluir produto"</h3>
                <p>
                    "Tem certeza que deseja excluir o produto ID "
                    <strong id="modalIdProduto">{product_id}</strong>
                    "?"
                </p>
                <div class="modal-acoes">
                    <button class="btn btn-secondary" id="btnCancelarExcluir" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn-danger" id="btnConfirmarExcluir" on:click=move |_| on_confirm.run(())>
                        "Excluir"
                    </button>
                </div>
            </div>
        </div>
    }
}
