//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::status_badge::StatusBadge;
use crate::config::ClientConfig;
use crate::pages::{create::CreatePage, edit::EditPage, list::ListPage};
use crate::util::routes::{CREATE_PATH, LIST_PATH};

/// Root application component.
///
/// Resolves client config once and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::from_window());

    view! {
        <Title text="Why Not Data - Produtos"/>

        <Router>
            <header class="topbar">
                <span class="topbar__brand">"Why Not Data"</span>
                <nav class="topbar__nav">
                    <A href=LIST_PATH>"Produtos"</A>
                    <A href=CREATE_PATH>"Novo produto"</A>
                </nav>
                <StatusBadge/>
            </header>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=ListPage/>
                <Route path=StaticSegment("produtos") view=ListPage/>
                <Route path=(StaticSegment("produtos"), StaticSegment("novo")) view=CreatePage/>
                <Route path=(StaticSegment("produtos"), StaticSegment("editar")) view=EditPage/>
            </Routes>
        </Router>
    }
}
