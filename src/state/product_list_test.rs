use super::*;

fn product(id: i64, quantity: Option<i64>) -> Product {
    Product {
        id,
        nome: Some(format!("Produto {id}")),
        descricao: Some("Descrição longa".to_owned()),
        preco: Some(10.0),
        quantidade_estoque: quantity,
        fabricante: Some("Acme".to_owned()),
    }
}

// =============================================================
// Cards
// =============================================================

#[test]
fn card_formats_price_with_currency_and_comma() {
    let card = ProductCardView::from_product(&product(1, Some(10)));
    assert_eq!(card.price, "R$ 10,00");
    assert_eq!(card.quantity, "10");
    assert!(!card.low_stock);
}

#[test]
fn card_flags_low_stock_at_three() {
    assert!(ProductCardView::from_product(&product(1, Some(3))).low_stock);
    assert!(!ProductCardView::from_product(&product(1, Some(4))).low_stock);
    assert!(!ProductCardView::from_product(&product(1, None)).low_stock);
}

#[test]
fn card_missing_values_render_empty() {
    let mut p = product(9, None);
    p.preco = None;
    p.fabricante = None;
    let card = ProductCardView::from_product(&p);
    assert_eq!(card.price, "R$ ");
    assert_eq!(card.quantity, "");
    assert_eq!(card.manufacturer, "");
}

#[test]
fn card_actions_are_keyed_by_id() {
    let card = ProductCardView::from_product(&product(5, None));
    let actions = card.actions();
    assert_eq!(actions[0].action, ListAction::Edit(5));
    assert_eq!(actions[0].label, "Alterar");
    assert_eq!(actions[1].action, ListAction::Delete(5));
    assert_eq!(actions[1].label, "Excluir");
}

// =============================================================
// Loading
// =============================================================

#[test]
fn default_state_is_loading_with_closed_modal() {
    let state = ListState::default();
    assert_eq!(state.view, ListView::Loading);
    assert_eq!(state.placeholder(), Some(LOADING_TEXT));
    assert!(!state.modal_open());
}

#[test]
fn empty_result_shows_empty_placeholder() {
    let mut state = ListState::default();
    assert_eq!(state.apply_load(Ok(Vec::new())), None);
    assert_eq!(state.view, ListView::Empty);
    assert_eq!(state.placeholder(), Some(EMPTY_TEXT));
}

#[test]
fn loaded_result_renders_one_card_per_product() {
    let mut state = ListState::default();
    state.apply_load(Ok(vec![product(1, None), product(2, Some(1))]));
    let ListView::Loaded(cards) = &state.view else {
        panic!("expected loaded view");
    };
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].id, 2);
    assert_eq!(state.placeholder(), None);
}

#[test]
fn failed_result_sets_placeholder_and_message() {
    let mut state = ListState::default();
    let message = state.apply_load(Err(ApiError::Status(500)));
    assert_eq!(message, Some(LOAD_FAILED_MESSAGE));
    assert_eq!(state.placeholder(), Some(LOAD_FAILED_PLACEHOLDER));
}

#[test]
fn begin_load_resets_to_loading() {
    let mut state = ListState::default();
    state.apply_load(Ok(vec![product(1, None)]));
    state.begin_load();
    assert_eq!(state.view, ListView::Loading);
}

// =============================================================
// Delete modal
// =============================================================

#[test]
fn open_delete_remembers_target() {
    let mut state = ListState::default();
    state.open_delete(8);
    assert!(state.modal_open());
    assert_eq!(state.pending_delete(), Some(8));
}

#[test]
fn cancel_delete_closes_modal() {
    let mut state = ListState::default();
    state.open_delete(8);
    state.cancel_delete();
    assert!(!state.modal_open());
    assert_eq!(state.pending_delete(), None);
}

#[test]
fn finish_delete_success_reloads() {
    let mut state = ListState::default();
    state.open_delete(8);
    let follow = state.finish_delete(&Ok(()));
    assert_eq!(follow.severity, Severity::Success);
    assert_eq!(follow.text, "Produto excluído com sucesso!");
    assert!(follow.reload);
    assert!(!state.modal_open());
}

#[test]
fn finish_delete_not_found_still_closes_modal() {
    let mut state = ListState::default();
    state.open_delete(8);
    let follow = state.finish_delete(&Err(ApiError::NotFound));
    assert_eq!(follow.text, "Produto não encontrado para exclusão.");
    assert!(!follow.reload);
    assert!(!state.modal_open());
    assert_eq!(state.pending_delete(), None);
}

#[test]
fn finish_delete_other_status_includes_code() {
    let mut state = ListState::default();
    state.open_delete(8);
    let follow = state.finish_delete(&Err(ApiError::Status(500)));
    assert_eq!(follow.severity, Severity::Error);
    assert_eq!(follow.text, "Erro ao excluir produto. Código: 500");
}

#[test]
fn finish_delete_transport_failure_is_generic() {
    let follow = delete_feedback(&Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(follow.text, "Erro de comunicação com o servidor ao excluir.");
    assert!(!follow.reload);
}
