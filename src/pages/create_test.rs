use super::*;
use crate::net::types::FieldError;

fn field_error(field: &str, message: &str) -> FieldError {
    FieldError { field: Some(field.to_owned()), object_name: None, default_message: Some(message.to_owned()) }
}

#[test]
fn field_label_maps_known_fields() {
    assert_eq!(field_label("nome"), "Nome");
    assert_eq!(field_label("descricao"), "Descrição");
    assert_eq!(field_label("preco"), "Preço");
    assert_eq!(field_label("quantidadeEstoque"), "Quantidade");
    assert_eq!(field_label("fabricante"), "Fabricante");
}

#[test]
fn field_label_passes_unknown_through() {
    assert_eq!(field_label("sku"), "sku");
}

#[test]
fn rejection_message_renders_labelled_lines() {
    let body = CreateErrorBody { errors: Some(vec![field_error("nome", "required")]) };
    let message = rejection_message(Some(&body));
    assert_eq!(
        message,
        MessageBody::Formatted { heading: VALIDATION_HEADING.to_owned(), lines: vec!["Nome: required".to_owned()] }
    );
}

#[test]
fn rejection_message_from_backend_json() {
    let body: CreateErrorBody = serde_json::from_value(serde_json::json!({
        "errors": [
            { "field": "nome", "defaultMessage": "required" },
            { "field": "quantidadeEstoque", "defaultMessage": "A quantidade deve ser maior que zero." },
            { "objectName": "produto", "defaultMessage": "inválido" }
        ]
    }))
    .unwrap();
    let MessageBody::Formatted { lines, .. } = rejection_message(Some(&body)) else {
        panic!("expected formatted message");
    };
    assert_eq!(
        lines,
        vec![
            "Nome: required".to_owned(),
            "Quantidade: A quantidade deve ser maior que zero.".to_owned(),
            "produto: inválido".to_owned(),
        ]
    );
}

#[test]
fn rejection_message_without_body_is_heading_only() {
    let message = rejection_message(None);
    assert_eq!(message, MessageBody::Formatted { heading: VALIDATION_HEADING.to_owned(), lines: Vec::new() });
}

#[test]
fn rejection_message_with_empty_errors_is_heading_only() {
    let body = CreateErrorBody { errors: Some(Vec::new()) };
    let MessageBody::Formatted { lines, .. } = rejection_message(Some(&body)) else {
        panic!("expected formatted message");
    };
    assert!(lines.is_empty());
}

#[test]
fn rejection_message_keeps_markup_as_text() {
    let body = CreateErrorBody { errors: Some(vec![field_error("nome", "<script>x</script>")]) };
    assert_eq!(rejection_message(Some(&body)).plain(), format!("{VALIDATION_HEADING}\nNome: <script>x</script>"));
}

#[test]
fn created_message_includes_id() {
    assert_eq!(created_message(12), "Produto salvo com sucesso! ID: 12. Você será redirecionado em breve!");
}
