use super::*;

fn filled() -> ProductForm {
    ProductForm {
        name: "  Teclado ".to_owned(),
        description: " Teclado mecânico ".to_owned(),
        price: "199.90".to_owned(),
        quantity: "4".to_owned(),
        manufacturer: "Acme ".to_owned(),
    }
}

#[test]
fn to_payload_trims_text_fields() {
    let payload = filled().to_payload();
    assert_eq!(payload.nome, "Teclado");
    assert_eq!(payload.descricao, "Teclado mecânico");
    assert_eq!(payload.fabricante, "Acme");
}

#[test]
fn to_payload_parses_numbers() {
    let payload = filled().to_payload();
    assert_eq!(payload.preco, Some(199.9));
    assert_eq!(payload.quantidade_estoque, Some(4));
}

#[test]
fn to_payload_maps_empty_numbers_to_none() {
    let form = ProductForm { price: String::new(), quantity: String::new(), ..filled() };
    let payload = form.to_payload();
    assert_eq!(payload.preco, None);
    assert_eq!(payload.quantidade_estoque, None);
}

#[test]
fn to_payload_keeps_zero_distinct_from_empty() {
    let form = ProductForm { price: "0".to_owned(), quantity: "0".to_owned(), ..filled() };
    let payload = form.to_payload();
    assert_eq!(payload.preco, Some(0.0));
    assert_eq!(payload.quantidade_estoque, Some(0));
}

#[test]
fn from_product_renders_missing_numbers_as_empty() {
    let product = Product {
        id: 3,
        nome: Some("Mouse".to_owned()),
        descricao: None,
        preco: None,
        quantidade_estoque: None,
        fabricante: Some("Acme".to_owned()),
    };
    let form = ProductForm::from_product(&product);
    assert_eq!(form.name, "Mouse");
    assert_eq!(form.description, "");
    assert_eq!(form.price, "");
    assert_eq!(form.quantity, "");
}

#[test]
fn from_product_renders_numbers() {
    let product = Product {
        id: 3,
        nome: None,
        descricao: None,
        preco: Some(10.5),
        quantidade_estoque: Some(0),
        fabricante: None,
    };
    let form = ProductForm::from_product(&product);
    assert_eq!(form.price, "10.5");
    assert_eq!(form.quantity, "0");
}

#[test]
fn default_form_is_blank() {
    let payload = ProductForm::default().to_payload();
    assert_eq!(payload, ProductPayload::default());
}
