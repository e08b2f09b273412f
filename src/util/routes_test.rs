use super::*;

#[test]
fn edit_href_uses_query_parameter() {
    assert_eq!(edit_href(42), "/produtos/editar?id=42");
}

#[test]
fn product_id_param_requires_value() {
    assert_eq!(product_id_param(None), None);
    assert_eq!(product_id_param(Some(String::new())), None);
    assert_eq!(product_id_param(Some("  ".to_owned())), None);
}

#[test]
fn product_id_param_trims_value() {
    assert_eq!(product_id_param(Some(" 7 ".to_owned())), Some("7".to_owned()));
}

#[test]
fn page_paths_share_list_prefix() {
    assert!(CREATE_PATH.starts_with(LIST_PATH));
    assert!(EDIT_PATH.starts_with(LIST_PATH));
}
