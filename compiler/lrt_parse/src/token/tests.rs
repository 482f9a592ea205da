use pretty_assertions::assert_eq;

use super::*;

fn symbol_table() -> Vec<String> {
    vec!["x".to_owned(), "42".to_owned()]
}

#[test]
fn resolves_indexed_entries() {
    let pif = [
        PifEntry::new("id", Some(0)),
        PifEntry::new("=", None),
        PifEntry::new("constant", Some(1)),
    ];
    let tokens = resolve_tokens(&pif, &symbol_table()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        tokens,
        vec![
            Token::with_value("id", "x"),
            Token::new("="),
            Token::with_value("constant", "42"),
        ]
    );
}

#[test]
fn missing_index_is_unresolved() {
    let pif = [PifEntry::new("=", None), PifEntry::new("id", Some(7))];
    assert_eq!(
        resolve_tokens(&pif, &symbol_table()),
        Err(ParseError::UnresolvedToken {
            position: 1,
            index: 7
        })
    );
}

#[test]
fn slices_and_maps_are_symbol_tables() {
    let table = symbol_table();
    assert_eq!(table.as_slice().lookup(1), Some("42"));
    assert_eq!(table.as_slice().lookup(2), None);

    let mut map: FxHashMap<usize, String> = FxHashMap::default();
    map.insert(10, "y".to_owned());
    let pif = [PifEntry::new("id", Some(10))];
    let tokens = resolve_tokens(&pif, &map).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(tokens, vec![Token::with_value("id", "y")]);
}

#[test]
fn token_text_prefers_value() {
    assert_eq!(Token::with_value("id", "x").text(), "x");
    assert_eq!(Token::new("+").text(), "+");
}
