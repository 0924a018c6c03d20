#[cfg(test)]
use super::*;

#[test]
fn test_parse_basic_document() {
    let input = r#"
# two populations and a projection between them
{
    'exc_layer': {
        'size': 4000,
        'cell_type': 'IF_cond_exp',
        'record': True,
    },
    'inh_layer': {
        'size': 1000,
        'cell_type': 'IF_cond_exp',
    },
    'weight': 0.004,
}
"#;

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let root = parser.parse_document().expect("Failed to parse document");

    println!("--- Parsed Document ---");
    println!("{:#?}", root);

    let entries = root.as_mapping().expect("Expected root to be a mapping");
    assert_eq!(entries.len(), 3);

    let exc = entries["exc_layer"].as_mapping().expect("Expected 'exc_layer' to be a mapping");
    assert_eq!(exc["size"], Value::Number(4000.0));
    assert_eq!(exc["cell_type"], Value::String("IF_cond_exp".into()));
    assert_eq!(exc["record"], Value::Bool(true));
}

#[test]
fn test_key_order_is_preserved() {
    let input = "{'gamma': 1, 'alpha': 2, 'beta': 3}";

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let root = parser.parse_document().expect("Failed to parse document");

    let keys: Vec<&String> = root.as_mapping().unwrap().keys().collect();
    assert_eq!(keys, vec!["gamma", "alpha", "beta"]);
}

#[test]
fn test_parse_sequences() {
    let input = r#"
{
    'recorded_variables': ['v', 'gsyn_exc'],
    'sheets': [
        {'name': 'V1'},
        {'name': 'LGN'},
    ],
    'empty': [],
}
"#;

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let root = parser.parse_document().expect("Failed to parse document");

    let entries = root.as_mapping().unwrap();

    let vars = entries["recorded_variables"].as_sequence().expect("Expected a sequence");
    assert_eq!(vars.len(), 2);
    assert_eq!(vars[0], Value::String("v".into()));

    let sheets = entries["sheets"].as_sequence().unwrap();
    assert_eq!(sheets.len(), 2);
    assert!(matches!(sheets[0], Value::Mapping(_)));

    assert!(matches!(&entries["empty"], Value::Sequence(items) if items.is_empty()));
}

#[test]
fn test_parse_reference() {
    let input = "{'conn': ref('inh_layer.InhExcConnection')}";

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let root = parser.parse_document().expect("Failed to parse document");

    let entries = root.as_mapping().unwrap();
    match &entries["conn"] {
        Value::Reference(path) => {
            assert_eq!(path, &["inh_layer".to_string(), "InhExcConnection".to_string()]);
        }
        other => panic!("Expected 'conn' to be a Reference, got {:?}", other),
    }
}

#[test]
fn test_parse_resource_link() {
    let input = r#"{'cell_params': url("components/exc_cell.axon")}"#;

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let root = parser.parse_document().expect("Failed to parse document");

    let entries = root.as_mapping().unwrap();
    match &entries["cell_params"] {
        Value::ResourceLink(path) => assert_eq!(path, "components/exc_cell.axon"),
        other => panic!("Expected 'cell_params' to be a ResourceLink, got {:?}", other),
    }
}

#[test]
fn test_scalar_variety() {
    let input = r#"
{
    'name': 'exc',
    'v_rest': -70.0,
    'tau_syn': 1e-3,
    'plastic': False,
    'noise': None,
}
"#;

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let root = parser.parse_document().expect("Failed to parse document");

    let entries = root.as_mapping().unwrap();
    assert_eq!(entries["v_rest"], Value::Number(-70.0));
    assert_eq!(entries["tau_syn"], Value::Number(1e-3));
    assert_eq!(entries["plastic"], Value::Bool(false));
    assert_eq!(entries["noise"], Value::Null);
}

#[test]
fn test_duplicate_key_error() {
    let input = "{'size': 1, 'size': 2}";

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let err = parser.parse_document().unwrap_err();

    match err {
        AxonError::SyntaxError { code, message, .. } => {
            assert_eq!(code, Some(207));
            assert!(message.contains("size"), "message was: {}", message);
        }
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_missing_colon_error() {
    let input = "{'size' 4000}";

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let err = parser.parse_document().unwrap_err();

    match err {
        AxonError::SyntaxError { code, .. } => assert_eq!(code, Some(204)),
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_unquoted_key_error() {
    let input = "{size: 4000}";

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let err = parser.parse_document().unwrap_err();

    match err {
        AxonError::InvalidToken { code, .. } => assert_eq!(code, Some(203)),
        other => panic!("Expected InvalidToken, got {:?}", other),
    }
}

#[test]
fn test_top_level_must_be_mapping() {
    let input = "[1, 2, 3]";

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let err = parser.parse_document().unwrap_err();

    match err {
        AxonError::SyntaxError { code, .. } => assert_eq!(code, Some(205)),
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_trailing_content_error() {
    let input = "{'a': 1} {'b': 2}";

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let err = parser.parse_document().unwrap_err();

    match err {
        AxonError::InvalidToken { code, .. } => assert_eq!(code, Some(206)),
        other => panic!("Expected InvalidToken, got {:?}", other),
    }
}

#[test]
fn test_trailing_comment_is_fine() {
    let input = "{'a': 1}\n# done\n";

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let root = parser.parse_document().expect("Failed to parse document");
    assert_eq!(root.as_mapping().unwrap()["a"], Value::Number(1.0));
}

#[test]
fn test_empty_reference_segment_error() {
    let input = "{'x': ref('a..b')}";

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let err = parser.parse_document().unwrap_err();

    match err {
        AxonError::SyntaxError { code, .. } => assert_eq!(code, Some(208)),
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_unclosed_mapping_error() {
    let input = "{'a': {'b': 1}";

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let err = parser.parse_document().unwrap_err();

    match err {
        AxonError::UnexpectedEof { code, .. } => assert_eq!(code, Some(201)),
        other => panic!("Expected UnexpectedEof, got {:?}", other),
    }
}

#[test]
fn test_display_round_trip() {
    let input = r#"{'layer': {'size': 4000, 'record': true, 'targets': [ref('inh_layer'), null]}, 'cfg': url("sub/extra")}"#;

    let mut parser = Parser::new(input).expect("Failed to create parser");
    let root = parser.parse_document().expect("Failed to parse document");

    let rendered = root.to_string();
    println!("--- Re-serialized ---\n{}", rendered);

    let mut reparser = Parser::new(&rendered).expect("Failed to re-create parser");
    let reparsed = reparser.parse_document().expect("Failed to re-parse rendered document");

    assert_eq!(root, reparsed);
}
