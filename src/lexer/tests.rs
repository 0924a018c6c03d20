#[cfg(test)]
use super::*;

#[test]
fn test_full_parameter_document() {
    let input = r#"
# excitatory layer
{
    'exc_layer': {
        'size': 4000,
        'resting_potential': -70.0,
        'record': True,
    },
}
"#;

    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::LBrace,
        Token::String("exc_layer".into()),
        Token::Colon,
        Token::LBrace,
        Token::String("size".into()),
        Token::Colon,
        Token::Number(4000.0),
        Token::String("resting_potential".into()),
        Token::Colon,
        Token::Number(-70.0),
        Token::String("record".into()),
        Token::Colon,
        Token::Bool(true),
        Token::RBrace,
        Token::RBrace,
        Token::Eof,
    ];

    for expected in expected_tokens {
        let tok = lexer.next_token();
        println!("{:?}", tok);
        assert_eq!(tok, Ok(expected));
    }
}

#[test]
fn test_ref_and_url_keywords() {
    let input = r#"ref('defaults.exc_layer') url("components/exc_cell")"#;
    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::Ref,
        Token::LParen,
        Token::String("defaults.exc_layer".into()),
        Token::RParen,
        Token::Url,
        Token::LParen,
        Token::String("components/exc_cell".into()),
        Token::RParen,
        Token::Eof,
    ];

    for expected in expected_tokens {
        let tok = lexer.next_token();
        println!("{:?}", tok);
        assert_eq!(tok, Ok(expected));
    }
}

#[test]
fn test_scientific_notation_numbers() {
    let input = "1e-3 2.5E+4 -0.5";
    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::Number(1e-3),
        Token::Number(2.5e4),
        Token::Number(-0.5),
        Token::Eof,
    ];

    for expected in expected_tokens {
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok, expected);
    }
}

#[test]
fn test_null_aliases() {
    let input = "null None";
    let mut lexer = Lexer::new(input);

    assert_eq!(lexer.next_token(), Ok(Token::Null));
    assert_eq!(lexer.next_token(), Ok(Token::Null));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_string_escapes() {
    let input = r#"'line\nbreak' "tab\there" 'quoted\'inside'"#;
    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::String("line\nbreak".into()),
        Token::String("tab\there".into()),
        Token::String("quoted'inside".into()),
        Token::Eof,
    ];

    for expected in expected_tokens {
        let tok = lexer.next_token().expect("Failed to get token");
        assert_eq!(tok, expected);
    }
}

#[test]
fn test_unclosed_string_error() {
    let input = "'never closed";
    let mut lexer = Lexer::new(input);
    let err = lexer.next_token().unwrap_err();

    match err {
        AxonError::UnclosedString { quote, code, .. } => {
            assert_eq!(quote, '\'');
            assert_eq!(code, Some(103));
        }
        other => panic!("Expected UnclosedString, got {:?}", other),
    }
}

#[test]
fn test_unexpected_character_error() {
    let input = "{ 'a': ; }";
    let mut lexer = Lexer::new(input);

    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert_eq!(lexer.next_token(), Ok(Token::String("a".into())));
    assert_eq!(lexer.next_token(), Ok(Token::Colon));

    let err = lexer.next_token().unwrap_err();
    match err {
        AxonError::UnexpectedCharacter { character, code, .. } => {
            assert_eq!(character, ';');
            assert_eq!(code, Some(104));
        }
        other => panic!("Expected UnexpectedCharacter, got {:?}", other),
    }
}

#[test]
fn test_commas_are_skipped() {
    let input = "[1, 2, 3,]";
    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::LBracket,
        Token::Number(1.0),
        Token::Number(2.0),
        Token::Number(3.0),
        Token::RBracket,
        Token::Eof,
    ];

    for expected in expected_tokens {
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok, expected);
    }
}

#[test]
fn test_comment_only_lines() {
    let input = "# a comment\n# another\n{}";
    let mut lexer = Lexer::new(input);

    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert_eq!(lexer.next_token(), Ok(Token::RBrace));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}
