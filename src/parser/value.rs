use indexmap::IndexMap;

use super::*;

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, AxonError> {
    match parser.peek() {
        Some(Token::String(_)) => parse_string_value(parser),
        Some(Token::Number(_)) => parse_number_value(parser),
        Some(Token::Bool(_)) => parse_bool_value(parser),
        Some(Token::Null) => parse_null_value(parser),
        Some(Token::LBrace) => parse_mapping(parser),
        Some(Token::LBracket) => parse_sequence(parser),
        Some(Token::Ref) => parse_reference(parser),
        Some(Token::Url) => parse_resource_link(parser),
        _ => {
            let token = parser.bump()?;
            Err(AxonError::InvalidToken {
                token: format!("{:?}", token),
                line: parser.line(),
                column: parser.column(),
                hint: Some("Unexpected token in value position".into()),
                code: Some(210),
            })
        }
    }
}

pub(super) fn parse_mapping(parser: &mut Parser) -> Result<Value, AxonError> {
    parser.expect(Token::LBrace)?;
    let mut entries: IndexMap<String, Value> = IndexMap::new();

    loop {
        match parser.peek() {
            Some(Token::RBrace) => {
                parser.bump()?;
                break;
            }
            Some(Token::String(_)) => {
                let key = if let Token::String(k) = parser.bump()? {
                    k
                } else {
                    unreachable!()
                };

                match parser.peek() {
                    Some(Token::Colon) => {
                        parser.bump()?;
                    }
                    _ => {
                        return Err(AxonError::SyntaxError {
                            message: format!("Expected ':' after mapping key '{}'", key),
                            line: parser.line(),
                            column: parser.column(),
                            hint: None,
                            code: Some(204),
                        });
                    }
                }

                let value = parse_value(parser)?;
                if entries.insert(key.clone(), value).is_some() {
                    return Err(AxonError::SyntaxError {
                        message: format!("Duplicate mapping key '{}'", key),
                        line: parser.line(),
                        column: parser.column(),
                        hint: Some("Mapping keys must be unique within one mapping".into()),
                        code: Some(207),
                    });
                }
            }
            Some(Token::Eof) | None => {
                return Err(AxonError::UnexpectedEof {
                    message: "Mapping literal not closed".into(),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Add the missing '}'".into()),
                    code: Some(201),
                });
            }
            Some(tok) => {
                return Err(AxonError::InvalidToken {
                    token: format!("{:?}", tok),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Expected quoted key or '}'".into()),
                    code: Some(203),
                });
            }
        }
    }

    Ok(Value::Mapping(entries))
}

fn parse_sequence(parser: &mut Parser) -> Result<Value, AxonError> {
    parser.bump()?; // consume [
    let mut items = Vec::new();

    loop {
        match parser.peek() {
            Some(Token::RBracket) => {
                parser.bump()?; // consume ]
                break;
            }
            Some(Token::Eof) | None => {
                return Err(AxonError::UnexpectedEof {
                    message: "Sequence literal not closed".into(),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Add the missing ']'".into()),
                    code: Some(201),
                });
            }
            _ => {
                items.push(parse_value(parser)?);
                // Commas are skipped by the lexer
            }
        }
    }

    Ok(Value::Sequence(items))
}

fn parse_string_value(parser: &mut Parser) -> Result<Value, AxonError> {
    if let Token::String(s) = parser.bump()? {
        Ok(Value::String(s))
    } else {
        unreachable!()
    }
}

fn parse_number_value(parser: &mut Parser) -> Result<Value, AxonError> {
    if let Token::Number(n) = parser.bump()? {
        Ok(Value::Number(n))
    } else {
        unreachable!()
    }
}

fn parse_bool_value(parser: &mut Parser) -> Result<Value, AxonError> {
    if let Token::Bool(b) = parser.bump()? {
        Ok(Value::Bool(b))
    } else {
        unreachable!()
    }
}

fn parse_null_value(parser: &mut Parser) -> Result<Value, AxonError> {
    parser.bump()?; // consume Null
    Ok(Value::Null)
}

/// `ref('dotted.path')` — the path is split into segments here so resolution
/// never re-parses it.
fn parse_reference(parser: &mut Parser) -> Result<Value, AxonError> {
    parser.bump()?; // consume ref
    parser.expect(Token::LParen)?;

    let path = if let Token::String(p) = parser.bump()? {
        p
    } else {
        return Err(AxonError::SyntaxError {
            message: "Expected quoted path inside ref(...)".into(),
            line: parser.line(),
            column: parser.column(),
            hint: Some("Write references as ref('document.key.subkey')".into()),
            code: Some(208),
        });
    };

    parser.expect(Token::RParen)?;

    let segments: Vec<String> = path.split('.').map(str::to_string).collect();
    if path.is_empty() || segments.iter().any(String::is_empty) {
        return Err(AxonError::SyntaxError {
            message: format!("Malformed reference path '{}'", path),
            line: parser.line(),
            column: parser.column(),
            hint: Some("Every dot-separated segment must be non-empty".into()),
            code: Some(208),
        });
    }

    Ok(Value::Reference(segments))
}

/// `url("relative/path")` — the linked file is not touched at parse time.
fn parse_resource_link(parser: &mut Parser) -> Result<Value, AxonError> {
    parser.bump()?; // consume url
    parser.expect(Token::LParen)?;

    let path = if let Token::String(p) = parser.bump()? {
        p
    } else {
        return Err(AxonError::SyntaxError {
            message: "Expected quoted path inside url(...)".into(),
            line: parser.line(),
            column: parser.column(),
            hint: Some("Write resource links as url(\"relative/path\")".into()),
            code: Some(209),
        });
    };

    parser.expect(Token::RParen)?;

    if path.is_empty() {
        return Err(AxonError::SyntaxError {
            message: "Empty resource path in url(...)".into(),
            line: parser.line(),
            column: parser.column(),
            hint: None,
            code: Some(209),
        });
    }

    Ok(Value::ResourceLink(path))
}
