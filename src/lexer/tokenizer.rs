use super::scanner::{bump, skip_whitespace_and_comments};
use super::*;

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token, AxonError> {
    skip_whitespace_and_comments(lexer);

    match lexer.peek {
        Some('{') => tokenize_symbol(lexer, Token::LBrace),
        Some('}') => tokenize_symbol(lexer, Token::RBrace),
        Some('[') => tokenize_symbol(lexer, Token::LBracket),
        Some(']') => tokenize_symbol(lexer, Token::RBracket),
        Some('(') => tokenize_symbol(lexer, Token::LParen),
        Some(')') => tokenize_symbol(lexer, Token::RParen),
        Some(':') => tokenize_symbol(lexer, Token::Colon),
        Some(',') => {
            bump(lexer);
            next_token(lexer) // skip commas
        }
        Some('"') | Some('\'') => tokenize_string(lexer),
        Some('-') => tokenize_number(lexer),
        Some(c) if c.is_ascii_digit() => tokenize_number(lexer),
        Some(c) if c.is_alphabetic() || c == '_' => tokenize_identifier_or_keyword(lexer),
        Some(ch) => tokenize_unexpected_char(lexer, ch),
        None => Ok(Token::Eof),
    }
}

fn tokenize_symbol(lexer: &mut Lexer, token: Token) -> Result<Token, AxonError> {
    bump(lexer);
    Ok(token)
}

fn tokenize_string(lexer: &mut Lexer) -> Result<Token, AxonError> {
    let quote = match bump(lexer) {
        Some(q) => q,
        None => {
            return Err(AxonError::UnexpectedEof {
                message: "Expected string literal".into(),
                line: lexer.line,
                column: lexer.column,
                hint: None,
                code: Some(101),
            });
        }
    };
    let mut content = String::new();

    loop {
        match lexer.peek {
            Some(ch) if ch == quote => {
                bump(lexer); // consume the closing quote
                return Ok(Token::String(content));
            }
            Some('\\') => {
                bump(lexer); // consume '\'
                if let Some(next_ch) = bump(lexer) {
                    let escaped = match next_ch {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '\\' => '\\',
                        '"' => '"',
                        '\'' => '\'',
                        other => other,
                    };
                    content.push(escaped);
                } else {
                    return Err(AxonError::UnclosedString {
                        quote,
                        line: lexer.line,
                        column: lexer.column,
                        hint: Some("Trailing backslash in string".into()),
                        code: Some(103),
                    });
                }
            }
            Some(ch) => {
                content.push(ch);
                bump(lexer);
            }
            None => {
                return Err(AxonError::UnclosedString {
                    quote,
                    line: lexer.line,
                    column: lexer.column,
                    hint: Some("String literal not closed".into()),
                    code: Some(103),
                });
            }
        }
    }
}

fn tokenize_number(lexer: &mut Lexer) -> Result<Token, AxonError> {
    let mut num = String::new();

    if lexer.peek == Some('-') {
        num.push('-');
        bump(lexer);
    }

    // Accept a sign directly after an exponent marker ('1e-3', '2.5E+4')
    let mut after_exponent = false;
    while let Some(ch) = lexer.peek {
        if ch.is_ascii_digit() || ch == '.' {
            num.push(ch);
            bump(lexer);
            after_exponent = false;
        } else if ch == 'e' || ch == 'E' {
            num.push(ch);
            bump(lexer);
            after_exponent = true;
        } else if (ch == '-' || ch == '+') && after_exponent {
            num.push(ch);
            bump(lexer);
            after_exponent = false;
        } else {
            break;
        }
    }

    num.parse::<f64>()
        .map(Token::Number)
        .map_err(|_| AxonError::TypeError {
            message: format!("Invalid number '{}'", num),
            line: lexer.line,
            column: lexer.column,
            hint: None,
            code: Some(102),
        })
}

fn tokenize_identifier_or_keyword(lexer: &mut Lexer) -> Result<Token, AxonError> {
    let mut ident = String::new();

    while let Some(ch) = lexer.peek {
        if ch.is_alphanumeric() || ch == '_' {
            ident.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    // Map keywords to their respective tokens
    let token = match ident.as_str() {
        "ref" => Token::Ref,
        "url" => Token::Url,
        "true" | "True" => Token::Bool(true),
        "false" | "False" => Token::Bool(false),
        "null" | "None" => Token::Null,
        _ => Token::Ident(ident),
    };

    Ok(token)
}

fn tokenize_unexpected_char(lexer: &mut Lexer, ch: char) -> Result<Token, AxonError> {
    bump(lexer);
    Err(AxonError::UnexpectedCharacter {
        character: ch,
        line: lexer.line,
        column: lexer.column,
        hint: Some("Unexpected character in input".into()),
        code: Some(104),
    })
}
