use super::*;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Value, AxonError> {
    match parser.peek() {
        Some(Token::LBrace) => {}
        Some(Token::Eof) | None => {
            return Err(AxonError::UnexpectedEof {
                message: "Empty parameter document".into(),
                line: parser.line(),
                column: parser.column(),
                hint: Some("A document is a single mapping literal: { 'key': value, ... }".into()),
                code: Some(201),
            });
        }
        Some(tok) => {
            return Err(AxonError::SyntaxError {
                message: format!("Expected '{{' at start of document, got {:?}", tok),
                line: parser.line(),
                column: parser.column(),
                hint: Some("A document is a single mapping literal: { 'key': value, ... }".into()),
                code: Some(205),
            });
        }
    }

    let root = value::parse_mapping(parser)?;

    // Only comments and whitespace may follow the root mapping
    match parser.bump()? {
        Token::Eof => Ok(root),
        tok => Err(AxonError::InvalidToken {
            token: format!("{:?}", tok),
            line: parser.line(),
            column: parser.column(),
            hint: Some("Trailing content after the document's root mapping".into()),
            code: Some(206),
        }),
    }
}
