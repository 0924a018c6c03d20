use std::fmt;

/// The main error type for AXON lexing, parsing and resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum AxonError {
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidToken {
        token: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedEof {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ValidationError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a string literal is not closed.
    UnclosedString {
        quote: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for unexpected characters in the input.
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a named document or a linked resource has no backing file.
    NotFound {
        document: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a well-formed dotted path walks off the parameter tree.
    PathError {
        document: String,
        path: String,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a reference chain revisits a `(document, path)` pair.
    CyclicReference {
        chain: Vec<String>,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for AxonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxonError::SyntaxError { message, line, column, hint, code } =>
                write!(f, "[AXON] Syntax Error at {}:{}: {}{}", line, column, message, suffix(hint, code)),
            AxonError::InvalidToken { token, line, column, hint, code } =>
                write!(f, "[AXON] Invalid Token '{}' at {}:{}{}", token, line, column, suffix(hint, code)),
            AxonError::UnexpectedEof { message, line, column, hint, code } =>
                write!(f, "[AXON] Unexpected EOF at {}:{}: {}{}", line, column, message, suffix(hint, code)),
            AxonError::TypeError { message, line, column, hint, code } =>
                write!(f, "[AXON] Type Error at {}:{}: {}{}", line, column, message, suffix(hint, code)),
            AxonError::ValidationError { message, line, column, hint, code } =>
                write!(f, "[AXON] Validation Error at {}:{}: {}{}", line, column, message, suffix(hint, code)),
            AxonError::UnclosedString { quote, line, column, hint, code } =>
                write!(f, "[AXON] Unclosed string starting with '{}' at {}:{}{}", quote, line, column, suffix(hint, code)),
            AxonError::UnexpectedCharacter { character, line, column, hint, code } =>
                write!(f, "[AXON] Unexpected character '{}' at {}:{}{}", character, line, column, suffix(hint, code)),
            AxonError::FileError { message, path, hint, code } =>
                write!(f, "[AXON] File Error '{}': {}{}", path, message, suffix(hint, code)),
            AxonError::NotFound { document, path, hint, code } =>
                write!(f, "[AXON] Not Found: document '{}', path '{}'{}", document, path, suffix(hint, code)),
            AxonError::PathError { document, path, message, hint, code } =>
                write!(f, "[AXON] Path Error in '{}' at '{}': {}{}", document, path, message, suffix(hint, code)),
            AxonError::CyclicReference { chain, hint, code } =>
                write!(f, "[AXON] Cyclic reference: {}{}", chain.join(" -> "), suffix(hint, code)),
        }
    }
}

impl std::error::Error for AxonError {}

impl AxonError {
    /// Helper for file-related errors when loading parameter documents.
    ///
    /// Keeps a consistent error code and a friendly default hint.
    pub fn file_error(message: String, path: String) -> Self {
        AxonError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(300),
        }
    }
}
