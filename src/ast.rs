use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;

/// A single node in a parameter tree.
///
/// Parsed documents may contain the two marker variants: `Reference` holds a
/// dotted path into the parameter namespace, `ResourceLink` holds a path to
/// an external parameter file. A fully-resolved tree contains neither.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Sequence(Vec<Value>),
    Mapping(IndexMap<String, Value>),
    Reference(Vec<String>), // e.g. exc_layer.cell_params.tau_m
    ResourceLink(String),   // path relative to the owning document's directory
}

/// A named parameter document: one root mapping plus the directory its
/// `url(...)` paths resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub root: Value,
    pub base: Option<PathBuf>,
}

impl Document {
    pub fn new(name: impl Into<String>, root: Value) -> Self {
        Document {
            name: name.into(),
            root,
            base: None,
        }
    }
}

impl Value {
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Mapping(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        if let Value::Sequence(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// True when no `Reference` or `ResourceLink` node remains below this one.
    pub fn is_fully_resolved(&self) -> bool {
        match self {
            Value::Reference(_) | Value::ResourceLink(_) => false,
            Value::Sequence(items) => items.iter().all(Value::is_fully_resolved),
            Value::Mapping(entries) => entries.values().all(Value::is_fully_resolved),
            _ => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "a string",
            Value::Number(_) => "a number",
            Value::Bool(_) => "a boolean",
            Value::Null => "null",
            Value::Sequence(_) => "a sequence",
            Value::Mapping(_) => "a mapping",
            Value::Reference(_) => "a reference",
            Value::ResourceLink(_) => "a resource link",
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'")?;
    for ch in s.chars() {
        match ch {
            '\\' => write!(f, "\\\\")?,
            '\'' => write!(f, "\\'")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            '\r' => write!(f, "\\r")?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "'")
}

/// Re-serializes the literal syntax. Mapping entries keep insertion order, so
/// formatting a parsed document is deterministic.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write_quoted(f, s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Mapping(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ": {}", value)?;
                }
                write!(f, "}}")
            }
            Value::Reference(path) => write!(f, "ref('{}')", path.join(".")),
            Value::ResourceLink(path) => write!(f, "url(\"{}\")", path),
        }
    }
}
