// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::AxonError;
use crate::ast::{Document, Value};

mod access;
mod conversion;
mod loader;
mod resolve;
mod validation;

/// In-memory namespace of parameter documents, keyed by document name.
///
/// One store is one configuration-load session: documents are loaded from the
/// base directory on first access, registered before any of their references
/// are resolved (so mutually-referencing documents can find each other), and
/// cached for the lifetime of the store. `resolve_all` substitutes a
/// document's fully-resolved tree back in place, so repeated resolution of
/// the same document is cheap and structurally identical.
///
/// Resolution is single-threaded and synchronous; independent stores share no
/// state and may be used from different threads.
pub struct ParamStore {
    documents: IndexMap<String, Document>,
    resolved: HashSet<String>,
    base_dir: PathBuf,
}

impl ParamStore {
    /// Create a store whose named documents live under `base_dir`
    /// (`<base_dir>/<name>.axon`, or the bare `<base_dir>/<name>`).
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        ParamStore {
            documents: IndexMap::new(),
            resolved: HashSet::new(),
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Parse a document from a string and register it under `name` (no file
    /// I/O). Resource links inside it resolve against the store's base
    /// directory.
    pub fn insert_str(&mut self, name: &str, content: &str) -> Result<(), AxonError> {
        let root = loader::parse_root(content)?;
        self.documents
            .insert(name.to_string(), Document::new(name, root));
        self.resolved.remove(name);
        Ok(())
    }

    /// Load a named document from the backing directory, registering it
    /// before any reference resolution begins. Returns the cached document on
    /// repeated calls.
    pub fn load(&mut self, name: &str) -> Result<&Document, AxonError> {
        loader::load_document(self, name)?;
        self.documents.get(name).ok_or_else(|| AxonError::NotFound {
            document: name.to_string(),
            path: String::new(),
            hint: None,
            code: Some(303),
        })
    }

    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    pub fn has_document(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    pub fn document_names(&self) -> Vec<String> {
        self.documents.keys().cloned().collect()
    }

    /// Resolve the named document completely: every `Reference` and
    /// `ResourceLink` below its root is replaced by its resolved content.
    ///
    /// All-or-nothing: on any failure the stored document is left untouched
    /// and no partial tree is returned. Fails with `CyclicReference` when the
    /// reference graph has a value cycle.
    pub fn resolve_all(&mut self, name: &str) -> Result<Value, AxonError> {
        resolve::resolve_all(self, name)
    }
}
