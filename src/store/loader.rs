use std::fs;
use std::path::{Path, PathBuf};

use super::ParamStore;
use crate::AxonError;
use crate::ast::{Document, Value};
use crate::parser::Parser;

/// Parse the text of one parameter document into its root mapping.
pub(super) fn parse_root(content: &str) -> Result<Value, AxonError> {
    let mut parser = Parser::new(content)?;
    parser.parse_document()
}

/// Load a named document from the store's base directory and register it.
/// Registration happens before any resolution, so a document being loaded can
/// already be the target of references from the document that demanded it.
pub(super) fn load_document(store: &mut ParamStore, name: &str) -> Result<(), AxonError> {
    if store.documents.contains_key(name) {
        return Ok(());
    }

    let path = document_path(&store.base_dir, name).ok_or_else(|| AxonError::NotFound {
        document: name.to_string(),
        path: store.base_dir.join(format!("{}.axon", name)).display().to_string(),
        hint: None,
        code: Some(303),
    })?;

    tracing::debug!(document = name, path = %path.display(), "loading parameter document");

    let content = fs::read_to_string(&path).map_err(|e| AxonError::FileError {
        message: format!("Failed to read document: {}", e),
        path: path.display().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;

    let root = parse_root(&content)?;
    let base = path.parent().map(Path::to_path_buf);
    store.documents.insert(
        name.to_string(),
        Document {
            name: name.to_string(),
            root,
            base,
        },
    );
    Ok(())
}

/// Candidate locations for a named document: `<base>/<name>.axon`, then the
/// bare `<base>/<name>`.
fn document_path(base_dir: &Path, name: &str) -> Option<PathBuf> {
    let with_ext = base_dir.join(format!("{}.axon", name));
    if with_ext.is_file() {
        return Some(with_ext);
    }
    let bare = base_dir.join(name);
    if bare.is_file() { Some(bare) } else { None }
}

/// Load the target of a `url(...)` marker, registering it under its canonical
/// filesystem path so the same file linked from several documents is parsed
/// once. Returns the registered document name.
pub(super) fn load_resource(
    store: &mut ParamStore,
    owner: &str,
    raw_path: &str,
) -> Result<String, AxonError> {
    let owner_base = store
        .documents
        .get(owner)
        .and_then(|d| d.base.clone())
        .unwrap_or_else(|| store.base_dir.clone());

    let target = resolve_resource_path(raw_path, &owner_base)?;
    let path = if target.is_file() {
        target
    } else {
        let with_ext = PathBuf::from(format!("{}.axon", target.display()));
        if with_ext.is_file() {
            with_ext
        } else {
            return Err(AxonError::NotFound {
                document: owner.to_string(),
                path: raw_path.to_string(),
                hint: Some(format!("No parameter file at '{}'", target.display())),
                code: Some(304),
            });
        }
    };

    let canonical = path.canonicalize().map_err(|e| AxonError::FileError {
        message: format!("Failed to canonicalize resource path: {}", e),
        path: path.display().to_string(),
        hint: None,
        code: Some(302),
    })?;
    let resource_name = canonical.display().to_string();

    if store.documents.contains_key(&resource_name) {
        return Ok(resource_name);
    }

    tracing::debug!(document = owner, resource = %canonical.display(), "loading linked resource");

    let content = fs::read_to_string(&canonical).map_err(|e| AxonError::FileError {
        message: format!("Failed to read linked resource: {}", e),
        path: canonical.display().to_string(),
        hint: Some("Check that the linked file exists and is readable".into()),
        code: Some(302),
    })?;

    let root = parse_root(&content)?;
    let base = canonical.parent().map(Path::to_path_buf);
    store.documents.insert(
        resource_name.clone(),
        Document {
            name: resource_name.clone(),
            root,
            base,
        },
    );
    Ok(resource_name)
}

/// Expand `~/` and resolve relative paths against the owning document's
/// directory.
fn resolve_resource_path(raw_path: &str, base_dir: &Path) -> Result<PathBuf, AxonError> {
    let mut p = if let Some(rest) = raw_path.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or_else(|| AxonError::FileError {
            message: "Could not determine home directory for ~ expansion".into(),
            path: raw_path.to_string(),
            hint: Some("Set HOME or use a path relative to the document".into()),
            code: Some(300),
        })?;
        home.join(rest)
    } else {
        PathBuf::from(raw_path)
    };

    if p.is_relative() {
        p = base_dir.join(p);
    }
    Ok(p)
}
