// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use super::{ParamStore, loader};
use crate::AxonError;
use crate::ast::Value;

/// Ordered list of `(document, path)` pairs currently being resolved. A
/// repeat means the reference graph has a value cycle; the order gives the
/// full chain for diagnostics. An empty path stands for a document's root.
type Chain = Vec<(String, String)>;

pub(super) fn resolve_all(store: &mut ParamStore, name: &str) -> Result<Value, AxonError> {
    loader::load_document(store, name)?;
    if store.resolved.contains(name) {
        return root_of(store, name);
    }

    let root = root_of(store, name)?;
    let mut chain = Chain::new();
    chain.push((name.to_string(), String::new()));
    let resolved = resolve_value(store, &root, name, &mut chain)?;

    // Substitute the marker-free tree in place; later references into this
    // document walk resolved values directly.
    if let Some(doc) = store.documents.get_mut(name) {
        doc.root = resolved.clone();
    }
    store.resolved.insert(name.to_string());
    Ok(resolved)
}

/// Resolve an absolute dotted path (`document.key.key...`) for the typed
/// access layer.
pub(super) fn resolve_absolute(
    store: &mut ParamStore,
    doc: &str,
    segments: &[String],
) -> Result<Value, AxonError> {
    if segments.is_empty() {
        return resolve_all(store, doc);
    }

    loader::load_document(store, doc)?;
    let mut chain = Chain::new();
    chain.push((doc.to_string(), segments.join(".")));

    match walk(store, doc, segments, &mut chain) {
        Ok((located, owner)) => resolve_value(store, &located, &owner, &mut chain),
        Err(e) => Err(e),
    }
}

fn root_of(store: &ParamStore, name: &str) -> Result<Value, AxonError> {
    store
        .documents
        .get(name)
        .map(|d| d.root.clone())
        .ok_or_else(|| AxonError::NotFound {
            document: name.to_string(),
            path: String::new(),
            hint: None,
            code: Some(303),
        })
}

/// Depth-first rewrite replacing every `Reference` and `ResourceLink` below
/// `value` with its resolved content. `doc` is the document the value was
/// written in; relative references resolve against it.
fn resolve_value(
    store: &mut ParamStore,
    value: &Value,
    doc: &str,
    chain: &mut Chain,
) -> Result<Value, AxonError> {
    match value {
        Value::Reference(path) => resolve_reference(store, path, doc, chain),
        Value::ResourceLink(path) => resolve_resource(store, doc, path, chain),
        Value::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(resolve_value(store, item, doc, chain)?);
            }
            Ok(Value::Sequence(out))
        }
        Value::Mapping(entries) => {
            let mut out = IndexMap::with_capacity(entries.len());
            for (key, val) in entries {
                out.insert(key.clone(), resolve_value(store, val, doc, chain)?);
            }
            Ok(Value::Mapping(out))
        }
        other => Ok(other.clone()),
    }
}

/// Follow one reference to its fully-resolved content. The chain entry stays
/// pushed while the target is rewritten, so a chain that leads back to this
/// `(document, path)` pair is caught no matter how many documents or resource
/// files it passes through.
fn resolve_reference(
    store: &mut ParamStore,
    path: &[String],
    from_doc: &str,
    chain: &mut Chain,
) -> Result<Value, AxonError> {
    let (doc_name, segments) = split_path(store, path, from_doc)?;
    let key = (doc_name.clone(), segments.join("."));
    if chain.contains(&key) {
        return Err(cycle_error(chain, &key));
    }
    chain.push(key);

    tracing::trace!(
        document = from_doc,
        reference = %path.join("."),
        target = %doc_name,
        "following reference"
    );

    let result = match walk(store, &doc_name, &segments, chain) {
        Ok((located, owner)) => resolve_value(store, &located, &owner, chain),
        Err(e) => Err(e),
    };

    chain.pop();
    result.map_err(|e| attribute(e, from_doc, &path.join(".")))
}

/// Splice a linked resource: load its file, then rewrite its root in its own
/// document context. The chain entry covers the whole resource root so a
/// file that links back to itself (directly or through other documents) is a
/// cycle, not a hang.
fn resolve_resource(
    store: &mut ParamStore,
    owner: &str,
    raw_path: &str,
    chain: &mut Chain,
) -> Result<Value, AxonError> {
    let resource_name = loader::load_resource(store, owner, raw_path)?;
    let key = (resource_name.clone(), String::new());
    if chain.contains(&key) {
        return Err(cycle_error(chain, &key));
    }
    chain.push(key);

    let result = match root_of(store, &resource_name) {
        Ok(root) => resolve_value(store, &root, &resource_name, chain),
        Err(e) => Err(e),
    };

    chain.pop();
    result
}

/// Walk `segments` through `doc_name`'s tree. Markers encountered before a
/// segment are dereferenced or loaded so traversal can step into them; the
/// final located node is returned as-is, together with the document it lives
/// in.
fn walk(
    store: &mut ParamStore,
    doc_name: &str,
    segments: &[String],
    chain: &mut Chain,
) -> Result<(Value, String), AxonError> {
    loader::load_document(store, doc_name)?;
    let mut current = root_of(store, doc_name)?;
    let mut current_doc = doc_name.to_string();

    for (i, segment) in segments.iter().enumerate() {
        loop {
            match current {
                Value::Reference(p) => {
                    let (v, d) = locate(store, &p, &current_doc, chain)?;
                    current = v;
                    current_doc = d;
                }
                Value::ResourceLink(p) => {
                    let resource_name = loader::load_resource(store, &current_doc, &p)?;
                    current = root_of(store, &resource_name)?;
                    current_doc = resource_name;
                }
                other => {
                    current = other;
                    break;
                }
            }
        }
        current = step(current, segment, doc_name, &segments[..=i])?;
    }

    Ok((current, current_doc))
}

/// Like `resolve_reference`, but stops as soon as the located node is
/// concrete at its top level: mid-walk traversal needs something to step
/// into, not a fully rewritten subtree. Inner markers are left for the final
/// rewrite.
fn locate(
    store: &mut ParamStore,
    path: &[String],
    from_doc: &str,
    chain: &mut Chain,
) -> Result<(Value, String), AxonError> {
    let (doc_name, segments) = split_path(store, path, from_doc)?;
    let key = (doc_name.clone(), segments.join("."));
    if chain.contains(&key) {
        return Err(cycle_error(chain, &key));
    }
    chain.push(key);

    let result = locate_inner(store, &doc_name, &segments, chain);

    chain.pop();
    result.map_err(|e| attribute(e, from_doc, &path.join(".")))
}

fn locate_inner(
    store: &mut ParamStore,
    doc_name: &str,
    segments: &[String],
    chain: &mut Chain,
) -> Result<(Value, String), AxonError> {
    let (mut current, mut current_doc) = walk(store, doc_name, segments, chain)?;
    loop {
        match current {
            Value::Reference(p) => {
                let (v, d) = locate(store, &p, &current_doc, chain)?;
                current = v;
                current_doc = d;
            }
            Value::ResourceLink(p) => {
                let resource_name = loader::load_resource(store, &current_doc, &p)?;
                current = root_of(store, &resource_name)?;
                current_doc = resource_name;
            }
            other => return Ok((other, current_doc)),
        }
    }
}

/// Split a dotted path into its target document and the key/index segments
/// inside it. A leading segment that names a key in the current document's
/// root mapping is document-relative; local keys shadow document names.
fn split_path(
    store: &ParamStore,
    path: &[String],
    from_doc: &str,
) -> Result<(String, Vec<String>), AxonError> {
    let first = match path.first() {
        Some(seg) => seg,
        None => {
            return Err(AxonError::PathError {
                document: from_doc.to_string(),
                path: String::new(),
                message: "Empty reference path".into(),
                hint: None,
                code: Some(501),
            });
        }
    };

    let local = store
        .documents
        .get(from_doc)
        .and_then(|d| d.root.as_mapping())
        .is_some_and(|m| m.contains_key(first));

    if local {
        Ok((from_doc.to_string(), path.to_vec()))
    } else {
        Ok((first.clone(), path[1..].to_vec()))
    }
}

/// Step one segment into a container node.
fn step(current: Value, segment: &str, doc: &str, walked: &[String]) -> Result<Value, AxonError> {
    let path = walked.join(".");
    match current {
        Value::Mapping(mut entries) => {
            entries.shift_remove(segment).ok_or_else(|| AxonError::PathError {
                document: doc.to_string(),
                path,
                message: format!("No key '{}' at this location", segment),
                hint: Some("Check the reference path against the document".into()),
                code: Some(501),
            })
        }
        Value::Sequence(mut items) => {
            let index: usize = segment.parse().map_err(|_| AxonError::PathError {
                document: doc.to_string(),
                path: path.clone(),
                message: format!("Sequence index '{}' is not a non-negative integer", segment),
                hint: None,
                code: Some(502),
            })?;
            if index >= items.len() {
                return Err(AxonError::PathError {
                    document: doc.to_string(),
                    path,
                    message: format!(
                        "Index {} out of range (sequence has {} elements)",
                        index,
                        items.len()
                    ),
                    hint: None,
                    code: Some(503),
                });
            }
            Ok(items.swap_remove(index))
        }
        other => Err(AxonError::PathError {
            document: doc.to_string(),
            path,
            message: format!("Cannot index into {} with '{}'", other.type_name(), segment),
            hint: None,
            code: Some(504),
        }),
    }
}

/// Attach the referencing document and path to errors raised further down.
fn attribute(err: AxonError, from_doc: &str, reference: &str) -> AxonError {
    match err {
        AxonError::NotFound {
            document,
            path,
            hint: None,
            code,
        } => AxonError::NotFound {
            document,
            path,
            hint: Some(format!(
                "referenced from document '{}' as '{}'",
                from_doc, reference
            )),
            code,
        },
        other => other,
    }
}

fn cycle_error(chain: &Chain, repeat: &(String, String)) -> AxonError {
    let mut entries: Vec<String> = chain.iter().map(chain_entry).collect();
    entries.push(chain_entry(repeat));
    AxonError::CyclicReference {
        chain: entries,
        hint: Some("Break the cycle by giving one side a concrete value".into()),
        code: Some(505),
    }
}

fn chain_entry(pair: &(String, String)) -> String {
    let (doc, path) = pair;
    if path.is_empty() {
        doc.clone()
    } else {
        format!("{}.{}", doc, path)
    }
}
