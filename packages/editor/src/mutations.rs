//! # Content Mutations
//!
//! Path-addressed edits over the content [`Document`].
//!
//! ## Semantics
//!
//! Every operation takes the current document by reference and returns a new
//! one with exactly one change applied. The input is never touched, so the
//! caller can diff old against new to decide what to re-render.
//!
//! Internally the engine walks the document's JSON projection, then converts
//! the edited tree back into a [`Document`]. That final conversion is what
//! keeps required sections from being dropped or retyped: an edit that would
//! produce a tree the schema can't read fails with [`MutationError::Shape`].
//!
//! ### Set
//! - Replaces the value at the path; every segment but the last must exist
//! - A missing final key on a mapping is added, which is how unset optional
//!   fields (`titleLines`, `accent`) get a value. Keys the schema doesn't
//!   know are kept as-is
//! - The root itself is not settable; replace the document through the store
//!
//! ### List operations
//! - `insert` appends, `remove_at` deletes, `move_item` relocates
//! - Indices are checked against the current length; no clamping

use crate::{Path, PathSegment};
use dwd_content::Document;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Key not found: {0}")]
    MissingKey(Path),

    #[error("Not a mapping or list: {0}")]
    NotAContainer(Path),

    #[error("Not a list: {0}")]
    NotASequence(Path),

    #[error("Index {index} out of range for {path} (len {len})")]
    IndexOutOfRange { path: Path, index: usize, len: usize },

    #[error("Path is empty")]
    EmptyPath,

    #[error("Invalid structure: {0}")]
    Shape(String),
}

/// Serializable edits, for callers that only have JSON values at hand
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mutation {
    /// Replace the value at `path`
    Set { path: Path, value: Value },

    /// Append `item` to the list at `path`
    Insert { path: Path, item: Value },

    /// Delete element `index` of the list at `path`
    RemoveAt { path: Path, index: usize },

    /// Relocate element `from` to position `to` within the list at `path`
    MoveItem { path: Path, from: usize, to: usize },
}

impl Mutation {
    pub fn apply(&self, doc: &Document) -> Result<Document, MutationError> {
        match self {
            Mutation::Set { path, value } => set(doc, path, value),
            Mutation::Insert { path, item } => insert(doc, path, item),
            Mutation::RemoveAt { path, index } => remove_at(doc, path, *index),
            Mutation::MoveItem { path, from, to } => move_item(doc, path, *from, *to),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Mutation::Set { path, .. }
            | Mutation::Insert { path, .. }
            | Mutation::RemoveAt { path, .. }
            | Mutation::MoveItem { path, .. } => path,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Set { .. } => "set",
            Mutation::Insert { .. } => "insert",
            Mutation::RemoveAt { .. } => "removeAt",
            Mutation::MoveItem { .. } => "moveItem",
        }
    }
}

/// Read the value at `path` as `T`
pub fn get<T: DeserializeOwned>(doc: &Document, path: &Path) -> Result<T, MutationError> {
    let value = get_value(doc, path)?;
    serde_json::from_value(value).map_err(shape)
}

/// Read the raw JSON value at `path`
pub fn get_value(doc: &Document, path: &Path) -> Result<Value, MutationError> {
    let mut root = project(doc)?;
    Ok(resolve_mut(&mut root, path)?.take())
}

/// Replace the value at `path` with `value`
pub fn set<T: Serialize>(doc: &Document, path: &Path, value: T) -> Result<Document, MutationError> {
    let value = serde_json::to_value(value).map_err(shape)?;
    let mut root = project(doc)?;
    *slot_mut(&mut root, path)? = value;
    restore(root)
}

/// Replace element `index` of the list at `path` with `updater(old)`
pub fn update_at<T, F>(
    doc: &Document,
    path: &Path,
    index: usize,
    updater: F,
) -> Result<Document, MutationError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce(T) -> T,
{
    let mut root = project(doc)?;
    let items = sequence_mut(&mut root, path)?;
    check_index(path, index, items.len())?;

    let current: T = serde_json::from_value(items[index].take()).map_err(shape)?;
    items[index] = serde_json::to_value(updater(current)).map_err(shape)?;
    restore(root)
}

/// Append `item` to the list at `path`
pub fn insert<T: Serialize>(doc: &Document, path: &Path, item: T) -> Result<Document, MutationError> {
    let item = serde_json::to_value(item).map_err(shape)?;
    let mut root = project(doc)?;
    sequence_mut(&mut root, path)?.push(item);
    restore(root)
}

/// Delete element `index` of the list at `path`
pub fn remove_at(doc: &Document, path: &Path, index: usize) -> Result<Document, MutationError> {
    let mut root = project(doc)?;
    let items = sequence_mut(&mut root, path)?;
    check_index(path, index, items.len())?;
    items.remove(index);
    restore(root)
}

/// Move element `from` to position `to` in the list at `path`, shifting the
/// elements in between
pub fn move_item(
    doc: &Document,
    path: &Path,
    from: usize,
    to: usize,
) -> Result<Document, MutationError> {
    let mut root = project(doc)?;
    let items = sequence_mut(&mut root, path)?;
    check_index(path, from, items.len())?;
    check_index(path, to, items.len())?;

    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    restore(root)
}

fn project(doc: &Document) -> Result<Value, MutationError> {
    serde_json::to_value(doc).map_err(shape)
}

fn restore(root: Value) -> Result<Document, MutationError> {
    serde_json::from_value(root).map_err(shape)
}

fn shape(e: serde_json::Error) -> MutationError {
    MutationError::Shape(e.to_string())
}

fn check_index(path: &Path, index: usize, len: usize) -> Result<(), MutationError> {
    if index < len {
        Ok(())
    } else {
        Err(MutationError::IndexOutOfRange {
            path: path.clone(),
            index,
            len,
        })
    }
}

fn resolve_mut<'a>(root: &'a mut Value, path: &Path) -> Result<&'a mut Value, MutationError> {
    let mut cursor = root;

    for (depth, segment) in path.segments().iter().enumerate() {
        cursor = match (segment, cursor) {
            (PathSegment::Key(key), Value::Object(map)) => map
                .get_mut(key)
                .ok_or_else(|| MutationError::MissingKey(path.prefix(depth + 1)))?,
            (PathSegment::Index(index), Value::Array(items)) => {
                let len = items.len();
                items
                    .get_mut(*index)
                    .ok_or_else(|| MutationError::IndexOutOfRange {
                        path: path.prefix(depth),
                        index: *index,
                        len,
                    })?
            }
            _ => return Err(MutationError::NotAContainer(path.prefix(depth))),
        };
    }

    Ok(cursor)
}

/// Like [`resolve_mut`], but a missing final key on a mapping is created
fn slot_mut<'a>(root: &'a mut Value, path: &Path) -> Result<&'a mut Value, MutationError> {
    let Some(last) = path.segments().last() else {
        return Err(MutationError::EmptyPath);
    };
    let parent = path.prefix(path.len() - 1);

    match (resolve_mut(root, &parent)?, last) {
        (Value::Object(map), PathSegment::Key(key)) => {
            Ok(map.entry(key.clone()).or_insert(Value::Null))
        }
        (Value::Array(items), PathSegment::Index(index)) => {
            let len = items.len();
            items.get_mut(*index).ok_or(MutationError::IndexOutOfRange {
                path: parent,
                index: *index,
                len,
            })
        }
        _ => Err(MutationError::NotAContainer(parent)),
    }
}

fn sequence_mut<'a>(root: &'a mut Value, path: &Path) -> Result<&'a mut Vec<Value>, MutationError> {
    match resolve_mut(root, path)? {
        Value::Array(items) => Ok(items),
        _ => Err(MutationError::NotASequence(path.clone())),
    }
}
