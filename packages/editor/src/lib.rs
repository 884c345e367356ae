//! # DWD Editor
//!
//! Editing engine behind the content editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ content: typed Document schema              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: paths + mutations + store           │
//! │  - Address any value with a Path            │
//! │  - Apply copy-on-write edits                │
//! │  - Load/save through a ContentTransport     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ workspace: /__editor/content resource       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dwd_editor::{mutations, path, ContentStore, HttpTransport};
//!
//! let mut store = ContentStore::init(HttpTransport::new("http://127.0.0.1:5173")).await;
//!
//! store.edit(|doc| mutations::set(doc, &path!["hero", "card", "iconKey"], "Cpu"))?;
//! store.edit(|doc| mutations::move_item(doc, &path!["team", "members"], 3, 0))?;
//!
//! store.save().await;
//! ```

pub mod mutations;

mod errors;
mod path;
mod store;
mod transport;

pub use errors::EditorError;
pub use mutations::{Mutation, MutationError};
pub use path::{Path, PathSegment};
pub use store::{ContentStore, StoreStatus};
pub use transport::{ContentTransport, HttpTransport, SaveReceipt, TransportError, CONTENT_ENDPOINT};

pub use dwd_content::Document;
