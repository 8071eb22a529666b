//! # Inkpost Infrastructure
//!
//! Concrete implementations of the ports defined in `inkpost-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - Local storage only
//! - `remote` - REST backend and docs assistant via reqwest

pub mod editor;
pub mod ids;
pub mod interaction;
pub mod kv;
pub mod store;

#[cfg(feature = "remote")]
pub mod assistant;
#[cfg(feature = "remote")]
pub mod http;

// Re-exports - Local
pub use editor::TextBuffer;
pub use ids::IdGenerator;
pub use interaction::ScriptedInteraction;
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};
pub use store::{LocalPostStore, POSTS_KEY};

// Re-exports - Remote
#[cfg(feature = "remote")]
pub use assistant::RemoteDocsAssistant;
#[cfg(feature = "remote")]
pub use http::{HttpClient, HttpError};
#[cfg(feature = "remote")]
pub use store::RemotePostStore;
