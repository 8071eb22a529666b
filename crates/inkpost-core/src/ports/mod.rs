//! Ports - trait definitions for external collaborators.
//! These are the "interfaces" that infrastructure (and the front end) must implement.

mod assistant;
mod editor;
mod interaction;
mod kv;
mod store;

pub use crate::error::KvError;
pub use assistant::DocsAssistant;
pub use editor::EditingSurface;
pub use interaction::Interaction;
pub use kv::KeyValueStore;
pub use store::PostStore;
