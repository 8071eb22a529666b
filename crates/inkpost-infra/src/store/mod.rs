//! `PostStore` bindings - local key-value collection and remote REST backend.

mod local;
mod mapping;

#[cfg(feature = "remote")]
mod remote;

pub use local::{LocalPostStore, POSTS_KEY};

#[cfg(feature = "remote")]
pub use remote::RemotePostStore;
