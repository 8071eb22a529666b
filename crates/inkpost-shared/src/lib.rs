//! # Inkpost Shared
//!
//! Wire types shared by the local-storage layout and the REST backend,
//! including the docs question endpoint.
//! Both persist posts in the same JSON shape, so a collection exported from one
//! can be read by the other.

pub mod dto;

pub use dto::{AskRequest, AskResponse, DeleteAck, ErrorDetail, PostDto};
