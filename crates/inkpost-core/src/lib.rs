//! # Inkpost Core
//!
//! The domain layer of Inkpost.
//! Posts, the store contract, the create/edit/detail/list views and the docs
//! question view live here.
//! Nothing in this crate performs I/O; adapters are supplied from `inkpost-infra`.

pub mod domain;
pub mod error;
pub mod listing;
pub mod ports;
pub mod render;
pub mod views;

pub use error::{DomainError, StoreError};
