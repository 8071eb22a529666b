//! Outbound HTTP to the posts backend.

mod client;

pub use client::{HttpClient, HttpError};
