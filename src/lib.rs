//! Tolerant normalization of list-endpoint responses.
//!
//! Endpoints across API versions answer list requests with three different
//! envelopes: the canonical `{ "items": [...], "total": n }` object, a
//! `[[...], n]` tuple, or a bare array. [`normalize_list`] absorbs that
//! variability at the client boundary so the rest of the application programs
//! against a single [`ListResponse`] shape. Unrecognizable payloads degrade to
//! an empty list instead of an error.

pub mod client;
pub mod config;
pub mod dto;
pub mod errors;
pub mod normalize;

pub use client::ListApiClient;
pub use config::ApiConfig;
pub use dto::ListResponse;
pub use errors::ClientError;
pub use normalize::normalize_list;
