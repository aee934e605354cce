//! # entistate Store
//!
//! A stateful wrapper that keeps one normalized entity collection
//! synchronized with a remote REST resource.
//!
//! This crate provides:
//! - An HTTP client abstraction ([`HttpClient`]) so any HTTP library can
//!   plug in behind the store
//! - A typed JSON resource client ([`ResourceClient`]) for the
//!   list/get/create/update/delete endpoints
//! - The store itself ([`RemoteStore`]) with its `loading`/`error` pair
//!
//! ## Failure model
//!
//! Store operations never propagate errors to the caller. A transport
//! failure or non-2xx status is absorbed into the store's `error` string
//! and a `None`/`false` return; the collection is left unchanged. The
//! store is intended for single-consumer, event-driven use and carries
//! no retries, timeouts or cancellation.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod http;
mod resource;
mod store;

pub use error::{StoreError, StoreResult};
pub use http::{HttpClient, HttpResponse, Method};
pub use resource::ResourceClient;
pub use store::RemoteStore;
