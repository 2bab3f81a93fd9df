//! # Remote Collection Module
//!
//! This module is the HTTP integration layer between foliocli and the
//! portfolio REST backend. Every content area of the site is exposed by the
//! backend as a conventional JSON collection:
//!
//! ```text
//! GET    /api/{collection}        list all records
//! POST   /api/{collection}        create a record, returns it with its id
//! PUT    /api/{collection}/{id}   replace a record, returns the result
//! DELETE /api/{collection}/{id}   remove a record, no payload
//! ```
//!
//! [`CollectionClient`] implements that contract once, generically over the
//! record type; the collection path segment comes from
//! [`Record::COLLECTION`](crate::types::Record). The introduction text is the
//! one resource that is not a collection (a single GET/PUT document), so it
//! gets its own small [`IntroductionClient`].
//!
//! ## Contract
//!
//! Each client method performs exactly one HTTP call and either returns the
//! parsed payload or a typed [`ApiError`]. There are no retries and no
//! timeout handling beyond surfacing the failure to the caller; the
//! management layer decides what a failure means for local state.
//!
//! ## Error taxonomy
//!
//! - [`ApiError::Transport`] - the request never produced a response
//! - [`ApiError::Server`] - the backend answered with a non-2xx status
//! - [`ApiError::NotFound`] - an update/delete target is gone server-side
//! - [`ApiError::Decode`] - the payload was not the expected JSON shape
//!
//! ## Testability
//!
//! The management layer talks to the [`RemoteCollection`] trait rather than
//! the HTTP client directly, so tests can drive a collection manager against
//! an in-memory fake without a network.

mod client;
mod introduction;

pub use client::CollectionClient;
pub use introduction::IntroductionClient;

use reqwest::StatusCode;

use crate::types::Record;

#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    Server(StatusCode),
    NotFound,
    Decode(reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Transport(err)
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "network error: {}", err),
            ApiError::Server(status) => write!(f, "server responded with {}", status),
            ApiError::NotFound => write!(f, "no such record on the server"),
            ApiError::Decode(err) => write!(f, "malformed response: {}", err),
        }
    }
}

/// The four operations of one REST collection.
///
/// Implemented by [`CollectionClient`] over HTTP and by in-memory fakes in
/// tests.
#[allow(async_fn_in_trait)]
pub trait RemoteCollection<R: Record> {
    async fn list(&self) -> Result<Vec<R>, ApiError>;
    async fn create(&self, draft: &R) -> Result<R, ApiError>;
    async fn update(&self, id: u64, draft: &R) -> Result<R, ApiError>;
    async fn remove(&self, id: u64) -> Result<(), ApiError>;
}
