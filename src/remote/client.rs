use std::marker::PhantomData;

use reqwest::{Client, StatusCode};

use crate::{
    config,
    remote::{ApiError, RemoteCollection},
    types::Record,
};

/// HTTP client for one REST collection endpoint.
///
/// The collection path is derived from the record type, so
/// `CollectionClient::<Project>::new()` talks to `/api/projects` and
/// `CollectionClient::<Award>::new()` to `/api/awards`. Requests carry no
/// authentication; the backend is assumed to be the owner's own.
pub struct CollectionClient<R> {
    base_url: String,
    _record: PhantomData<R>,
}

impl<R: Record> CollectionClient<R> {
    /// Creates a client against the configured `PORTFOLIO_API_URL`.
    pub fn new() -> Self {
        Self::with_base_url(config::portfolio_api_url())
    }

    /// Creates a client against an explicit base URL. Used by tests and by
    /// anyone pointing the CLI at a non-default backend.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            _record: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{base}/api/{collection}",
            base = self.base_url,
            collection = R::COLLECTION
        )
    }

    fn member_url(&self, id: u64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

impl<R: Record> Default for CollectionClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RemoteCollection<R> for CollectionClient<R> {
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        let response = match Client::new().get(self.collection_url()).send().await {
            Ok(resp) => resp,
            Err(err) => return Err(ApiError::Transport(err)),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server(status));
        }

        match response.json::<Vec<R>>().await {
            Ok(records) => Ok(records),
            Err(err) => Err(ApiError::Decode(err)),
        }
    }

    async fn create(&self, draft: &R) -> Result<R, ApiError> {
        let response = match Client::new()
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => return Err(ApiError::Transport(err)),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server(status));
        }

        match response.json::<R>().await {
            Ok(record) => Ok(record),
            Err(err) => Err(ApiError::Decode(err)),
        }
    }

    async fn update(&self, id: u64, draft: &R) -> Result<R, ApiError> {
        let response = match Client::new()
            .put(self.member_url(id))
            .json(draft)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => return Err(ApiError::Transport(err)),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Server(status));
        }

        match response.json::<R>().await {
            Ok(record) => Ok(record),
            Err(err) => Err(ApiError::Decode(err)),
        }
    }

    async fn remove(&self, id: u64) -> Result<(), ApiError> {
        let response = match Client::new().delete(self.member_url(id)).send().await {
            Ok(resp) => resp,
            Err(err) => return Err(ApiError::Transport(err)),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Server(status));
        }

        Ok(())
    }
}
