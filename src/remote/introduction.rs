use reqwest::Client;
use serde_json::json;

use crate::{config, remote::ApiError, types::Introduction};

/// Client for the single introduction/biography document.
///
/// The backend exposes it at `/api/introduction` with GET and PUT only; there
/// is nothing to create or delete.
pub struct IntroductionClient {
    base_url: String,
}

impl IntroductionClient {
    pub fn new() -> Self {
        Self::with_base_url(config::portfolio_api_url())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{base}/api/introduction", base = self.base_url)
    }

    pub async fn fetch(&self) -> Result<Introduction, ApiError> {
        let response = match Client::new().get(self.url()).send().await {
            Ok(resp) => resp,
            Err(err) => return Err(ApiError::Transport(err)),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server(status));
        }

        match response.json::<Introduction>().await {
            Ok(intro) => Ok(intro),
            Err(err) => Err(ApiError::Decode(err)),
        }
    }

    pub async fn save(&self, content: &str) -> Result<Introduction, ApiError> {
        let response = match Client::new()
            .put(self.url())
            .json(&json!({ "content": content }))
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

        match response.json::<Introduction>().await {
            Ok(intro) => Ok(intro),
            Err(err) => Err(ApiError::Decode(err)),
        }
    }
}

impl Default for IntroductionClient {
    fn default() -> Self {
        Self::new()
    }
}
