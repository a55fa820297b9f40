//! Seed List over HTTP
//!
//! A single `GET` against the page origin. No headers, retries or timeout.

use async_trait::async_trait;
use todo_core::codec::decode_list;
use todo_core::{FetchError, ItemList, RemoteSource};

#[derive(Debug, Clone)]
pub struct HttpSource {
    path: &'static str,
}

impl HttpSource {
    pub fn new(path: &'static str) -> Self {
        Self { path }
    }

    /// reqwest needs an absolute URL; resolve the path against the page origin
    fn url(&self) -> Result<String, FetchError> {
        let window = web_sys::window()
            .ok_or_else(|| FetchError::Transport("no window".to_string()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|e| FetchError::Transport(format!("no page origin: {:?}", e)))?;
        Ok(format!("{}{}", origin, self.path))
    }
}

#[async_trait(?Send)]
impl RemoteSource for HttpSource {
    async fn fetch(&self) -> Result<ItemList, FetchError> {
        let url = self.url()?;
        log::debug!("GET {}", url);

        let response = reqwest::get(&url)
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(decode_list(&body)?)
    }
}
