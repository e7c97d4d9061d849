use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shopscout::{RenderError, Renderer, WaitPolicy};

use crate::error::AppError;

/// Plain HTTP retrieval. Whatever the server returns is final, so readiness
/// conditions are trivially satisfied.
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    pub fn new() -> Result<Self, AppError> {
        let http_timeout = Duration::from_secs(10);
        let client = Client::builder().timeout(http_timeout).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Renderer for HttpRenderer {
    async fn render(&self, url: &str, _wait: &WaitPolicy) -> Result<String, RenderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| RenderError::Navigation(err.to_string()))?;

        response
            .text()
            .await
            .map_err(|err| RenderError::Navigation(err.to_string()))
    }
}
