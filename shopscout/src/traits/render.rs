use std::time::Duration;

use async_trait::async_trait;

use crate::error::RenderError;

/// Readiness condition a renderer must satisfy before handing back page
/// content. An explicit condition with a timeout, not a fixed sleep.
#[derive(Debug, Clone)]
pub enum WaitPolicy {
    /// Content is final as soon as the transport returns it.
    None,
    /// Block until an element with this class is present, up to `timeout`.
    ClassPresent { class: String, timeout: Duration },
}

/// The retrieval collaborator: given a fully formed URL, produce the page's
/// rendered content or a failure. How that happens (plain HTTP, a browser
/// session) is no concern of the pipeline.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, url: &str, wait: &WaitPolicy) -> Result<String, RenderError>;
}
