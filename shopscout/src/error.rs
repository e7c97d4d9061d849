/// Failure reported by a [`crate::Renderer`] implementation.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Navigation Error: {0}")]
    Navigation(String),

    #[error("Timed out waiting for `{0}`")]
    ReadyTimeout(String),
}

/// The resolver side of a selection gate went away before a choice was made.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("selection abandoned before a choice was made")]
pub struct SelectionCanceled;
