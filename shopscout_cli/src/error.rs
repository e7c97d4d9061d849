#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("WebDriver Error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("Render Error: {0}")]
    Render(#[from] shopscout::RenderError),

    #[error("Selector Error: {0}")]
    Selector(String),

    #[error("Invalid search URL: {0}")]
    Url(String),

    #[error("Invalid selection plan: {0}")]
    Plan(#[from] serde_json::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}
