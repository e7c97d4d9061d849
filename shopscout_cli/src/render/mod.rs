mod http;
mod webdriver;

pub use http::HttpRenderer;
pub use webdriver::WebDriverRenderer;
