use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use shopscout::{RenderError, Renderer, WaitPolicy};
use thirtyfour::prelude::*;
use tokio::sync::Mutex;

use crate::error::AppError;

/// Browser-backed retrieval for storefronts that only render client side.
/// One session is shared by every store, so renders serialize on the lock.
#[derive(Clone)]
pub struct WebDriverRenderer {
    driver: Arc<Mutex<WebDriver>>,
}

impl WebDriverRenderer {
    pub async fn new(server_url: &str, headless: bool) -> Result<Self, AppError> {
        let mut caps = DesiredCapabilities::chrome();

        if headless {
            caps.add_chrome_arg("--headless")?;
        }

        caps.add_chrome_arg("--no-sandbox")?;
        caps.add_chrome_arg("--disable-dev-shm-usage")?;
        caps.add_chrome_arg("--disable-gpu")?;

        caps.add_chrome_option(
            "prefs",
            json!({
                "profile.default_content_settings": {
                    "images": 2 // Do not load images.
                },
                "profile.managed_default_content_settings": {
                    "images": 2 // Do not load images.
                }
            }),
        )?;

        let driver = WebDriver::new(server_url, caps).await?;

        Ok(Self {
            driver: Arc::new(Mutex::new(driver)),
        })
    }

    pub async fn close(&self) -> Result<(), AppError> {
        let driver = self.driver.lock().await;
        driver.clone().quit().await?;
        Ok(())
    }
}

#[async_trait]
impl Renderer for WebDriverRenderer {
    async fn render(&self, url: &str, wait: &WaitPolicy) -> Result<String, RenderError> {
        let driver = self.driver.lock().await;

        driver.goto(url).await.map_err(navigation)?;

        if let WaitPolicy::ClassPresent { class, timeout } = wait {
            driver
                .query(By::ClassName(class.as_str()))
                .wait(*timeout, Duration::from_millis(250))
                .first()
                .await
                .map_err(|_| RenderError::ReadyTimeout(class.clone()))?;
        }

        driver.source().await.map_err(navigation)
    }
}

fn navigation(err: thirtyfour::error::WebDriverError) -> RenderError {
    RenderError::Navigation(err.to_string())
}
