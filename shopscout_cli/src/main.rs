use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use shopscout::{Orchestrator, Renderer};

use error::AppError;
use render::{HttpRenderer, WebDriverRenderer};
use stores::SelectorFetcher;
use ui::{SelectionActor, SelectionPlan};

mod error;
mod render;
mod stores;
mod ui;

#[derive(Subcommand)]
pub enum Command {
    /// List all configured stores
    Stores,

    /// Search every store for each item and build per-store carts
    Shop {
        /// Comma-separated list of items to shop for
        #[arg(short, long)]
        items: String,

        /// Answer prompts from a JSON selection plan instead of stdin
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Fetch pages over plain HTTP instead of a WebDriver session
        #[arg(long)]
        http: bool,

        /// WebDriver endpoint to attach to
        #[arg(long, default_value = "http://localhost:9515")]
        webdriver_url: String,

        /// Show the browser window
        #[arg(long)]
        no_headless: bool,
    },
}

#[derive(Parser)]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if let Some(command) = cli.command {
        match command {
            Command::Stores => {
                for profile in stores::all() {
                    println!("{}", profile.id);
                }
            }
            Command::Shop {
                items,
                plan,
                http,
                webdriver_url,
                no_headless,
            } => {
                let items = split_items(&items);
                if items.is_empty() {
                    log::warn!("no items to shop for");
                    return Ok(());
                }

                let actor = match plan {
                    Some(path) => SelectionActor::Scripted(SelectionPlan::load(&path)?),
                    None => SelectionActor::Prompt,
                };

                let webdriver = if http {
                    None
                } else {
                    Some(WebDriverRenderer::new(&webdriver_url, !no_headless).await?)
                };
                let renderer: Arc<dyn Renderer> = match &webdriver {
                    Some(driver) => Arc::new(driver.clone()),
                    None => Arc::new(HttpRenderer::new()?),
                };

                let mut builder = Orchestrator::builder();
                for profile in stores::all() {
                    builder = builder.register(SelectorFetcher::new(profile, renderer.clone()));
                }
                let (orchestrator, events) = builder.build();

                let presentation = tokio::spawn(ui::drive(events, actor));
                orchestrator.run(items).await;
                let _ = presentation.await;

                if let Some(driver) = webdriver {
                    driver.close().await?;
                }
            }
        }
    }

    Ok(())
}

fn split_items(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_items;

    #[test]
    fn items_are_trimmed_and_empties_dropped() {
        assert_eq!(split_items("milk, eggs ,,bread"), ["milk", "eggs", "bread"]);
        assert!(split_items("  ,  ").is_empty());
        assert!(split_items("").is_empty());
    }
}
