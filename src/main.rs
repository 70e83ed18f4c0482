use anyhow::{Context, Result};
use clap::Parser;
use memorabilia::cli::{Cli, Commands};
use memorabilia::config::Config;
use memorabilia::constants::{ERROR_NO_CLOUD_NAME, IMPORT_SAVED};
use memorabilia::content::Content;
use memorabilia::images::CloudinaryHost;
use memorabilia::import::{self, RaindropClient, RaindropSettings};
use memorabilia::logger::Logger;
use memorabilia::store::SelectionStore;
use memorabilia::ui::app_component::{AppComponent, AppOptions};
use memorabilia::ui::core::View;
use std::path::Path;
use std::rc::Rc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::InitConfig { path } = cli.command() {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    let is_import = matches!(cli.command(), Commands::Import { .. });
    if let Err(e) = logger.install(log::LevelFilter::Debug, is_import) {
        eprintln!("Logger already installed: {}", e);
    }

    match cli.command() {
        Commands::Import { output } => {
            let output = output.clone().unwrap_or_else(|| config.bookmarks.output_path.clone());
            run_import(&config, &output).await
        }
        _ => run_browse(&config, logger).await,
    }
}

async fn run_import(config: &Config, output: &Path) -> Result<()> {
    let settings = RaindropSettings::from_env(&config.bookmarks)?;
    let client = RaindropClient::new(settings)?;

    let outcome = import::import_all(&client).await;
    match import::save_collection(&outcome.items, output) {
        Ok(()) => println!("{} ({} items): {}", IMPORT_SAVED, outcome.items.len(), output.display()),
        Err(e) => log::error!("Error writing bookmark collection to file: {}", e),
    }
    Ok(())
}

async fn run_browse(config: &Config, logger: Logger) -> Result<()> {
    let host = match CloudinaryHost::from_env(&config.images) {
        Ok(host) => host,
        Err(e) => {
            eprintln!("{}", ERROR_NO_CLOUD_NAME);
            eprintln!("\n💡 To use this app:");
            eprintln!("1. Find the cloud name in your image host dashboard");
            eprintln!(
                "2. Set it as environment variable: export {}=your_cloud_name",
                config.images.cloud_name_env
            );
            eprintln!("3. Run the app again to see your showcase!");
            log::debug!("Image host unavailable: {}", e);
            return Ok(());
        }
    };

    let content = Content::load(&config.favorites_path(), &config.experience_path())
        .with_context(|| format!("Failed to load content from {}", config.content.directory.display()))?;

    let options = AppOptions {
        start_view: View::from_name(&config.ui.start_view).unwrap_or_default(),
        headline_prefix: config.ui.headline_prefix.clone(),
    };

    let store = SelectionStore::new();
    let mut app = AppComponent::new(&content, store, Rc::new(host), logger, options);
    memorabilia::ui::run_app(&mut app, config.ui.mouse_enabled).await
}
