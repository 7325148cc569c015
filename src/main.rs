#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use recipe_gallery_core::{DataSource, GalleryConfig, DEFAULT_DATA_URL};
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global gallery configuration, set from command line
static GALLERY_CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the gallery configuration (set from command line or default)
pub fn get_gallery_config() -> GalleryConfig {
    GALLERY_CONFIG.get().cloned().unwrap_or_default()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("recipe-gallery")
}

/// Recipe Gallery - localized recipe cards with detail view
#[derive(Parser, Debug)]
#[command(name = "recipe-gallery-desktop")]
#[command(about = "Recipe Gallery - browse localized recipes")]
struct Args {
    /// Recipe data file: an http(s) URL or a local path
    #[arg(short = 'u', long, default_value = DEFAULT_DATA_URL)]
    data_url: String,

    /// Directory for the preference database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Leave the gallery empty instead of showing an error block on load failure
    #[arg(long)]
    no_inline_errors: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let config = GalleryConfig {
        data_source: DataSource::parse(&args.data_url),
        inline_errors: !args.no_inline_errors,
    };

    tracing::info!(
        "Starting with data source {} and data dir: {:?}",
        config.data_source,
        data_dir
    );

    let _ = DATA_DIR.set(data_dir);
    let _ = GALLERY_CONFIG.set(config);

    let window = WindowBuilder::new()
        .with_title("Recipe Gallery")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 860.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
