#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lashon_core::Gender;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Gender requested on the command line (overrides the saved preference)
static INITIAL_GENDER: OnceLock<Option<Gender>> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lashon")
    })
}

/// Get the gender requested via --gender, if any
pub fn get_initial_gender() -> Option<Gender> {
    INITIAL_GENDER.get().copied().flatten()
}

/// Lashon - gender-aware Hebrew UI showcase
#[derive(Parser, Debug)]
#[command(name = "lashon-desktop")]
#[command(about = "Lashon - gender-aware Hebrew UI component showcase")]
struct Args {
    /// Data directory for preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Start with this gender selected, overriding the saved preference
    #[arg(short, long)]
    gender: Option<Gender>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lashon")
    });
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = INITIAL_GENDER.set(args.gender);

    tracing::info!("Starting with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("לשון")
            .with_inner_size(dioxus::desktop::LogicalSize::new(860.0, 920.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
