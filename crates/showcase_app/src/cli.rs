use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use showcase_core::form::Urgency;
use showcase_core::ListKind;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "showcase",
    version,
    about = "Browse agency listings and serve the contact endpoint"
)]
pub struct Cli {
    /// RON config file (defaults to ./showcase.ron when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Interactive list browser in the terminal
    Browse(BrowseArgs),
    /// Run the contact endpoint until Ctrl+C
    Serve(ServeArgs),
    /// Fill the contact form from flags and submit it
    Contact(ContactArgs),
}

#[derive(Debug, Args, Clone)]
pub struct BrowseArgs {
    /// Which list to browse: jobs, posts or portfolio
    #[arg(long, default_value_t = ListKind::Jobs)]
    pub list: ListKind,

    /// JSON array of items to browse instead of the built-in list
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory holding saved sets
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// Directory CSV exports are written to
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Initial page size (4, 6 or 9)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Args, Clone)]
pub struct ServeArgs {
    /// Listen address, e.g. 127.0.0.1:3000
    #[arg(long)]
    pub addr: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ContactArgs {
    /// Site root the endpoint lives under
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub base_url: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub message: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub service: Option<String>,

    #[arg(long)]
    pub budget: Option<u64>,

    #[arg(long)]
    pub deadline: Option<String>,

    #[arg(long, default_value = "normal")]
    pub urgency: Urgency,

    /// File sent inline with the brief (10 MB max)
    #[arg(long)]
    pub attach: Option<PathBuf>,
}
