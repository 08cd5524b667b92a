mod cli;
mod platform;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use showcase_core::PAGE_SIZE_OPTIONS;
use showcase_engine::{shutdown_signal, LogSink};
use showcase_logging::{showcase_info, LogDestination};
use tokio::net::TcpListener;

use cli::{BrowseArgs, Cli, Command};
use platform::app::{run_browser, BrowseOptions};
use platform::config::{load_config, AppConfig, ConfigOrigin};
use platform::contact::submit_contact;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, origin) = load_config(cli.config.as_deref())?;

    let destination = match (&cli.command, config.log_to_file) {
        // The browser owns the terminal; keep logs out of its frames.
        (Command::Browse(_), true) => LogDestination::File,
        (_, true) => LogDestination::Both,
        (_, false) => LogDestination::Terminal,
    };
    showcase_logging::initialize(destination, LevelFilter::Info);
    match &origin {
        ConfigOrigin::File(path) => showcase_info!("Loaded config from {:?}", path),
        ConfigOrigin::Defaults { missing } => {
            showcase_info!("No config at {:?}; using defaults", missing)
        }
    }

    match cli.command {
        Command::Browse(args) => run_browser(browse_options(&config, args)?),
        Command::Serve(args) => {
            let addr = args.addr.unwrap_or_else(|| config.listen_addr.clone());
            runtime()?.block_on(run_server(&addr))
        }
        Command::Contact(args) => {
            let message = runtime()?.block_on(submit_contact(args))?;
            println!("{message}");
            Ok(())
        }
    }
}

fn browse_options(config: &AppConfig, args: BrowseArgs) -> Result<BrowseOptions> {
    let mut settings = config.browser_settings();
    if let Some(page_size) = args.page_size {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            bail!("--page-size must be one of {:?}", PAGE_SIZE_OPTIONS);
        }
        settings.page_size = page_size;
    }
    Ok(BrowseOptions {
        kind: args.list,
        catalog: args.catalog,
        state_dir: args.state_dir.unwrap_or_else(|| config.state_dir.clone()),
        export_dir: args.export_dir.unwrap_or_else(|| config.export_dir.clone()),
        settings,
    })
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

async fn run_server(addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    showcase_engine::serve(listener, Arc::new(LogSink), shutdown_signal())
        .await
        .context("contact endpoint stopped with an error")?;
    showcase_info!("Contact endpoint shut down");
    Ok(())
}
