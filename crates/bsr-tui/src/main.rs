//! bsr-tui - Terminal grid viewer for Baserow tables
//!
//! Connects to a Baserow instance, fetches a table's field schema and rows,
//! and renders them as a navigable grid.

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;
use std::io::{self, stdout};
use std::path::PathBuf;

use bsr_core::storage::config::FileStore;

mod action;
mod app;
mod components;
mod event;
mod layout;
mod service;

use app::App;
use service::ParamOverrides;

#[derive(Parser, Debug)]
#[command(name = "bsr-tui")]
#[command(about = "Terminal grid viewer for Baserow tables")]
#[command(version)]
struct Cli {
    /// Baserow server address, e.g. https://baserow.example.com
    #[arg(long, env = "BSR_URL")]
    address: Option<String>,

    /// Database token for the Authorization header
    #[arg(long, env = "BSR_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Table ID to fetch
    #[arg(long)]
    table: Option<u64>,

    /// Optional view ID to filter and order rows by
    #[arg(long)]
    view: Option<u64>,

    /// Override the config file location
    #[arg(long)]
    config_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = FileStore::new(cli.config_file);
    let overrides = ParamOverrides {
        address: cli.address,
        token: cli.token,
        table: cli.table,
        view: cli.view,
    };
    let params = service::init_params(&store, &overrides);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // Set panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut app = App::new(params, Box::new(store));
    let result = app.run_async(&mut terminal).await;

    restore_terminal()?;

    if let Err(ref err) = result {
        eprintln!("Application error: {err:?}");
    }

    result
}

/// Restore terminal to normal state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
