mod app;
mod config;
mod input;
mod palette;
mod select;
mod storage;
mod tui;
mod workflow;

use anyhow::Context;
use clap::{Parser, Subcommand};
use palette::{ColorEntry, ColorStore};
use storage::SqliteStore;

#[derive(Debug, Parser)]
#[command(name = "swatch", version, about = "Terminal color palette picker")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print the combined palette to stdout (headless).
    List,
    /// Filter the palette by name or hex and print matches (headless).
    Search { query: String },
    /// Add a custom color.
    Add {
        hex: String,
        /// Display name; defaults to "Custom #HEX".
        #[arg(long)]
        name: Option<String>,
    },
    /// Remove a custom color by hex.
    Remove { hex: String },
    /// Remove all custom colors.
    Clear {
        /// Actually do it; clearing is destructive and not prompted here.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let mut terminal =
                tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path)?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::List => {
            let store = open_store(&cfg)?;
            print_entries(store.all());
        }
        Command::Search { query } => {
            let store = open_store(&cfg)?;
            let matches = palette::filter_entries(store.all(), &query);
            if matches.is_empty() {
                println!("No colors found.");
            } else {
                print_entries(matches);
            }
        }
        Command::Add { hex, name } => {
            let mut store = open_store(&cfg)?;
            let normalized = palette::normalize_hex(&hex)
                .with_context(|| format!("enter a hex like #RRGGBB or #RGB, got {hex:?}"))?;
            let name = name.unwrap_or_else(|| format!("Custom {normalized}"));
            store.add(ColorEntry::custom(name.clone(), normalized.clone()))?;
            println!("Added {name} ({normalized})");
        }
        Command::Remove { hex } => {
            let mut store = open_store(&cfg)?;
            let found = store
                .find(&hex)
                .map(|e| (e.name.clone(), e.hex.clone(), e.is_custom));
            match found {
                Some((_, hex, true)) => {
                    store.remove(&hex);
                    println!("Removed {hex}");
                }
                Some((name, hex, false)) => {
                    anyhow::bail!("{name} ({hex}) is built-in and can't be removed")
                }
                None => println!("No custom color {hex} to remove."),
            }
        }
        Command::Clear { yes } => {
            if !yes {
                anyhow::bail!("this removes every custom color; re-run with --yes to confirm");
            }
            let mut store = open_store(&cfg)?;
            let n = store.customs().len();
            store.clear();
            println!("Cleared {n} custom color(s).");
        }
    }

    Ok(())
}

fn open_store(cfg: &config::Config) -> anyhow::Result<ColorStore<SqliteStore>> {
    let kv = SqliteStore::open(&cfg.palette_db_path())?;
    Ok(ColorStore::load(kv))
}

fn print_entries<'a>(entries: impl IntoIterator<Item = &'a ColorEntry>) {
    for e in entries {
        let tag = if e.is_custom { "  (custom)" } else { "" };
        println!("{:<16} {}{}", e.name, e.hex, tag);
    }
}
