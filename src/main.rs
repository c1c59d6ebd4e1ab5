//! Model Picker - pick the default model for a terminal chat client

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use model_picker::app::{Host, listing};
use model_picker::{App, Config, ModelSelector, Settings, catalog, paths};
use tracing::info;

mod tui;

/// Searchable, provider-grouped model selector
#[derive(Parser)]
#[command(name = "model-picker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog file (JSON list of models); overrides the config file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Drawer title
    #[arg(long)]
    title: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the grouped catalog and exit
    List {
        /// Only show models whose label contains this text
        #[arg(long, default_value = "")]
        search: String,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let mut config = cli
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from)?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    if let Some(title) = cli.title {
        config.title = Some(title);
    }

    let mut models = config.catalog_path.as_deref().map_or_else(
        || Ok(catalog::builtin()),
        |path| {
            catalog::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))
        },
    )?;
    catalog::sort_by_order(&mut models);
    info!(count = models.len(), "Catalog ready");

    let settings = Settings::load();

    match cli.command {
        Some(Commands::List { search }) => {
            let selector = ModelSelector::new(&models, false)
                .defaults(settings.default_model(), settings.default_provider());
            print!("{}", listing(&selector, &search));
            Ok(())
        }
        None => {
            let host = Host::new(settings, Some(Settings::path()));
            tui::run(App::new(config, models, host))
        }
    }
}

/// Log to `<tmp>/model-picker.log` when `DEBUG` is 1-3 (1=warn, 2=info, 3=debug)
fn init_logging() {
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let log_path = paths::log_path();
    // Start each run with an empty log
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let dir = log_path
        .parent()
        .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
    let file_appender = tracing_appender::rolling::never(dir, "model-picker.log");
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_list_with_search() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["model-picker", "list", "--search", "gpt"])?;
        assert!(matches!(cli.command, Some(Commands::List { ref search }) if search == "gpt"));
        Ok(())
    }

    #[test]
    fn test_cli_global_catalog_flag() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["model-picker", "list", "--catalog", "models.json"])?;
        assert_eq!(cli.catalog, Some(PathBuf::from("models.json")));
        Ok(())
    }

    #[test]
    fn test_cli_defaults_to_tui() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["model-picker", "--title", " Pick "])?;
        assert!(cli.command.is_none());
        assert_eq!(cli.title.as_deref(), Some(" Pick "));
        Ok(())
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }
}
