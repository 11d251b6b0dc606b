use anyhow::{Context, Result};
use app_creator::prompt::NamePrompt;
use app_creator::report::Reporter;
use app_creator::{AppCreator, CreatedApp, CreatorConfig};
use clap::Parser;
use log::info;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Picked up from the apps directory when `--config` isn't given.
const DEFAULT_CONFIG_FILE: &str = "app_creator.yaml";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Apps directory holding app_template/ and app_installer.h
    #[arg(short = 'd', long, default_value = ".")]
    apps_dir: PathBuf,

    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// App name; skips the interactive prompt
    #[arg(short, long)]
    name: Option<String>,

    /// Dry run mode - don't write files
    #[arg(long)]
    dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), &cli.apps_dir)?;
    let color = !cli.no_color && std::io::stdout().is_terminal();
    let mut reporter = Reporter::stdout(color, cli.json);

    reporter.banner()?;
    // stdout carries only the JSON document in --json mode
    let raw = match cli.name {
        Some(name) => name,
        None if cli.json => NamePrompt::new(std::io::stdin().lock(), std::io::stderr())
            .read_name()
            .context("Failed to read app name")?,
        None => NamePrompt::stdio()
            .read_name()
            .context("Failed to read app name")?,
    };
    reporter.got_input(&raw)?;

    let creator = AppCreator::new(&cli.apps_dir, config, cli.dry_run);
    if cli.dry_run {
        info!("=== DRY RUN MODE ===");
    }

    let name = creator.derive_name(&raw)?;
    reporter.app_name(&name)?;

    let paths = creator.file_paths(&name);
    reporter.file_paths(&paths)?;
    creator
        .create_app_files(&name, &paths)
        .with_context(|| format!("Failed to create files for {}", name.pascal))?;

    reporter.installing(&name)?;
    let installer = creator
        .install_app(&name)
        .with_context(|| format!("Failed to install {}", name.pascal))?;

    reporter.done(&CreatedApp {
        raw_name: raw,
        name,
        paths,
        installer,
        dry_run: cli.dry_run,
    })?;

    Ok(())
}

fn load_config(explicit: Option<&Path>, apps_dir: &Path) -> Result<CreatorConfig> {
    if let Some(path) = explicit {
        info!("Loading config from {:?}", path);
        return CreatorConfig::load(path).context("Failed to load config");
    }
    let discovered = apps_dir.join(DEFAULT_CONFIG_FILE);
    if discovered.is_file() {
        info!("Loading config from {:?}", discovered);
        return CreatorConfig::load(&discovered).context("Failed to load config");
    }
    Ok(CreatorConfig::default())
}
