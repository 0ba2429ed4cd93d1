use anyhow::Context;
use clap::Parser;
use dungeon_escape::config::Config;
use dungeon_escape::console::{self, Ending};
use dungeon_escape::renderer::Theme;
use dungeon_escape::{Session, scenario};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::BufReader;

#[derive(Debug, Parser)]
#[command(name = "dungeon-escape", version, about = "Escape the Dungeon - a text adventure")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save file used by `save` and `load` (defaults to savegame.json)
    #[arg(short, long)]
    save_file: Option<PathBuf>,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Verbose logging on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => return fatal(e.into()),
    };
    let result = rt.block_on(run(cli));
    // stdin is read on a blocking thread that stays parked in read() after an
    // interrupt; do not wait for it.
    rt.shutdown_background();

    match result {
        Ok(ending) => {
            tracing::debug!(?ending, "game finished");
            ExitCode::SUCCESS
        }
        Err(e) => fatal(e),
    }
}

fn fatal(e: anyhow::Error) -> ExitCode {
    tracing::error!(error = ?e, "fatal");
    eprintln!("Fatal error: {e:#}");
    eprintln!("The game has encountered an unexpected error and must close.");
    ExitCode::FAILURE
}

async fn run(cli: Cli) -> anyhow::Result<Ending> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)?.apply_env()?,
        None => Config::from_env()?,
    };
    if let Some(path) = cli.save_file {
        cfg.save_path = path;
    }
    if cli.no_color || !std::io::stdout().is_terminal() {
        cfg.color = false;
    }
    tracing::debug!(?cfg, "configuration");

    let state = scenario::default_scenario().context("cannot build the dungeon")?;
    let mut sess = Session::new(state, cfg.save_path.clone(), Theme::from_color(cfg.color));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    console::run(&mut sess, stdin, &mut stdout, interrupt, &cfg.prompt).await
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, prelude::*};

    // eyre reports only; panics get the quiet hook below
    let (_panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    if let Err(e) = eyre_hook.install() {
        eprintln!("cannot install error reporter: {e}");
    }
    console::install_panic_hook();

    let default = match verbose {
        0 => "warn",
        1 => "info,dungeon_escape=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();
}
