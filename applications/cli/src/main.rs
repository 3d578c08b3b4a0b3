/// Podcastr - terminal podcast player
use clap::Parser;
use podcastr_cli::{AppConfig, Command, Reply, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr")]
#[command(about = "Podcast player driven from line commands", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./podcastr.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for shuffle selection
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.player.seed = Some(seed);
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(
        episodes = config.episodes.len(),
        seed = ?config.player.seed,
        "Starting podcastr"
    );

    let mut session = Session::from_config(&config);
    run(&mut session, io::stdin().lock(), io::stdout().lock())?;

    tracing::info!("Bye");
    Ok(())
}

fn run(session: &mut Session, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    writeln!(output, "{}", session.status_line())?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<Command>().and_then(|command| session.execute(command)) {
            Ok(Reply::Text(text)) => writeln!(output, "{}", text)?,
            Ok(Reply::Quit) => break,
            Err(err) => {
                tracing::debug!(%err, line, "Command failed");
                writeln!(output, "error: {}", err)?;
            }
        }
        output.flush()?;
    }

    Ok(())
}
