use clap::{CommandFactory, Parser, Subcommand};
use stillpoint_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "stillpoint", version, about = "Stillpoint CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Paced breathing exercise (inhale 4s, hold 4s, exhale 6s, rest 2s)
    Breathe(commands::breathe::BreatheArgs),
    /// Show the breathing phase table
    Phases {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Meditation countdown
    Meditate(commands::meditate::MeditateArgs),
    /// Meditation guides
    Guides {
        #[command(subcommand)]
        action: commands::guides::GuidesAction,
    },
    /// Practice streak from completion dates
    Streak(commands::streak::StreakArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Install the stderr subscriber. `RUST_LOG` wins over `logging.level`;
/// an unreadable config falls back to the default level.
fn init_tracing(config: Option<&Config>) {
    let directive = config.map_or_else(|| Config::default().log_directive(), Config::log_directive);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let loaded = Config::load();
    init_tracing(loaded.as_ref().ok());
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default config");
        Config::default()
    });

    let result = match cli.command {
        Commands::Breathe(args) => commands::breathe::run(args, &config).await,
        Commands::Phases { json } => commands::breathe::phases(json),
        Commands::Meditate(args) => commands::meditate::run(args, &config).await,
        Commands::Guides { action } => commands::guides::run(action),
        Commands::Streak(args) => commands::streak::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "stillpoint", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
