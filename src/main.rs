use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use mdquiz::cli::SourceArgs;
use mdquiz::session::SessionOutcome;
use mdquiz::Result;
use std::io;

#[derive(Parser)]
#[command(name = "mdquiz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive terminal quiz driven by a markdown question list", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    source: SourceArgs,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive quiz session (default)
    Play,

    /// Extract the questions without starting a session
    Extract {
        /// Output the question records as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    mdquiz::logging::init(cli.verbose);

    // One session, one thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    let result = runtime.block_on(run_async(cli));
    // A prompt cut short by Ctrl-C may still hold a blocking thread
    runtime.shutdown_background();

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let outcome = mdquiz::cli::play::run(&cli.source).await?;
            if outcome == SessionOutcome::Cancelled {
                tracing::debug!("session cancelled by user");
            }
        }

        Commands::Extract { json } => {
            mdquiz::cli::extract::run(&cli.source, json).await?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "mdquiz", &mut io::stdout());
        }
    }

    Ok(())
}
