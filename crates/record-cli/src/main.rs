mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, init::StoreKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "record",
    about = "Track weightlifting personal records over SMS",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .record/)
    #[arg(long, global = true, env = "RECORD_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write .record/config.yaml and seed the header row
    Init {
        /// Row store backend
        #[arg(long, value_enum, default_value = "redb")]
        store: StoreKind,
        /// Spreadsheet id (sheets backend)
        #[arg(long)]
        spreadsheet_id: Option<String>,
        /// Port the webhook server listens on
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run the SMS webhook server
    Serve {
        /// Port to listen on (overrides config; 0 = OS-assigned)
        #[arg(long)]
        port: Option<u16>,
        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Handle one message locally and print the reply
    Send {
        /// Message text, e.g. `set squat 5x100kg`
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        message: Vec<String>,
    },

    /// List every recorded lift for an exercise
    History {
        /// squat, bench or deadlift
        exercise: String,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init {
            store,
            spreadsheet_id,
            port,
        } => cmd::init::run(&root, store, spreadsheet_id, port),
        Commands::Serve { port, bind } => cmd::serve::run(&root, port, bind),
        Commands::Send { message } => cmd::send::run(&root, &message.join(" "), cli.json),
        Commands::History { exercise } => cmd::history::run(&root, &exercise, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
