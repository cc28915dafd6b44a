use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "ferias-cli", version, about = "Ferias CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Live countdown display
    Watch {
        /// Render a single frame and exit
        #[arg(long)]
        once: bool,
        /// Print events as JSON lines instead of the board
        #[arg(long)]
        json: bool,
    },
    /// Print the current countdown state as JSON
    Status,
    /// Remaining school days
    Days {
        /// Count from this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Watch { once, json } => commands::watch::run(once, json),
        Commands::Status => commands::status::run(),
        Commands::Days { from, json } => commands::days::run(from, json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
