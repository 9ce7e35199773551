use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "marketscan")]
#[command(about = "Market scanner CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the scan catalogue
    List,
    /// Run a scan against its universe and print the results
    Scan {
        /// Scan slug, e.g. top-gainers
        slug: String,
        /// Show at most this many results
        #[arg(short, long)]
        limit: Option<usize>,
        /// Prefer symbols not surfaced earlier in the session
        #[arg(long)]
        diversify: bool,
    },
    /// Start the server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 9870)]
        port: u16,
    },
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            commands::list::run();
        }
        Commands::Scan {
            slug,
            limit,
            diversify,
        } => {
            commands::scan::run(&slug, limit, diversify);
        }
        Commands::Serve { port } => {
            commands::serve::run(port).await;
        }
    }
}
