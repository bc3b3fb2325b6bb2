use crate::report::{run_readiness_report, ReadinessReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pro_readiness::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Professional Readiness Service",
    about = "Serve and inspect profile completion and activation eligibility for professionals",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate professionals offline from a JSON seed file
    Readiness {
        #[command(subcommand)]
        command: ReadinessCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ReadinessCommand {
    /// Print the admin readiness report for one professional
    Report(ReadinessReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON array of professional profiles loaded into the in-memory store
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Readiness {
            command: ReadinessCommand::Report(args),
        } => run_readiness_report(args),
    }
}
