use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, run_score_report, DemoArgs, ScoreReportArgs};
use crate::server;
use qap_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "LIHTC QAP Score Estimator",
    about = "Estimate and serve LIHTC Qualified Allocation Plan scores for Texas and California locations",
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
    /// Score a property location from the command line
    Score {
        #[command(subcommand)]
        command: ScoreCommand,
    },
    /// Run an end-to-end demo covering both jurisdictions
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ScoreCommand {
    /// Generate a QAP score report for a location
    Report(ScoreReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score {
            command: ScoreCommand::Report(args),
        } => run_score_report(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
