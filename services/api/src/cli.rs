use clap::{Args, Parser, Subcommand};
use talentflow::error::AppError;

use crate::demo::{run_demo, run_scoreboard_report, DemoArgs, ScoreboardReportArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Talentflow Scorecard Service",
    about = "Run and demonstrate the interview scorecard aggregation service from the command line",
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
    /// Compute an interview scoreboard for stakeholder reviews
    Scoreboard {
        #[command(subcommand)]
        command: ScoreboardCommand,
    },
    /// Run an end-to-end CLI demo covering submission and aggregation
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ScoreboardCommand {
    /// Aggregate a panel-sheet CSV export into a scoreboard report
    Report(ScoreboardReportArgs),
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
        Command::Scoreboard {
            command: ScoreboardCommand::Report(args),
        } => run_scoreboard_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
