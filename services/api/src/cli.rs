use crate::report::{run_example, run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use interview_scoring::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Interview Scoring Engine",
    about = "Score recorded interview sessions over HTTP or from the command line",
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
    /// Score a JSON request or CSV transcript and print the result
    Score(ScoreArgs),
    /// Print the canned example request
    Example,
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
        Command::Score(args) => run_score(args),
        Command::Example => run_example(),
    }
}
