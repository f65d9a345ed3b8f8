use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use solar_leads::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Solar Lead Qualification Engine",
    about = "Score residential solar leads from the command line or over HTTP",
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
    /// Score leads from a JSON file or an Airtable CSV export
    Score(ScoreArgs),
    /// Score a built-in set of sample leads covering every tier
    Demo(DemoArgs),
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
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["solar-leads"]).expect("parses without args");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["solar-leads", "score"]).is_err());
        assert!(Cli::try_parse_from([
            "solar-leads",
            "score",
            "--json",
            "a.json",
            "--csv",
            "b.csv"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["solar-leads", "score", "--csv", "leads.csv"]).is_ok());
    }
}
