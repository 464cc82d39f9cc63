use crate::report::{run_calculate, run_catalog, CalculateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use retrofit_grant::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Retrofit Grant Calculator",
    about = "Estimate Czyste Powietrze retrofit grants from the command line or over HTTP",
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
    /// Print the fundable items with their full-rate grant ceilings
    Catalog,
    /// Resolve the subsidy tier and price a bill of works
    Calculate(CalculateArgs),
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
        Command::Catalog => {
            run_catalog();
            Ok(())
        }
        Command::Calculate(args) => run_calculate(args),
    }
}
