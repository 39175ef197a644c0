use crate::quote::{run_classes, run_quote, ClassesArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use moveflow::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Moveflow Pricing Service",
    about = "Host the moveflow pricing engine over HTTP or price bookings from the command line",
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
    /// Price a single booking and print the itemized breakdown
    Quote(QuoteArgs),
    /// List the vehicle-class catalog with display prices
    Classes(ClassesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Vehicle-class catalog CSV (overrides APP_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<std::path::PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Classes(args) => run_classes(args),
    }
}
