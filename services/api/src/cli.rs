use crate::server;
use crate::workers::{run_workers_list, run_workers_show, WorkersListArgs, WorkersShowArgs};
use clap::{Args, Parser, Subcommand};
use direhire::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DireHire Storefront",
    about = "Serve and browse the worker marketplace from the command line",
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
    /// Browse worker listings and profiles
    Workers {
        #[command(subcommand)]
        command: WorkersCommand,
    },
}

#[derive(Subcommand, Debug)]
enum WorkersCommand {
    /// Print one page of the filtered, sorted listing
    List(WorkersListArgs),
    /// Print a worker profile with its reviews
    Show(WorkersShowArgs),
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
        Command::Workers {
            command: WorkersCommand::List(args),
        } => run_workers_list(args),
        Command::Workers {
            command: WorkersCommand::Show(args),
        } => run_workers_show(args),
    }
}
