mod cli;
mod infra;
mod routes;
mod seed;
mod server;
mod workers;

use direhire::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
