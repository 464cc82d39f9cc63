mod cli;
mod infra;
mod report;
mod routes;
mod server;

use retrofit_grant::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
