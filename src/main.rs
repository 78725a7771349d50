use clap::Parser;
use hourglass::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), hourglass::AppError> {
    run(Cli::parse()).await
}
