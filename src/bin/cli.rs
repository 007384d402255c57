// src/bin/cli.rs
use beck_picker::{cli, log};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init_stderr();
    cli::run(cli::parse()).await
}
