use anyhow::Result;
use clap::Parser;
use frontend::{
    HttpSpellService,
    cli::{Args, run},
};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let service = HttpSpellService::new(&args.api_url)?;

    run(args.command, &service).await
}
