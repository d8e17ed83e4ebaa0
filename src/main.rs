use anyhow::Result;
use clap::Parser;
use console::style;

use tgwatch::cli::args::Cli;
use tgwatch::cli::commands;
use tgwatch::config::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let _cli = Cli::parse();
    let settings = Settings::load()?;

    tokio::select! {
        result = commands::handle_watch(&settings) => result,
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!("{}", style("Interrupted by user").red());
            Ok(())
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
