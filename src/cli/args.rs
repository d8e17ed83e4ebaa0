use clap::Parser;

/// The tool takes no flags or subcommands; the target username is asked
/// for interactively and everything else comes from the config file.
#[derive(Parser, Debug)]
#[command(
    name = "tgwatch",
    version,
    about = "Watch a Telegram profile for bio/photo changes and summarize your dialogs"
)]
pub struct Cli {}
