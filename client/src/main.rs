use clap::Parser;
use log::LevelFilter;

use nft_converter_client::{
    cli::{Action, Cli},
    commands::{handle_checksum, handle_run},
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.action {
        Action::Run => {
            let report = handle_run(&cli.config)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Action::Checksum { ref path } => {
            println!("{}", handle_checksum(&cli.config, path.as_deref())?);
        }
    }

    Ok(())
}

fn init_logging(verbosity: u32) {
    use LevelFilter::*;
    let filter = match verbosity {
        0..=1 => Error,
        2 => Warn,
        3 => Info,
        4 => Debug,
        _other => Trace,
    };

    env_logger::builder().filter_level(filter).init();
}
