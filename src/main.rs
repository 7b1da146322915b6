use anyhow::Result;
use clap::Parser;
use logo_embed::cli::{handle_generate, handle_print, Cli, Commands};
use logo_embed::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new();
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Generate) | None => handle_generate(&config, &mut stdout),
        Some(Commands::Print) => handle_print(&config, &mut stdout),
    }
}
