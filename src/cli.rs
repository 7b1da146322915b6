use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::io::Write;

use crate::config::Config;
use crate::constants;
use crate::services::{encoder, FileService};

#[derive(Parser)]
#[command(name = "convert-logo")]
#[command(author, version, about = "Embed the logo image as a base64 data URL constant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the generated module (default)
    Generate,

    /// Print the constant to stdout without writing any file
    Print,
}

pub fn handle_generate(config: &Config, out: &mut impl Write) -> Result<()> {
    crate::run(config)?;
    info!("Generated {:?} from {:?}", config.output_path, config.input_path);
    writeln!(out, "{}", constants::SUCCESS_MESSAGE)?;
    Ok(())
}

pub fn handle_print(config: &Config, out: &mut impl Write) -> Result<()> {
    let file_service = FileService::new(config.input_path.clone(), config.output_path.clone());
    let bytes = file_service.read_input()?;
    let url = encoder::data_url(&config.mime_type, &bytes);
    out.write_all(encoder::render_snippet(&config.const_name, &url).as_bytes())?;
    Ok(())
}
