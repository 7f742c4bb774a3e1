#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod api;
mod clipboard;
mod error;
mod format;
mod prelude;
mod readme;
mod render;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Terminal client for the IntelliDocs formatting and README generation service"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the IntelliDocs API
    #[clap(
        long,
        env = "INTELLIDOCS_API_BASE",
        global = true,
        default_value = crate::api::DEFAULT_API_BASE
    )]
    api_base: String,

    /// Whether to display additional information.
    #[clap(long, env = "INTELLIDOCS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Format raw text into structured Markdown
    Format(crate::format::FormatOptions),

    /// Generate a README for a repository URL, an archive, or a set of files
    Readme(crate::readme::ReadmeOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Format(options) => crate::format::run(options, app.global).await,
        SubCommands::Readme(options) => crate::readme::run(options, app.global).await,
    }
}
