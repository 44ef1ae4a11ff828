use crate::prelude::*;
use clap::Parser;

mod api;
mod browse;
mod error;
mod page;
mod prelude;
mod render;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse Open Library search results from the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "BOOKGRID_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Page through the search results interactively
    Browse(browse::BrowseOptions),

    /// Render a single page of results and exit
    Page(page::PageOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Browse(options) => browse::run(options, app.global).await,
        SubCommands::Page(options) => page::run(options, app.global).await,
    }
}
