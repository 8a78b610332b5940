use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use vibecli::{cli, config, error, types::PkceToken};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Handle the harvested track catalog
    Tracks(TracksOptions),

    /// Handle song descriptions
    Descriptions(DescriptionsOptions),

    /// Semantic search over the description index
    Search(SearchOptions),

    /// Serve the recommendation web UI
    Serve,

    /// Some helper information about the library and pipeline state
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle the harvested track catalog",
    args_conflicts_with_subcommands = true // disallow mixing --search with subcommands
)]
pub struct TracksOptions {
    /// Search for tracks by name or artist
    #[clap(long)]
    pub search: Option<String>,

    /// Subcommands under `tracks` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<TracksSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TracksSubcommand {
    /// Harvest saved tracks and configured playlists
    Update(TracksUpdateOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct TracksUpdateOpts {
    /// Force update (skip the artist-genre cache)
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Handle song descriptions")]
pub struct DescriptionsOptions {
    #[command(subcommand)]
    pub command: DescriptionsSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum DescriptionsSubcommand {
    /// Fuzzy-match the description file onto the catalog
    Match(DescriptionsMatchOpts),

    /// Write the tagged description corpus for the search index
    Tag,
}

#[derive(Parser, Debug, Clone)]
pub struct DescriptionsMatchOpts {
    /// Description file to match, overriding DESCRIPTIONS_FILE
    #[clap(long)]
    pub source: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text description of the music you are looking for
    pub query: String,

    /// Number of recommendations to return
    #[clap(long, default_value_t = 10)]
    pub count: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    #[clap(long)]
    tracks: bool,
    #[clap(long)]
    descriptions: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Tracks(opt) => match opt.command {
            Some(TracksSubcommand::Update(u)) => cli::update_tracks(u.force).await,
            None => cli::list_tracks(opt.search).await,
        },

        Command::Descriptions(opt) => match opt.command {
            DescriptionsSubcommand::Match(m) => cli::match_descriptions(m.source).await,
            DescriptionsSubcommand::Tag => cli::tag_descriptions().await,
        },

        Command::Search(opt) => cli::search(opt.query, opt.count).await,
        Command::Serve => cli::serve().await,
        Command::Info(opt) => cli::info(opt.tracks, opt.descriptions).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
