use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use lidarrify::{cli, config, store::MatchStore, warning};

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
    /// Match library tracks against MusicBrainz recordings
    Tracks(MatchOptions),

    /// Match library albums against MusicBrainz release groups
    Albums(MatchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct MatchOptions {
    /// Path to the Apple Music library export (Library.xml)
    #[clap(long, required_unless_present = "recheck")]
    pub source: Option<PathBuf>,

    /// Re-attempt the entries of an earlier not-found file instead of
    /// reading a library export
    #[clap(long)]
    pub recheck: bool,

    /// Output path for matched MusicBrainz identifiers
    #[clap(long)]
    pub found: PathBuf,

    /// Output path for entries without a match
    #[clap(long = "not-found")]
    pub not_found: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Tracks(opt) => {
            let store = MatchStore::new(opt.found, opt.not_found);
            cli::tracks(opt.source, opt.recheck, store).await
        }
        Command::Albums(opt) => {
            let store = MatchStore::new(opt.found, opt.not_found);
            cli::albums(opt.source, opt.recheck, store).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
