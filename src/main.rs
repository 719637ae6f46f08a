//! Wordhop - CLI
//!
//! Word-ladder puzzle client with a TUI play mode and a gateway probe.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use wordhop::{
    game::{Difficulty, GameMode, HintType, PlayerSettings},
    gateway::{Gateway, HttpGateway},
    interactive::{App, run_tui},
    output::print_word_pair,
};

#[derive(Parser)]
#[command(
    name = "wordhop",
    about = "Word-ladder puzzle client: hop from the start word to the end word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the puzzle service
    #[arg(
        short = 's',
        long,
        global = true,
        default_value = "http://localhost:8080/api"
    )]
    server: String,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    letters: usize,

    /// Hops between the start and end words
    #[arg(short = 'n', long, global = true, default_value_t = 5)]
    hops: usize,

    /// Session mode
    #[arg(long, global = true, value_enum, default_value_t = GameMode::Casual)]
    mode: GameMode,

    /// Difficulty requested from the word-pair generator
    #[arg(short = 'd', long, global = true, value_enum, default_value_t = Difficulty::Standard)]
    difficulty: Difficulty,

    /// Hint flavor: one letter or the whole word
    #[arg(long = "hint-type", global = true, value_enum, default_value_t = HintType::Letter)]
    hint_type: HintType,

    /// Disable sound cues
    #[arg(long, global = true)]
    no_sound: bool,

    /// Puzzle language
    #[arg(long, global = true, default_value = "en")]
    language: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Fetch one word pair from the service and print it
    Pair,
}

fn settings_from_cli(cli: &Cli) -> Result<PlayerSettings> {
    if cli.letters < 2 {
        bail!("Words need at least 2 letters, got {}", cli.letters);
    }
    if cli.hops < 2 {
        bail!(
            "A puzzle needs at least 2 hops for an editable row, got {}",
            cli.hops
        );
    }
    Ok(PlayerSettings {
        num_letters: cli.letters,
        num_hops: cli.hops,
        game_mode: cli.mode,
        difficulty: cli.difficulty,
        hint_type: cli.hint_type,
        sound: !cli.no_sound,
        language: cli.language.clone(),
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = settings_from_cli(&cli)?;
    let gateway =
        HttpGateway::new(&cli.server).with_context(|| format!("connecting to {}", cli.server))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(settings, Arc::new(gateway));
            run_tui(app)
        }
        Commands::Pair => {
            let pair = gateway
                .word_pair(settings.num_letters, settings.num_hops)
                .context("fetching a word pair")?;
            print_word_pair(&pair, &settings);
            Ok(())
        }
    }
}
