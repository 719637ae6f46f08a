//! Terminal output for the non-TUI probe command

use crate::game::PlayerSettings;
use crate::gateway::WordPair;
use colored::Colorize;

/// Print a fetched word pair with the puzzle dimensions it was asked for
pub fn print_word_pair(pair: &WordPair, settings: &PlayerSettings) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        " Word pair for {} letters, {} hops",
        settings.num_letters, settings.num_hops
    );
    println!("{}", "─".repeat(50).cyan());
    println!(
        "  start: {}",
        pair.start_word.to_uppercase().bright_yellow().bold()
    );
    for _ in 0..settings.num_hops.saturating_sub(1) {
        println!("         {}", "·".repeat(settings.num_letters).dimmed());
    }
    println!(
        "  end:   {}",
        pair.end_word.to_uppercase().bright_green().bold()
    );
    println!();
}
