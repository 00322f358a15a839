//! Thoughtbox command-line surface.
//!
//! # Responsibility
//! - Map journal operations onto clap subcommands.
//! - Render thought cards, the mood chart and quotes as plain text.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thoughtbox_core::db::open_db;
use thoughtbox_core::{
    chart_bars, counts_by_mood, JournalService, KvJournalRepository, Mood, QuoteClient,
    SqliteKvRepository, ThoughtId, ALL_MOODS,
};

const CHART_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "thoughtbox", version, about = "Mood-tagged thought journal")]
struct Cli {
    /// Path to the journal database file.
    #[arg(long, default_value = "thoughtbox.db")]
    db: PathBuf,

    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture a thought, tagged with the session mood unless --mood is given.
    Add {
        text: String,
        #[arg(long)]
        mood: Option<String>,
    },
    /// Remove one thought by id.
    Remove { id: ThoughtId },
    /// List thoughts, most recent first.
    List,
    /// Set the session mood used by future `add` calls.
    Mood { mood: String },
    /// Show the mood frequency bar chart.
    Stats,
    /// Fetch an inspirational quote (a built-in line is shown when offline).
    Inspire,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| anyhow!("--log-dir must be valid UTF-8"))?;
        thoughtbox_core::init_logging(thoughtbox_core::default_log_level(), log_dir)
            .map_err(|err| anyhow!(err))?;
    }

    // `inspire` needs no journal state; skip opening the database for it.
    if matches!(cli.command, Commands::Inspire) {
        print_quote();
        return Ok(());
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open journal database at {}", cli.db.display()))?;
    let kv = SqliteKvRepository::try_new(&conn).context("journal database is not usable")?;
    let mut journal =
        JournalService::load(KvJournalRepository::new(kv)).context("failed to load journal")?;

    match cli.command {
        Commands::Add { text, mood } => {
            let thought = match mood {
                Some(raw) => {
                    let mood = parse_mood(&raw)?;
                    journal.add(text, mood)?
                }
                None => journal.capture(text)?,
            };
            println!("captured {} [{}] {}", thought.id, thought.mood, thought.text);
        }
        Commands::Remove { id } => {
            if journal.remove(id)? {
                println!("removed {id}");
            } else {
                println!("no thought with id {id}");
            }
        }
        Commands::List => {
            if journal.thoughts().is_empty() {
                println!("no thoughts captured yet");
            }
            for thought in journal.thoughts() {
                println!(
                    "{}  {}  [{}]  {}",
                    thought.id,
                    thought.created_at.format("%Y-%m-%d %H:%M"),
                    thought.mood,
                    thought.text
                );
            }
        }
        Commands::Mood { mood } => {
            let mood = parse_mood(&mood)?;
            journal.set_mood(mood)?;
            println!("session mood set to {mood}");
        }
        Commands::Stats => print_chart(&journal),
        Commands::Inspire => unreachable!("handled before opening the database"),
    }

    Ok(())
}

fn parse_mood(raw: &str) -> Result<Mood> {
    Mood::parse(&raw.trim().to_ascii_lowercase()).ok_or_else(|| {
        let known = ALL_MOODS.map(Mood::as_str).join("|");
        anyhow!("unknown mood `{raw}`; expected one of {known}")
    })
}

fn print_chart(journal: &JournalService<KvJournalRepository<SqliteKvRepository<'_>>>) {
    let counts = counts_by_mood(journal.thoughts());
    let bars = chart_bars(&counts);
    if bars.is_empty() {
        println!("no thoughts to visualize yet");
        return;
    }

    for bar in bars {
        let width = (bar.height_pct as usize * CHART_WIDTH / 100).max(1);
        println!(
            "{:<10} {} {} ({})",
            bar.mood,
            "#".repeat(width),
            bar.count,
            bar.color
        );
    }
}

fn print_quote() {
    let quote = QuoteClient::new().fetch_inspiration();
    println!("\"{}\"", quote.content);
    if let Some(author) = quote.author {
        println!("  - {author}");
    }
}
