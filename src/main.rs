use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use sift::config::Config;
use sift::engine::ModerationEngine;
use sift::models::ModerationRequest;
use sift::output::terminal;

/// Sift: rule-based content moderation with dialable strictness.
///
/// Scores text against fixed content categories (profanity, toxicity,
/// hate speech, spam), produces per-category confidence and a redacted
/// copy when something is detected.
#[derive(Parser)]
#[command(name = "sift", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Moderate a single text and print the verdict
    Moderate {
        /// The text to score
        text: String,

        /// Strictness dial, 1 (strictest) to 5 (most permissive).
        /// Defaults to SIFT_DEFAULT_DIAL or 3.
        #[arg(long)]
        dial: Option<u8>,

        /// Extra term to detect and redact (repeatable)
        #[arg(long = "block")]
        blocked: Vec<String>,

        /// Term to exempt from detection (repeatable)
        #[arg(long = "allow")]
        allowed: Vec<String>,

        /// Print the raw JSON verdict instead of the table
        #[arg(long)]
        json: bool,
    },

    /// List the five dial presets
    Dials,

    /// Run a set of sample texts through the engine
    Demo,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sift=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let engine = ModerationEngine::with_redaction_char(config.redaction_char);

    match cli.command {
        Commands::Moderate {
            text,
            dial,
            blocked,
            allowed,
            json,
        } => {
            let request = ModerationRequest {
                text,
                dial: dial.unwrap_or(config.default_dial),
                custom_blocked_terms: blocked,
                custom_allowed_terms: allowed,
            };

            let verdict = engine.moderate(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                terminal::display_verdict(&request.text, &verdict);
            }
        }

        Commands::Dials => {
            terminal::display_dial_table(&engine.dial_configs());
        }

        Commands::Demo => {
            run_demo(&engine, config.default_dial)?;
        }
    }

    Ok(())
}

/// Run canned sample texts through the engine at various dials. Useful
/// for eyeballing catalog coverage after editing the pattern tables.
fn run_demo(engine: &ModerationEngine, default_dial: u8) -> Result<()> {
    let samples: &[(&str, &str, u8, &[&str])] = &[
        (
            "Clean text",
            "Hello! This is a perfectly normal and friendly message. Have a great day!",
            default_dial,
            &[],
        ),
        (
            "Profanity at dial 1 (Family Safe)",
            "This is some bullshit and you're a damn fool.",
            1,
            &[],
        ),
        (
            "Same text at dial 3 (General) — mild profanity tolerated",
            "This is some bullshit and you're a damn fool.",
            3,
            &[],
        ),
        (
            "Toxic language",
            "You're so stupid and dumb. Just shut up already, moron.",
            2,
            &[],
        ),
        (
            "Spam",
            "CLICK HERE NOW! Buy viagra cheap! Limited time offer guaranteed! www.scam.com",
            3,
            &[],
        ),
        (
            "Custom blocked term",
            "the launch codename is zephyr, repeat, zephyr",
            3,
            &["zephyr"],
        ),
    ];

    for (label, text, dial, blocked) in samples {
        println!("\n{}", format!("--- {label} ---").bold());

        let request = ModerationRequest {
            text: text.to_string(),
            dial: *dial,
            custom_blocked_terms: blocked.iter().map(|s| s.to_string()).collect(),
            custom_allowed_terms: Vec::new(),
        };

        let verdict = engine.moderate(&request)?;
        terminal::display_verdict(&request.text, &verdict);
    }

    println!("\n{}", "Demo complete.".green().bold());
    Ok(())
}
