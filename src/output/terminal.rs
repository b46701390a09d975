// Colored terminal output for verdicts and the dial table.
//
// This module handles all terminal-specific formatting: colors, tables,
// severity markers. The main.rs display paths delegate here.

use colored::Colorize;

use crate::dial::DialConfig;
use crate::models::{ModerationVerdict, Severity};
use crate::output::truncate_chars;

/// Display a full verdict for one moderated text.
pub fn display_verdict(text: &str, verdict: &ModerationVerdict) {
    println!("\n{}", "=== Moderation Verdict ===".bold());
    println!("  Text: \"{}\"", truncate_chars(text, 120).dimmed());
    println!(
        "  Dial: {} ({})",
        verdict.dial_level,
        verdict.dial_name.bold()
    );

    let flag_str = if verdict.flagged {
        "FLAGGED".red().bold()
    } else {
        "clean".green()
    };
    println!(
        "  Result: {flag_str}  (overall {:.3})",
        verdict.overall_score
    );

    println!();
    println!(
        "  {:<16} {:>10}  {:<8}  {}",
        "Category".dimmed(),
        "Confidence".dimmed(),
        "Severity".dimmed(),
        "Detected".dimmed(),
    );
    println!("  {}", "-".repeat(48).dimmed());

    for cat in &verdict.categories {
        let marker = if cat.detected {
            "yes".red().bold().to_string()
        } else {
            "no".green().to_string()
        };
        println!(
            "  {:<16} {:>10.3}  {:<8}  {}",
            cat.category,
            cat.confidence,
            colorize_severity(cat.severity),
            marker,
        );
    }

    if let Some(redacted) = &verdict.redacted_text {
        println!("\n  Redacted: \"{}\"", truncate_chars(redacted, 120));
    }

    println!(
        "\n  {}",
        format!("processed in {:.2}ms", verdict.processing_time_ms).dimmed()
    );
}

/// Display the five dial presets as a table.
pub fn display_dial_table(configs: &[(u8, &DialConfig)]) {
    println!("\n{}", "=== Dial Presets ===".bold());
    println!();

    for (level, config) in configs {
        let categories: Vec<&str> = config
            .active_categories
            .iter()
            .map(|c| c.as_str())
            .collect();

        println!("  {} {}", format!("{level}.").bold(), config.name.bold());
        println!("     {}", config.description.dimmed());
        println!(
            "     categories: {}  multiplier: {:.2}",
            categories.join(", "),
            config.sensitivity_multiplier,
        );
        if !config.allowed_terms.is_empty() {
            let mut allowed: Vec<&str> = config.allowed_terms.iter().map(String::as_str).collect();
            allowed.sort_unstable();
            println!("     always allowed: {}", allowed.join(", ").dimmed());
        }
        println!();
    }
}

fn colorize_severity(severity: Severity) -> String {
    match severity {
        Severity::High => severity.as_str().red().bold().to_string(),
        Severity::Medium => severity.as_str().yellow().to_string(),
        Severity::Low => severity.as_str().dimmed().to_string(),
    }
}
