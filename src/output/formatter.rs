use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{Assessment, DetectionResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the full assessment report for a user.
/// Renders plain terminal text; all content comes from the engine.
pub fn format_assessment(assessment: &Assessment, username: &str, use_colors: bool) -> String {
    let mut out = Vec::new();

    if !assessment.stats.has_portfolio {
        let header = format!("No portfolio repository found for {}.", username);
        if use_colors {
            out.push(header.bold().to_string());
        } else {
            out.push(header);
        }
        out.push(String::new());
        out.extend(format_recommendations(&assessment.recommendations));
        return out.join("\n");
    }

    let stats = &assessment.stats;

    let header = format!("Portfolio analysis for {}", username);
    if use_colors {
        out.push(header.bold().to_string());
    } else {
        out.push(header);
    }
    out.push(String::new());

    let mut facts = vec![stats.repo_name.clone(), format!("{} stars", stats.stars)];
    if let Some(date) = stats.last_updated.as_deref().map(date_part) {
        facts.push(format!("updated {}", date));
    }
    if use_colors {
        out.push(format!("  {}", facts.join("  ").cyan()));
    } else {
        out.push(format!("  {}", facts.join("  ")));
    }
    if !assessment.detection_reason.is_empty() {
        out.push(format!(
            "  Detected because: {}",
            assessment.detection_reason
        ));
    }
    out.push(String::new());

    let score_line = format!(
        "  Score {:>3}/100  {}",
        assessment.total_score,
        score_bar(assessment.total_score, 100, 20)
    );
    if use_colors {
        out.push(score_line.bold().to_string());
    } else {
        out.push(score_line);
    }
    out.push(String::new());

    for (label, value) in [
        ("Completeness", assessment.completeness),
        ("Code quality", assessment.code_quality),
        ("Best practices", assessment.best_practices),
        ("Presentation", assessment.presentation),
    ] {
        out.push(format!(
            "  {:<15}{:>2}/10  {}",
            label,
            value,
            score_bar(value, 10, 10)
        ));
    }
    out.push(String::new());

    out.push(format!(
        "  {:<15}{}",
        "Live demo",
        if stats.has_live_demo {
            format!("yes ({})", stats.deployment_type)
        } else {
            "no".to_string()
        }
    ));
    out.push(format!(
        "  {:<15}{}",
        "Description",
        if stats.has_description {
            format!("{} chars", stats.description_length)
        } else {
            "missing".to_string()
        }
    ));
    out.push(format!(
        "  {:<15}{}",
        "Shows projects",
        if stats.shows_projects { "yes" } else { "no" }
    ));
    out.push(String::new());

    out.extend(format_recommendations(&assessment.recommendations));
    out.join("\n")
}

fn format_recommendations(recommendations: &[String]) -> Vec<String> {
    let mut lines = vec!["Recommendations".to_string()];
    for (idx, rec) in recommendations.iter().enumerate() {
        lines.push(format!("  {}. {}", idx + 1, rec));
    }
    lines
}

/// Draw a fixed-width bar, filled proportionally to value/max
fn score_bar(value: u32, max: u32, width: usize) -> String {
    let filled = (value as usize * width) / max.max(1) as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// The date portion of an ISO-8601 timestamp ("2026-02-01T00:00:00Z" -> "2026-02-01")
fn date_part(ts: &str) -> &str {
    ts.split('T').next().unwrap_or(ts)
}

/// Format ranked detection candidates as a table: Index, Score, Name, Reasons
/// No headers. Index column: 3 chars, right-aligned. Score column: 5 chars.
pub fn format_candidate_table(candidates: &[DetectionResult], use_colors: bool) -> String {
    if candidates.is_empty() {
        return "No repositories found.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 5;
    let separator = "  ";

    candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", candidate.score, width = score_width);
            let name = &candidate.repository.name;
            let reasons = candidate.reasons.join(", ");

            // Truncate reasons to the remaining terminal width
            let fixed_width = index_width + 1 + score_width + separator.len() * 2 + name.len();
            let reasons = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_text(&reasons, width - fixed_width)
                } else {
                    truncate_text(&reasons, 20)
                }
            } else {
                reasons
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    name.cyan(),
                    separator,
                    reasons
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, name, separator, reasons
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}
