use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::config::{AssessmentRubric, DEPLOY_HOSTS, PROJECT_KEYWORDS};
use crate::github::types::Repository;

/// Structured facts about the assessed repository, for rendering.
///
/// Field names (camelCase in JSON) are a stable contract for consumers.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub has_portfolio: bool,
    pub repo_name: String,
    pub has_description: bool,
    pub description_length: usize,
    pub has_live_demo: bool,
    pub deployment_type: String,
    pub shows_projects: bool,
    pub last_updated: Option<String>,
    pub stars: u32,
}

/// The complete assessment: composite score, the four sub-scores, stats,
/// and an ordered, never-empty recommendation list.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub total_score: u32,
    pub completeness: u32,
    pub code_quality: u32,
    pub best_practices: u32,
    pub presentation: u32,
    pub stats: PortfolioStats,
    pub recommendations: Vec<String>,
    pub detection_reason: String,
}

/// Assess a confirmed portfolio repository.
///
/// Pure: the only time reference is the injected `now`, so identical input
/// always yields identical output. The total is clamped to 100.
pub fn assess_portfolio(
    repo: &Repository,
    reasons: &[String],
    rubric: &AssessmentRubric,
    now: DateTime<Utc>,
) -> Assessment {
    let description = repo.description.as_deref().unwrap_or("");
    let desc_lower = description.to_lowercase();
    let desc_len = description.chars().count();

    let has_description = desc_len > rubric.min_description_len;
    let long_description = desc_len > rubric.long_description_len;
    let has_live_demo = repo.has_pages
        || repo.has_homepage()
        || DEPLOY_HOSTS.iter().any(|host| desc_lower.contains(host));
    let shows_projects = PROJECT_KEYWORDS.iter().any(|k| desc_lower.contains(k));
    let has_language = repo
        .language
        .as_deref()
        .is_some_and(|l| !l.is_empty() && l != "Unknown");
    let last_updated = repo.last_updated();

    let mut raw = 0u32;
    if has_description {
        raw += rubric.description;
        if long_description {
            raw += rubric.long_description_bonus;
        }
    }
    if has_live_demo {
        raw += rubric.live_demo;
    }
    if shows_projects {
        raw += rubric.project_keywords;
    }
    if has_language {
        raw += rubric.language;
    }
    // The two recency bonuses are mutually exclusive
    match last_updated {
        Some(ts) if now - ts < Duration::days(rubric.recent_window_days) => {
            raw += rubric.recent_update;
        }
        Some(ts) if now - ts < Duration::days(rubric.stale_window_days) => {
            raw += rubric.stale_update;
        }
        _ => {}
    }
    let total_score = raw.min(100);

    // Narrative sub-scores, each on its own 0-10 scale
    let completeness = if long_description {
        10
    } else if has_description {
        8
    } else {
        3
    };
    let code_quality = if has_language { 8 } else { 4 };
    let best_practices = if last_updated.is_some() { 7 } else { 3 };
    let presentation = if has_live_demo { 10 } else { 2 };

    let mut recommendations = Vec::new();
    if !has_description {
        recommendations.push("Add a description to your portfolio repository.".to_string());
    }
    if !has_live_demo {
        recommendations
            .push("Deploy your portfolio using GitHub Pages, Netlify, or Vercel.".to_string());
        recommendations.push("Add the deployment URL to your repository description.".to_string());
    }
    if has_description && !shows_projects {
        recommendations
            .push("Mention your projects, skills, or experience in the description.".to_string());
    }
    recommendations.push(score_feedback(total_score, rubric).to_string());
    if !repo.has_pages && !repo.has_homepage() {
        recommendations.push("Enable GitHub Pages in repository settings.".to_string());
    }
    if recommendations.is_empty() {
        recommendations
            .push("Your portfolio repository looks good. Keep it up to date.".to_string());
    }

    Assessment {
        total_score,
        completeness,
        code_quality,
        best_practices,
        presentation,
        stats: PortfolioStats {
            has_portfolio: true,
            repo_name: repo.name.clone(),
            has_description,
            description_length: desc_len,
            has_live_demo,
            deployment_type: deployment_type(repo, &desc_lower).to_string(),
            shows_projects,
            last_updated: repo.updated_at.clone(),
            stars: repo.stargazers_count,
        },
        recommendations,
        detection_reason: reasons.join(", "),
    }
}

/// The fixed assessment returned when no candidate reached the threshold
pub fn empty_assessment() -> Assessment {
    Assessment {
        total_score: 0,
        completeness: 0,
        code_quality: 0,
        best_practices: 0,
        presentation: 0,
        stats: PortfolioStats {
            has_portfolio: false,
            repo_name: String::new(),
            has_description: false,
            description_length: 0,
            has_live_demo: false,
            deployment_type: "Not deployed".to_string(),
            shows_projects: false,
            last_updated: None,
            stars: 0,
        },
        recommendations: vec![
            "Create a portfolio repository to showcase your work.".to_string(),
            "Name it after your username or include 'portfolio' in the name so it can be found."
                .to_string(),
        ],
        detection_reason: String::new(),
    }
}

/// Classify where the portfolio is deployed. First match wins.
fn deployment_type(repo: &Repository, desc_lower: &str) -> &'static str {
    if repo.has_pages {
        "GitHub Pages"
    } else if repo.has_homepage() {
        "Custom Domain"
    } else if desc_lower.contains("netlify") {
        "Netlify"
    } else if desc_lower.contains("vercel") {
        "Vercel"
    } else if desc_lower.contains("heroku") {
        "Heroku"
    } else {
        "Not deployed"
    }
}

/// Exactly one feedback message per assessment, picked by score band
fn score_feedback(total_score: u32, rubric: &AssessmentRubric) -> &'static str {
    if total_score >= rubric.excellent_threshold {
        "Your portfolio is in great shape and ready to share."
    } else if total_score >= rubric.good_threshold {
        "Good start. A few improvements will make your portfolio stand out."
    } else if total_score >= rubric.fair_threshold {
        "Your portfolio needs improvement before sharing it with employers."
    } else {
        "Your portfolio needs major improvements. Start with the items above."
    }
}
