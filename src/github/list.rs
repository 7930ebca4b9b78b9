use anyhow::{anyhow, Result};
use octocrab::Octocrab;

use crate::github::types::Repository;

/// List a user's public repositories, following pagination.
pub async fn list_user_repos(client: &Octocrab, username: &str) -> Result<Vec<Repository>> {
    let page = client
        .users(username)
        .repos()
        .per_page(100)
        .send()
        .await
        .map_err(|e| map_api_error(e, username))?;

    let models = client
        .all_pages(page)
        .await
        .map_err(|e| map_api_error(e, username))?;

    Ok(models.into_iter().map(map_repository).collect())
}

/// Translate octocrab errors into something actionable for the user
fn map_api_error(e: octocrab::Error, username: &str) -> anyhow::Error {
    let error_str = format!("{:?}", e);
    if error_str.contains("404") || error_str.contains("Not Found") {
        anyhow!(
            "GitHub user '{}' not found. Check the username spelling.",
            username
        )
    } else if error_str.contains("401") || error_str.contains("Bad credentials") {
        anyhow!("Authentication failed. Your GITHUB_TOKEN may be invalid or expired.")
    } else if error_str.contains("rate limit") || error_str.contains("403") {
        anyhow!("GitHub API rate limit exceeded. Set GITHUB_TOKEN or wait a few minutes.")
    } else {
        anyhow!("GitHub API error: {}", e)
    }
}

/// Map octocrab's repository model onto our input record. Absent optional
/// fields become their neutral values rather than errors.
fn map_repository(repo: octocrab::models::Repository) -> Repository {
    Repository {
        name: repo.name,
        description: repo.description,
        homepage: repo.homepage,
        has_pages: repo.has_pages.unwrap_or(false),
        language: repo
            .language
            .and_then(|v| v.as_str().map(str::to_string)),
        updated_at: repo.updated_at.map(|ts| ts.to_rfc3339()),
        stargazers_count: repo.stargazers_count.unwrap_or(0),
        html_url: repo.html_url.map(|u| u.to_string()),
    }
}
