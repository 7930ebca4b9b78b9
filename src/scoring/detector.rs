use super::config::{DetectionWeights, PERSONAL_KEYWORDS};
use crate::github::types::Repository;

/// A repository with its accumulated detection score and the matched
/// signals, in evaluation order.
#[derive(Debug, Clone)]
pub struct DetectionResult<'a> {
    pub repository: &'a Repository,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Select the repository that most plausibly is the user's portfolio.
///
/// Every repository is scored against the weighted signal set; the highest
/// scorer wins, with ties broken by input order. Returns `None` when no
/// repository reaches the detection threshold. Input is never mutated.
pub fn detect_portfolio<'a>(
    repositories: &'a [Repository],
    username: Option<&str>,
    weights: &DetectionWeights,
) -> Option<DetectionResult<'a>> {
    let username = username.map(str::to_lowercase);
    let mut best: Option<DetectionResult<'a>> = None;

    for repo in repositories {
        let candidate = score_candidate(repo, username.as_deref(), weights);
        // Strictly greater keeps the first occurrence on ties
        match &best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }

    best.filter(|b| b.score >= weights.threshold)
}

/// Score every repository and return them ranked best-first.
///
/// Used by the `rank` command. The sort is stable, so equal scores keep
/// their input order, consistent with `detect_portfolio`'s tie-break.
pub fn rank_candidates<'a>(
    repositories: &'a [Repository],
    username: Option<&str>,
    weights: &DetectionWeights,
) -> Vec<DetectionResult<'a>> {
    let username = username.map(str::to_lowercase);
    let mut ranked: Vec<_> = repositories
        .iter()
        .map(|repo| score_candidate(repo, username.as_deref(), weights))
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Accumulate the signal weights for one repository. Signals are
/// independent and evaluated in a fixed order; the reason strings are
/// appended in that same order.
fn score_candidate<'a>(
    repo: &'a Repository,
    username: Option<&str>,
    weights: &DetectionWeights,
) -> DetectionResult<'a> {
    let name = repo.name.to_lowercase();
    let description = repo
        .description
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    let combined = format!("{} {}", name, description);

    let mut score = 0u32;
    let mut reasons = Vec::new();

    if name.contains("portfolio") {
        score += weights.name_portfolio;
        reasons.push("name contains 'portfolio'".to_string());
    }
    if description.contains("portfolio") {
        score += weights.description_portfolio;
        reasons.push("description mentions 'portfolio'".to_string());
    }
    if name.ends_with(".github.io") {
        score += weights.github_io_name;
        reasons.push("named like a GitHub Pages site".to_string());
    }
    if let Some(user) = username {
        if name == user {
            score += weights.username_exact;
            reasons.push("name matches your username".to_string());
        } else if name.contains(user) {
            score += weights.username_substring;
            reasons.push("name contains your username".to_string());
        }
    }
    // Counted once no matter how many keywords match
    if PERSONAL_KEYWORDS.iter().any(|k| combined.contains(k)) {
        score += weights.personal_keyword;
        reasons.push("mentions a personal-site keyword".to_string());
    }
    if !description.is_empty() {
        score += weights.has_description;
        reasons.push("has a description".to_string());
    }
    if repo.has_pages || repo.has_homepage() {
        score += weights.live_demo;
        reasons.push("has a live deployment".to_string());
    }

    DetectionResult {
        repository: repo,
        score,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn weights() -> DetectionWeights {
        DetectionWeights::default()
    }

    #[test]
    fn test_empty_list_finds_nothing() {
        assert!(detect_portfolio(&[], Some("jdoe"), &weights()).is_none());
    }

    #[test]
    fn test_portfolio_name_dominates() {
        let repos = vec![named("dotfiles"), named("my-portfolio"), named("webapp")];
        let result = detect_portfolio(&repos, None, &weights()).unwrap();
        assert_eq!(result.repository.name, "my-portfolio");
        assert_eq!(result.score, 200);
        assert_eq!(result.reasons, vec!["name contains 'portfolio'"]);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let repos = vec![named("My-PORTFOLIO")];
        let result = detect_portfolio(&repos, None, &weights()).unwrap();
        assert_eq!(result.score, 200);
    }

    #[test]
    fn test_signals_accumulate() {
        let repos = vec![Repository {
            name: "portfolio".to_string(),
            description: Some("My personal portfolio showcasing projects".to_string()),
            has_pages: true,
            ..Default::default()
        }];
        let result = detect_portfolio(&repos, None, &weights()).unwrap();
        // name 200 + description 150 + personal keyword 50 + description 40 + demo 30
        assert_eq!(result.score, 470);
        assert_eq!(
            result.reasons,
            vec![
                "name contains 'portfolio'",
                "description mentions 'portfolio'",
                "mentions a personal-site keyword",
                "has a description",
                "has a live deployment",
            ]
        );
    }

    #[test]
    fn test_github_io_suffix() {
        let repos = vec![named("jdoe.github.io")];
        let result = detect_portfolio(&repos, None, &weights()).unwrap();
        assert_eq!(result.repository.name, "jdoe.github.io");
        assert_eq!(result.score, 100);
        assert_eq!(result.reasons, vec!["named like a GitHub Pages site"]);
    }

    #[test]
    fn test_exact_username_match() {
        let repos = vec![named("my-app"), named("jdoe")];
        let result = detect_portfolio(&repos, Some("jdoe"), &weights()).unwrap();
        assert_eq!(result.repository.name, "jdoe");
        assert_eq!(result.score, 100);
        assert_eq!(result.reasons, vec!["name matches your username"]);
    }

    #[test]
    fn test_substring_username_not_double_counted() {
        let repos = vec![named("jdoe-site")];
        let result = rank_candidates(&repos, Some("jdoe"), &weights());
        // substring 80 + "site" keyword 50, never exact + substring together
        assert_eq!(result[0].score, 130);
        assert!(result[0]
            .reasons
            .contains(&"name contains your username".to_string()));
    }

    #[test]
    fn test_username_is_case_insensitive() {
        let repos = vec![named("JDoe")];
        let result = detect_portfolio(&repos, Some("jdoe"), &weights()).unwrap();
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_personal_keyword_counted_once() {
        let repos = vec![Repository {
            name: "stuff".to_string(),
            description: Some("personal website and resume".to_string()),
            ..Default::default()
        }];
        let result = rank_candidates(&repos, None, &weights());
        // keyword 50 (once, despite three matches) + description 40
        assert_eq!(result[0].score, 90);
    }

    #[test]
    fn test_threshold_is_inclusive_at_50() {
        let mut weights = weights();
        weights.has_description = 49;
        let repos = vec![Repository {
            name: "xyzzy".to_string(),
            description: Some("qqqq".to_string()),
            ..Default::default()
        }];
        assert!(detect_portfolio(&repos, None, &weights).is_none());

        weights.has_description = 50;
        let result = detect_portfolio(&repos, None, &weights).unwrap();
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_tie_break_first_occurrence_wins() {
        let repos = vec![named("first-portfolio"), named("second-portfolio")];
        let result = detect_portfolio(&repos, None, &weights()).unwrap();
        assert_eq!(result.repository.name, "first-portfolio");
    }

    #[test]
    fn test_input_not_mutated() {
        let repos = vec![named("portfolio")];
        let before = repos.clone();
        let _ = detect_portfolio(&repos, Some("jdoe"), &weights());
        assert_eq!(repos, before);
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let repos = vec![
            named("zzz"),
            named("portfolio"),
            Repository {
                name: "blog".to_string(),
                description: Some("my personal site".to_string()),
                ..Default::default()
            },
        ];
        let ranked = rank_candidates(&repos, None, &weights());
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].repository.name, "portfolio");
        assert_eq!(ranked[1].repository.name, "blog");
        assert_eq!(ranked[2].repository.name, "zzz");
        assert_eq!(ranked[2].score, 0);
    }
}
