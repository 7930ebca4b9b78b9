pub mod assessor;
pub mod config;
pub mod detector;
pub mod validation;

pub use assessor::{assess_portfolio, empty_assessment, Assessment, PortfolioStats};
pub use config::{AssessmentRubric, DetectionWeights, DEPLOY_HOSTS, PERSONAL_KEYWORDS, PROJECT_KEYWORDS};
pub use detector::{detect_portfolio, rank_candidates, DetectionResult};
pub use validation::validate_policy;

use chrono::{DateTime, Utc};

use crate::github::types::Repository;

/// Run the full detect-then-assess pipeline over a repository list.
///
/// `now` is injected so callers (and tests) control the recency reference;
/// production callers pass `Utc::now()`.
pub fn analyze_repositories(
    repositories: &[Repository],
    username: Option<&str>,
    weights: &DetectionWeights,
    rubric: &AssessmentRubric,
    now: DateTime<Utc>,
) -> Assessment {
    match detect_portfolio(repositories, username, weights) {
        Some(result) => assess_portfolio(result.repository, &result.reasons, rubric, now),
        None => empty_assessment(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_list_yields_empty_assessment() {
        let assessment = analyze_repositories(
            &[],
            Some("jdoe"),
            &DetectionWeights::default(),
            &AssessmentRubric::default(),
            fixed_now(),
        );
        assert!(!assessment.stats.has_portfolio);
        assert_eq!(assessment.total_score, 0);
        assert!(!assessment.recommendations.is_empty());
    }

    #[test]
    fn test_below_threshold_bypasses_assessor() {
        let repos = vec![Repository {
            name: "kernel-fuzzer".to_string(),
            ..Default::default()
        }];
        let assessment = analyze_repositories(
            &repos,
            None,
            &DetectionWeights::default(),
            &AssessmentRubric::default(),
            fixed_now(),
        );
        assert!(!assessment.stats.has_portfolio);
        assert_eq!(assessment.recommendations.len(), 2);
    }

    #[test]
    fn test_selected_candidate_carries_detection_reason() {
        let repos = vec![
            Repository {
                name: "my-app".to_string(),
                ..Default::default()
            },
            Repository {
                name: "jdoe".to_string(),
                ..Default::default()
            },
        ];
        let assessment = analyze_repositories(
            &repos,
            Some("jdoe"),
            &DetectionWeights::default(),
            &AssessmentRubric::default(),
            fixed_now(),
        );
        assert!(assessment.stats.has_portfolio);
        assert_eq!(assessment.stats.repo_name, "jdoe");
        assert_eq!(assessment.detection_reason, "name matches your username");
        assert!(assessment
            .recommendations
            .contains(&"Add a description to your portfolio repository.".to_string()));
        assert!(assessment
            .recommendations
            .contains(&"Deploy your portfolio using GitHub Pages, Netlify, or Vercel.".to_string()));
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let repos = vec![Repository {
            name: "portfolio".to_string(),
            description: Some("My personal portfolio showcasing projects".to_string()),
            has_pages: true,
            language: Some("TypeScript".to_string()),
            updated_at: Some("2026-02-01T00:00:00Z".to_string()),
            ..Default::default()
        }];
        let weights = DetectionWeights::default();
        let rubric = AssessmentRubric::default();
        let a = analyze_repositories(&repos, Some("jdoe"), &weights, &rubric, fixed_now());
        let b = analyze_repositories(&repos, Some("jdoe"), &weights, &rubric, fixed_now());
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        // A repository matching everything at once must still clamp to 100
        let repos = vec![Repository {
            name: "jdoe-portfolio.github.io".to_string(),
            description: Some(
                "My personal portfolio website, a live showcase of projects and skills, \
                 deployed at https://jdoe.netlify.app"
                    .to_string(),
            ),
            homepage: Some("https://jdoe.dev".to_string()),
            has_pages: true,
            language: Some("TypeScript".to_string()),
            updated_at: Some("2026-02-20T00:00:00Z".to_string()),
            stargazers_count: 99,
            ..Default::default()
        }];
        let assessment = analyze_repositories(
            &repos,
            Some("jdoe"),
            &DetectionWeights::default(),
            &AssessmentRubric::default(),
            fixed_now(),
        );
        assert_eq!(assessment.total_score, 100);
        for sub in [
            assessment.completeness,
            assessment.code_quality,
            assessment.best_practices,
            assessment.presentation,
        ] {
            assert!(sub <= 10);
        }
    }
}
