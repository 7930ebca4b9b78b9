use serde::{Deserialize, Serialize};

/// Secondary portfolio hints checked against the combined name+description
/// text. "portfolio" itself is excluded; it has its own dedicated signals.
pub const PERSONAL_KEYWORDS: &[&str] = &[
    "personal", "website", "cv", "resume", "showcase", "projects", "me", "homepage", "site",
];

/// Description keywords that suggest the repository actually shows work
pub const PROJECT_KEYWORDS: &[&str] = &[
    "project", "demo", "live", "deployed", "showcase", "skill", "experience",
];

/// Hosting platform substrings that count as a live deployment when they
/// appear in the description, even without has_pages or a homepage URL.
pub const DEPLOY_HOSTS: &[&str] = &[
    "netlify.app",
    "vercel.app",
    "github.io",
    "herokuapp.com",
    "firebaseapp.com",
    "render.com",
    "pages.dev",
];

/// Detection signal weights.
///
/// Each weight is added to a repository's detection score when the
/// corresponding signal matches; a repository can match several signals at
/// once. The shipped defaults favour an explicit "portfolio" in the name
/// far above everything else. Weights are policy, not contract: tune them
/// via the config file.
///
/// Example YAML:
/// ```yaml
/// detection:
///   name_portfolio: 200
///   threshold: 50
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct DetectionWeights {
    /// Repository name contains "portfolio"
    pub name_portfolio: u32,
    /// Description contains "portfolio"
    pub description_portfolio: u32,
    /// Repository name ends with ".github.io"
    pub github_io_name: u32,
    /// Name equals the username exactly
    pub username_exact: u32,
    /// Name contains the username (only when not an exact match)
    pub username_substring: u32,
    /// Name or description contains a PERSONAL_KEYWORDS entry (counted once)
    pub personal_keyword: u32,
    /// Non-empty description present
    pub has_description: u32,
    /// has_pages set or homepage URL present
    pub live_demo: u32,
    /// Minimum accumulated score for the top candidate to be accepted
    pub threshold: u32,
}

impl Default for DetectionWeights {
    fn default() -> Self {
        Self {
            name_portfolio: 200,
            description_portfolio: 150,
            github_io_name: 100,
            username_exact: 100,
            username_substring: 80,
            personal_keyword: 50,
            has_description: 40,
            live_demo: 30,
            threshold: 50,
        }
    }
}

impl DetectionWeights {
    /// Largest score a single repository can accumulate. Exact and
    /// substring username matches are mutually exclusive, so only the
    /// larger of the two contributes.
    pub fn max_score(&self) -> u32 {
        self.name_portfolio
            + self.description_portfolio
            + self.github_io_name
            + self.username_exact.max(self.username_substring)
            + self.personal_keyword
            + self.has_description
            + self.live_demo
    }
}

/// Assessment rubric: additive quality weights, the thresholds that
/// qualify them, and the total-score bands for threshold feedback.
/// The final total is clamped to 100, never wrapped.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct AssessmentRubric {
    /// Description longer than min_description_len
    pub description: u32,
    /// Bonus when the description also exceeds long_description_len
    pub long_description_bonus: u32,
    /// Live demo present (pages, homepage, or a DEPLOY_HOSTS mention)
    pub live_demo: u32,
    /// Description mentions a PROJECT_KEYWORDS entry
    pub project_keywords: u32,
    /// Primary language recorded and not "Unknown"
    pub language: u32,
    /// Updated within recent_window_days
    pub recent_update: u32,
    /// Updated within stale_window_days (when not already recent)
    pub stale_update: u32,

    pub min_description_len: usize,
    pub long_description_len: usize,
    pub recent_window_days: i64,
    pub stale_window_days: i64,

    /// total_score bands for the feedback message, highest first
    pub excellent_threshold: u32,
    pub good_threshold: u32,
    pub fair_threshold: u32,
}

impl Default for AssessmentRubric {
    fn default() -> Self {
        Self {
            description: 25,
            long_description_bonus: 5,
            live_demo: 40,
            project_keywords: 20,
            language: 10,
            recent_update: 5,
            stale_update: 3,
            min_description_len: 10,
            long_description_len: 50,
            recent_window_days: 182, // ~6 months
            stale_window_days: 365,
            excellent_threshold: 80,
            good_threshold: 60,
            fair_threshold: 40,
        }
    }
}
