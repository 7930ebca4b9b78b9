use serde::{Deserialize, Serialize};

use crate::scoring::{AssessmentRubric, DetectionWeights};

/// User configuration. Every section is optional: a missing file or an
/// empty mapping means "use the shipped scoring policy".
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// GitHub username to analyze when none is given on the command line
    #[serde(default)]
    pub username: Option<String>,

    /// Detection signal weight overrides
    #[serde(default)]
    pub detection: Option<DetectionWeights>,

    /// Assessment rubric overrides
    #[serde(default)]
    pub rubric: Option<AssessmentRubric>,
}
