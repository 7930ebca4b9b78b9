use super::config::{AssessmentRubric, DetectionWeights};

/// Validate the scoring policy at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_policy(
    weights: &DetectionWeights,
    rubric: &AssessmentRubric,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if weights.threshold == 0 {
        errors.push("detection.threshold: must be at least 1".to_string());
    }
    if weights.threshold > weights.max_score() {
        errors.push(format!(
            "detection.threshold: {} is unreachable, no repository can score above {}",
            weights.threshold,
            weights.max_score()
        ));
    }

    if rubric.min_description_len >= rubric.long_description_len {
        errors.push(format!(
            "rubric.long_description_len: {} must be greater than min_description_len {}",
            rubric.long_description_len, rubric.min_description_len
        ));
    }
    if rubric.recent_window_days <= 0 {
        errors.push("rubric.recent_window_days: must be positive".to_string());
    }
    if rubric.stale_window_days <= rubric.recent_window_days {
        errors.push(format!(
            "rubric.stale_window_days: {} must be greater than recent_window_days {}",
            rubric.stale_window_days, rubric.recent_window_days
        ));
    }

    if rubric.excellent_threshold > 100 {
        errors.push("rubric.excellent_threshold: must not exceed 100".to_string());
    }
    if rubric.good_threshold >= rubric.excellent_threshold
        || rubric.fair_threshold >= rubric.good_threshold
    {
        errors.push(
            "rubric: feedback thresholds must be strictly descending (excellent > good > fair)"
                .to_string(),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
