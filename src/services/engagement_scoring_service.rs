use tracing::debug;

use crate::models::{ActivityAggregate, EngagementBreakdown, EngagementLevel, EngagementResult};

/// Upper bound of the engagement score
pub const MAX_ENGAGEMENT_SCORE: u32 = 100;

/// Converts a member's activity aggregates into a bounded engagement score
#[derive(Debug, Clone, Default)]
pub struct EngagementScoringService;

impl EngagementScoringService {
    pub fn new() -> Self {
        Self
    }

    /// Score one window of activity.
    ///
    /// Five additive factors with fixed tiers: attendance (30), payment
    /// reliability (25), class enrollment (20), equipment usage (15) and
    /// feedback (10). Zero aggregates are valid input and land in the lowest
    /// tiers.
    pub fn score(&self, metrics: &ActivityAggregate, window_days: u32) -> EngagementResult {
        let mut factors = Vec::new();
        let mut breakdown = EngagementBreakdown::default();

        // Attendance always contributes a factor line, even at zero points
        let visits = metrics.visit_count;
        let (points, description) = match visits {
            v if v >= 15 => (30, format!("Excellent attendance ({} visits)", v)),
            v if v >= 10 => (25, format!("Good attendance ({} visits)", v)),
            v if v >= 5 => (15, format!("Fair attendance ({} visits)", v)),
            v => (0, format!("Low attendance ({} visits)", v)),
        };
        breakdown.attendance = points;
        factors.push(description);

        let reliability = metrics.payment_reliability_pct();
        if let Some(pct) = reliability {
            let points = match pct {
                p if p >= 90.0 => 25,
                p if p >= 75.0 => 20,
                p if p >= 50.0 => 10,
                _ => 0,
            };
            breakdown.payment_reliability = points;
            if points > 0 {
                let quality = match points {
                    25 => "Excellent",
                    20 => "Good",
                    _ => "Fair",
                };
                factors.push(format!("{} payment history ({:.0}% on time)", quality, pct));
            }
        }

        breakdown.class_enrollment = match metrics.enrolled_classes {
            c if c >= 3 => {
                factors.push(format!("Active in group classes ({} enrolled)", c));
                20
            }
            c if c >= 1 => {
                factors.push(format!("Enrolled in {} class{}", c, if c == 1 { "" } else { "es" }));
                10
            }
            _ => 0,
        };

        breakdown.equipment_usage = match metrics.equipment_usage_count {
            e if e >= 10 => {
                factors.push(format!("Frequent equipment use ({} sessions)", e));
                15
            }
            e if e >= 5 => {
                factors.push(format!("Regular equipment use ({} sessions)", e));
                10
            }
            _ => 0,
        };

        breakdown.feedback = match metrics.feedback_count {
            f if f >= 2 => {
                factors.push(format!("Engaged with feedback ({} submitted)", f));
                10
            }
            1 => {
                factors.push("Submitted feedback".to_string());
                5
            }
            _ => 0,
        };

        let score = breakdown.total().min(MAX_ENGAGEMENT_SCORE);
        debug!(
            score,
            attendance = breakdown.attendance,
            payment = breakdown.payment_reliability,
            classes = breakdown.class_enrollment,
            equipment = breakdown.equipment_usage,
            feedback = breakdown.feedback,
            "Computed engagement score"
        );

        EngagementResult {
            score,
            level: EngagementLevel::from_score(score),
            factors,
            breakdown,
            metrics: *metrics,
            payment_reliability_pct: reliability,
            window_days,
        }
    }
}
