use serde::{Deserialize, Serialize};

use crate::models::ActivityAggregate;

/// Engagement score for one lookback window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementResult {
    pub score: u32, // 0-100
    pub level: EngagementLevel,
    pub factors: Vec<String>, // In factor order: attendance, payments, classes, equipment, feedback
    pub breakdown: EngagementBreakdown,
    pub metrics: ActivityAggregate,
    pub payment_reliability_pct: Option<f64>,
    pub window_days: u32,
}

/// Points awarded per factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementBreakdown {
    pub attendance: u32, // max 30
    pub payment_reliability: u32, // max 25
    pub class_enrollment: u32, // max 20
    pub equipment_usage: u32, // max 15
    pub feedback: u32, // max 10
}

impl EngagementBreakdown {
    pub fn total(&self) -> u32 {
        self.attendance
            + self.payment_reliability
            + self.class_enrollment
            + self.equipment_usage
            + self.feedback
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementLevel {
    NeedsAttention,
    Fair,
    Good,
    Excellent,
}

impl EngagementLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => EngagementLevel::Excellent,
            s if s >= 60 => EngagementLevel::Good,
            s if s >= 40 => EngagementLevel::Fair,
            _ => EngagementLevel::NeedsAttention,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EngagementLevel::Excellent => "Excellent",
            EngagementLevel::Good => "Good",
            EngagementLevel::Fair => "Fair",
            EngagementLevel::NeedsAttention => "Needs attention",
        }
    }
}
