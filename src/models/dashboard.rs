use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    EngagementResult, FitnessResult, MembershipStatus, TrainerMatch, WorkoutRecommendation,
};

/// Everything the member dashboard renders, computed in one pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub member_id: Uuid,
    pub member_name: String,
    pub generated_at: DateTime<Utc>,
    pub engagement: EngagementResult,
    pub fitness: FitnessResult,
    pub recommendation: WorkoutRecommendation,
    pub recommended_trainers: Vec<TrainerMatch>,
    pub ranked_trainers: Vec<TrainerMatch>,
    pub membership: MembershipStatus,
    pub tip_of_the_day: Option<String>,
    pub degraded_sections: Vec<DashboardSection>, // Sections rendered from defaults
}

/// Provider-backed sections that can fall back to defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSection {
    Profile,
    Activity,
    Trainers,
    Membership,
}
