use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ActivityLevel, FitnessGoal, FitnessLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainerStatus {
    Active,
    OnLeave,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    pub id: Uuid,
    pub name: String,
    pub specialization: String, // Free text, e.g. "Strength Training, HIIT"
    pub experience_years: u32,
    #[serde(default)]
    pub rating: f64, // Average feedback rating, 0-5
    #[serde(default)]
    pub feedback_count: u32,
    pub status: TrainerStatus,
}

impl Trainer {
    /// Fill rating and feedback_count from the trainer's feedback entries
    pub fn with_feedback<'a, I>(mut self, feedback: I) -> Self
    where
        I: IntoIterator<Item = &'a TrainerFeedback>,
    {
        let ratings: Vec<u8> = feedback
            .into_iter()
            .filter(|f| f.trainer_id == self.id)
            .map(|f| f.rating.clamp(1, 5))
            .collect();

        self.feedback_count = ratings.len() as u32;
        self.rating = if ratings.is_empty() {
            0.0
        } else {
            let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
            (f64::from(sum) / ratings.len() as f64 * 10.0).round() / 10.0
        };
        self
    }

    /// Parsed specialization areas
    pub fn specializations(&self) -> Vec<Specialization> {
        Specialization::parse_list(&self.specialization)
    }
}

/// A member's rating of a trainer (1-5)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerFeedback {
    pub trainer_id: Uuid,
    pub member_id: Uuid,
    pub rating: u8,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialization {
    StrengthTraining,
    Bodybuilding,
    WeightLoss,
    Cardio,
    Hiit,
    Yoga,
    Pilates,
    Rehabilitation,
    SportsConditioning,
    GeneralFitness,
}

impl Specialization {
    /// Parse a comma or slash separated specialization field.
    ///
    /// Unrecognised entries are skipped; a field with nothing recognisable is
    /// treated as general fitness.
    pub fn parse_list(value: &str) -> Vec<Self> {
        let mut parsed = Vec::new();
        for part in value.split([',', '/', ';', '&']) {
            if let Some(area) = Self::parse(part) {
                if !parsed.contains(&area) {
                    parsed.push(area);
                }
            }
        }
        if parsed.is_empty() {
            parsed.push(Specialization::GeneralFitness);
        }
        parsed
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        if value.is_empty() {
            return None;
        }
        let area = if value.contains("bodybuild") || value.contains("hypertrophy") {
            Specialization::Bodybuilding
        } else if value.contains("strength") || value.contains("lifting") {
            Specialization::StrengthTraining
        } else if value.contains("weight") || value.contains("fat loss") {
            Specialization::WeightLoss
        } else if value.contains("hiit") || value.contains("interval") || value.contains("crossfit") {
            Specialization::Hiit
        } else if value.contains("cardio") || value.contains("endurance") || value.contains("running") {
            Specialization::Cardio
        } else if value.contains("yoga") || value.contains("stretch") {
            Specialization::Yoga
        } else if value.contains("pilates") {
            Specialization::Pilates
        } else if value.contains("rehab") || value.contains("physio") || value.contains("injury") {
            Specialization::Rehabilitation
        } else if value.contains("sport") || value.contains("athlet") || value.contains("conditioning") {
            Specialization::SportsConditioning
        } else if value.contains("general") || value.contains("fitness") || value.contains("personal") {
            Specialization::GeneralFitness
        } else {
            return None;
        };
        Some(area)
    }

    /// Typical session intensity for the area
    pub fn intensity(&self) -> ActivityLevel {
        match self {
            Specialization::StrengthTraining
            | Specialization::Bodybuilding
            | Specialization::Hiit
            | Specialization::SportsConditioning => ActivityLevel::High,
            Specialization::WeightLoss | Specialization::Cardio | Specialization::GeneralFitness => {
                ActivityLevel::Moderate
            }
            Specialization::Yoga | Specialization::Pilates | Specialization::Rehabilitation => {
                ActivityLevel::Low
            }
        }
    }

    /// How well this specialization serves a goal (0.0-1.0)
    pub fn goal_affinity(&self, goal: FitnessGoal) -> f64 {
        use FitnessGoal as G;
        use Specialization as S;

        match (goal, self) {
            (G::WeightLoss, S::WeightLoss) => 1.0,
            (G::WeightLoss, S::Hiit | S::Cardio) => 0.75,
            (G::WeightLoss, S::GeneralFitness) => 0.5,

            (G::MuscleGain, S::Bodybuilding | S::StrengthTraining) => 1.0,
            (G::MuscleGain, S::SportsConditioning) => 0.5,
            (G::MuscleGain, S::GeneralFitness) => 0.25,

            (G::Endurance, S::Cardio) => 1.0,
            (G::Endurance, S::Hiit | S::SportsConditioning) => 0.75,
            (G::Endurance, S::GeneralFitness) => 0.5,

            (G::Flexibility, S::Yoga | S::Pilates) => 1.0,
            (G::Flexibility, S::Rehabilitation) => 0.5,
            (G::Flexibility, S::GeneralFitness) => 0.25,

            (G::Rehabilitation, S::Rehabilitation) => 1.0,
            (G::Rehabilitation, S::Pilates | S::Yoga) => 0.5,

            (G::GeneralFitness, S::GeneralFitness) => 1.0,
            (G::GeneralFitness, _) => 0.5,

            _ => 0.0,
        }
    }
}

/// Derived member profile used for trainer matching
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchProfile {
    pub fitness_level: FitnessLevel,
    pub goal: Option<FitnessGoal>,
    pub activity_level: ActivityLevel,
}

/// Per-component points behind a match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub goal_affinity: f64,
    pub experience_fit: f64,
    pub rating: f64,
    pub availability: f64,
    pub intensity_fit: f64,
}

impl MatchBreakdown {
    pub fn total(&self) -> f64 {
        self.goal_affinity + self.experience_fit + self.rating + self.availability + self.intensity_fit
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerMatch {
    pub trainer: Trainer,
    pub match_score: f64, // 0-100
    pub breakdown: MatchBreakdown,
}
