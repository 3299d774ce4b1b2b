use serde::{Deserialize, Serialize};

use crate::models::BmiCategory;

/// Key into the static exercise library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseTag {
    CompoundLifts,
    ProgressiveOverload,
    StrengthTraining,
    BodyweightStrength,
    ResistanceBands,
    Cardio,
    LowImpactCardio,
    Hiit,
    Walking,
    Cycling,
    Swimming,
    WaterAerobics,
    ChairExercises,
    CoreWork,
    Stretching,
    Yoga,
    Mobility,
    BalanceTraining,
}

impl ExerciseTag {
    pub const ALL: [ExerciseTag; 18] = [
        ExerciseTag::CompoundLifts,
        ExerciseTag::ProgressiveOverload,
        ExerciseTag::StrengthTraining,
        ExerciseTag::BodyweightStrength,
        ExerciseTag::ResistanceBands,
        ExerciseTag::Cardio,
        ExerciseTag::LowImpactCardio,
        ExerciseTag::Hiit,
        ExerciseTag::Walking,
        ExerciseTag::Cycling,
        ExerciseTag::Swimming,
        ExerciseTag::WaterAerobics,
        ExerciseTag::ChairExercises,
        ExerciseTag::CoreWork,
        ExerciseTag::Stretching,
        ExerciseTag::Yoga,
        ExerciseTag::Mobility,
        ExerciseTag::BalanceTraining,
    ];

    /// Lookup key, matching the serialized form
    pub fn key(&self) -> &'static str {
        match self {
            ExerciseTag::CompoundLifts => "compound_lifts",
            ExerciseTag::ProgressiveOverload => "progressive_overload",
            ExerciseTag::StrengthTraining => "strength_training",
            ExerciseTag::BodyweightStrength => "bodyweight_strength",
            ExerciseTag::ResistanceBands => "resistance_bands",
            ExerciseTag::Cardio => "cardio",
            ExerciseTag::LowImpactCardio => "low_impact_cardio",
            ExerciseTag::Hiit => "hiit",
            ExerciseTag::Walking => "walking",
            ExerciseTag::Cycling => "cycling",
            ExerciseTag::Swimming => "swimming",
            ExerciseTag::WaterAerobics => "water_aerobics",
            ExerciseTag::ChairExercises => "chair_exercises",
            ExerciseTag::CoreWork => "core_work",
            ExerciseTag::Stretching => "stretching",
            ExerciseTag::Yoga => "yoga",
            ExerciseTag::Mobility => "mobility",
            ExerciseTag::BalanceTraining => "balance_training",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.key() == key)
    }
}

/// Canonical recommendation profile a classification maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationProfile {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
    General, // No usable classification
}

impl RecommendationProfile {
    pub fn for_category(category: Option<BmiCategory>) -> Self {
        match category {
            Some(BmiCategory::Underweight) => RecommendationProfile::Underweight,
            Some(BmiCategory::NormalWeight) => RecommendationProfile::NormalWeight,
            Some(BmiCategory::Overweight) => RecommendationProfile::Overweight,
            Some(c) if c.is_obese() => RecommendationProfile::Obese,
            _ => RecommendationProfile::General,
        }
    }
}

/// Inclusive integer range, e.g. sessions per week or minutes per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRange {
    pub min: u32,
    pub max: u32,
}

impl TargetRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn describe(&self, unit: &str) -> String {
        if self.min == self.max {
            format!("{} {}", self.min, unit)
        } else {
            format!("{}-{} {}", self.min, self.max, unit)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePlan {
    pub primary: Vec<ExerciseTag>,
    pub secondary: Vec<ExerciseTag>,
    pub supplementary: Vec<ExerciseTag>,
}

impl ExercisePlan {
    pub fn all(&self) -> impl Iterator<Item = &ExerciseTag> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .chain(self.supplementary.iter())
    }

    pub fn contains(&self, tag: ExerciseTag) -> bool {
        self.all().any(|t| *t == tag)
    }
}

/// Summary line shown at the top of the workout card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickOverview {
    pub frequency: String,
    pub duration: String,
    pub goal: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecommendation {
    pub profile: RecommendationProfile,
    pub focus: String,
    pub sessions_per_week: TargetRange,
    pub session_minutes: TargetRange,
    pub exercises: ExercisePlan,
    pub tips: Vec<String>,
    pub quick_overview: QuickOverview,
}

/// Static reference entry for an exercise tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseDetail {
    pub tag: ExerciseTag,
    pub name: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub muscle_groups: &'static [&'static str],
    pub equipment: &'static [&'static str],
}
