use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::MeasurementError;

/// Supported measurement ranges
pub const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 300.0);
pub const BODY_FAT_RANGE_PCT: (f64, f64) = (2.0, 70.0);
pub const MUSCLE_MASS_RANGE_PCT: (f64, f64) = (10.0, 80.0);
pub const WAIST_RANGE_CM: (f64, f64) = (40.0, 200.0);
pub const HIP_RANGE_CM: (f64, f64) = (50.0, 200.0);

/// Gym member profile as supplied by the data provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub body_fat_pct: Option<f64>,
    #[serde(default)]
    pub muscle_mass_pct: Option<f64>,
    #[serde(default)]
    pub waist_cm: Option<f64>,
    #[serde(default)]
    pub hip_cm: Option<f64>,
    #[serde(default)]
    pub fitness_goal: Option<FitnessGoal>,
    #[serde(default)]
    pub experience_level: Option<FitnessLevel>,
    #[serde(default)]
    pub training_level: Option<FitnessLevel>,
    #[serde(default)]
    pub training_frequency: Option<u32>, // Sessions per week
    #[serde(default)]
    pub plan_id: Option<Uuid>,
}

impl Member {
    /// Create a member with only identity fields set
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            height_cm: None,
            weight_kg: None,
            body_fat_pct: None,
            muscle_mass_pct: None,
            waist_cm: None,
            hip_cm: None,
            fitness_goal: None,
            experience_level: None,
            training_level: None,
            training_frequency: None,
            plan_id: None,
        }
    }

    /// Placeholder profile used when the provider cannot supply one
    pub fn unknown(id: Uuid) -> Self {
        Self::new(id, "Member")
    }

    pub fn measurements(&self) -> BodyMeasurements {
        BodyMeasurements {
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            body_fat_pct: self.body_fat_pct,
            muscle_mass_pct: self.muscle_mass_pct,
            waist_cm: self.waist_cm,
            hip_cm: self.hip_cm,
        }
    }

    /// Resolve the member's fitness level.
    ///
    /// Self-reported experience wins, then the assessed training level, then
    /// the weekly training frequency. Members with no data are beginners.
    pub fn fitness_level(&self) -> FitnessLevel {
        if let Some(level) = self.experience_level.or(self.training_level) {
            return level;
        }

        match self.training_frequency {
            Some(sessions) if sessions >= 5 => FitnessLevel::Advanced,
            Some(sessions) if sessions >= 3 => FitnessLevel::Intermediate,
            _ => FitnessLevel::Beginner,
        }
    }
}

/// Fitness goal selected by the member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
    Flexibility,
    GeneralFitness,
    Rehabilitation,
}

impl FitnessGoal {
    /// Parse a free-text goal as entered on the profile form
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace(['-', '_'], " ");
        let goal = match normalized.as_str() {
            "weight loss" | "lose weight" | "fat loss" => FitnessGoal::WeightLoss,
            "muscle gain" | "build muscle" | "bulking" | "strength" => FitnessGoal::MuscleGain,
            "endurance" | "stamina" | "cardio" => FitnessGoal::Endurance,
            "flexibility" | "mobility" => FitnessGoal::Flexibility,
            "general fitness" | "stay fit" | "maintenance" => FitnessGoal::GeneralFitness,
            "rehabilitation" | "rehab" | "recovery" => FitnessGoal::Rehabilitation,
            _ => return None,
        };
        Some(goal)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Flexibility => "Flexibility",
            FitnessGoal::GeneralFitness => "General Fitness",
            FitnessGoal::Rehabilitation => "Rehabilitation",
        }
    }
}

/// Experience or assessed training level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

/// Optional body measurements, validated on access
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub body_fat_pct: Option<f64>,
    pub muscle_mass_pct: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
}

impl BodyMeasurements {
    /// Height and weight, both present and within the supported ranges
    pub fn height_weight(&self) -> Result<(f64, f64), MeasurementError> {
        let height = validated("height_cm", self.height_cm, HEIGHT_RANGE_CM)?;
        let weight = validated("weight_kg", self.weight_kg, WEIGHT_RANGE_KG)?;
        Ok((height, weight))
    }

    pub fn body_fat(&self) -> Result<f64, MeasurementError> {
        validated("body_fat_pct", self.body_fat_pct, BODY_FAT_RANGE_PCT)
    }

    pub fn muscle_mass(&self) -> Result<f64, MeasurementError> {
        validated("muscle_mass_pct", self.muscle_mass_pct, MUSCLE_MASS_RANGE_PCT)
    }

    pub fn waist_hip(&self) -> Result<(f64, f64), MeasurementError> {
        let waist = validated("waist_cm", self.waist_cm, WAIST_RANGE_CM)?;
        let hip = validated("hip_cm", self.hip_cm, HIP_RANGE_CM)?;
        Ok((waist, hip))
    }
}

fn validated(
    field: &'static str,
    value: Option<f64>,
    (min, max): (f64, f64),
) -> Result<f64, MeasurementError> {
    let value = value.ok_or(MeasurementError::Missing { field })?;
    if !value.is_finite() || value < min || value > max {
        return Err(MeasurementError::OutOfRange { field, value, min, max });
    }
    Ok(value)
}
