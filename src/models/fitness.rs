use serde::{Deserialize, Serialize};

/// BMI category; each band includes its lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    ObeseClassI,
    ObeseClassII,
    ObeseClassIII,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        match bmi {
            b if b < 18.5 => BmiCategory::Underweight,
            b if b < 25.0 => BmiCategory::NormalWeight,
            b if b < 30.0 => BmiCategory::Overweight,
            b if b < 35.0 => BmiCategory::ObeseClassI,
            b if b < 40.0 => BmiCategory::ObeseClassII,
            _ => BmiCategory::ObeseClassIII,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClassI => "Obese Class I",
            BmiCategory::ObeseClassII => "Obese Class II",
            BmiCategory::ObeseClassIII => "Obese Class III",
        }
    }

    pub fn is_obese(&self) -> bool {
        matches!(
            self,
            BmiCategory::ObeseClassI | BmiCategory::ObeseClassII | BmiCategory::ObeseClassIII
        )
    }
}

/// BMI classification, or the reason it could not be computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FitnessClassification {
    Available { bmi: f64, category: BmiCategory },
    Unavailable { reason: String },
}

impl FitnessClassification {
    pub fn category(&self) -> Option<BmiCategory> {
        match self {
            FitnessClassification::Available { category, .. } => Some(*category),
            FitnessClassification::Unavailable { .. } => None,
        }
    }

    pub fn bmi(&self) -> Option<f64> {
        match self {
            FitnessClassification::Available { bmi, .. } => Some(*bmi),
            FitnessClassification::Unavailable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatBand {
    Essential,
    Athletic,
    Fit,
    Average,
    High,
}

impl BodyFatBand {
    pub fn from_pct(pct: f64) -> Self {
        match pct {
            p if p < 8.0 => BodyFatBand::Essential,
            p if p < 15.0 => BodyFatBand::Athletic,
            p if p < 22.0 => BodyFatBand::Fit,
            p if p < 30.0 => BodyFatBand::Average,
            _ => BodyFatBand::High,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BodyFatBand::Essential => "Body fat is at essential levels; avoid further fat loss",
            BodyFatBand::Athletic => "Athletic body fat level",
            BodyFatBand::Fit => "Fit body fat level",
            BodyFatBand::Average => "Average body fat level",
            BodyFatBand::High => "Body fat is above the healthy range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleMassBand {
    Low,
    Average,
    Good,
    Excellent,
}

impl MuscleMassBand {
    pub fn from_pct(pct: f64) -> Self {
        match pct {
            p if p < 30.0 => MuscleMassBand::Low,
            p if p < 40.0 => MuscleMassBand::Average,
            p if p < 50.0 => MuscleMassBand::Good,
            _ => MuscleMassBand::Excellent,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MuscleMassBand::Low => "Muscle mass is low; resistance training is recommended",
            MuscleMassBand::Average => "Average muscle mass",
            MuscleMassBand::Good => "Good muscle mass",
            MuscleMassBand::Excellent => "Excellent muscle mass",
        }
    }
}

/// Health risk band for the waist-to-hip ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaistHipRisk {
    Low,
    Moderate,
    High,
}

impl WaistHipRisk {
    pub fn from_ratio(ratio: f64) -> Self {
        match ratio {
            r if r < 0.85 => WaistHipRisk::Low,
            r if r < 0.95 => WaistHipRisk::Moderate,
            _ => WaistHipRisk::High,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WaistHipRisk::Low => "Low health risk from fat distribution",
            WaistHipRisk::Moderate => "Moderate health risk from fat distribution",
            WaistHipRisk::High => "High health risk from abdominal fat distribution",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyFatAssessment {
    pub body_fat_pct: f64,
    pub band: BodyFatBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleMassAssessment {
    pub muscle_mass_pct: f64,
    pub band: MuscleMassBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaistHipAssessment {
    pub ratio: f64,
    pub risk: WaistHipRisk,
}

/// Complete fitness picture for one member; every sub-analysis is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessResult {
    pub classification: FitnessClassification,
    pub body_fat: Option<BodyFatAssessment>,
    pub muscle_mass: Option<MuscleMassAssessment>,
    pub waist_hip: Option<WaistHipAssessment>,
    pub composition_notes: Vec<String>,
    pub measurement_notes: Vec<String>,
}

impl FitnessResult {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            classification: FitnessClassification::Unavailable {
                reason: reason.into(),
            },
            body_fat: None,
            muscle_mass: None,
            waist_hip: None,
            composition_notes: Vec::new(),
            measurement_notes: Vec::new(),
        }
    }

    pub fn category(&self) -> Option<BmiCategory> {
        self.classification.category()
    }
}
