use tracing::debug;

use crate::models::{
    BmiCategory, BodyFatAssessment, BodyFatBand, BodyMeasurements, FitnessClassification,
    FitnessResult, MuscleMassAssessment, MuscleMassBand, WaistHipAssessment, WaistHipRisk,
};

/// Classifies body measurements into a BMI category and composition notes
#[derive(Debug, Clone, Default)]
pub struct FitnessClassificationService;

impl FitnessClassificationService {
    pub fn new() -> Self {
        Self
    }

    /// Run every sub-analysis the measurements allow.
    ///
    /// Missing or out-of-range values never fail the call: BMI falls back to
    /// `Unavailable` and the optional analyses are simply skipped.
    pub fn classify(&self, measurements: &BodyMeasurements) -> FitnessResult {
        let classification = self.classify_bmi(measurements);

        let mut composition_notes = Vec::new();
        let mut measurement_notes = Vec::new();

        let body_fat = measurements.body_fat().ok().map(|pct| {
            let band = BodyFatBand::from_pct(pct);
            composition_notes.push(format!("Body fat {:.1}%: {}", pct, band.description()));
            BodyFatAssessment {
                body_fat_pct: pct,
                band,
            }
        });

        let muscle_mass = measurements.muscle_mass().ok().map(|pct| {
            let band = MuscleMassBand::from_pct(pct);
            composition_notes.push(format!("Muscle mass {:.1}%: {}", pct, band.description()));
            MuscleMassAssessment {
                muscle_mass_pct: pct,
                band,
            }
        });

        let waist_hip = measurements.waist_hip().ok().map(|(waist, hip)| {
            let ratio = round_to(waist / hip, 2);
            let risk = WaistHipRisk::from_ratio(ratio);
            measurement_notes.push(format!("Waist-to-hip ratio {:.2}: {}", ratio, risk.description()));
            WaistHipAssessment { ratio, risk }
        });

        FitnessResult {
            classification,
            body_fat,
            muscle_mass,
            waist_hip,
            composition_notes,
            measurement_notes,
        }
    }

    /// BMI and its category. Banding uses the unrounded value; only the
    /// reported BMI is rounded to one decimal.
    pub fn classify_bmi(&self, measurements: &BodyMeasurements) -> FitnessClassification {
        match measurements.height_weight() {
            Ok((height_cm, weight_kg)) => {
                let raw_bmi = calculate_bmi(height_cm, weight_kg);
                FitnessClassification::Available {
                    bmi: round_to(raw_bmi, 1),
                    category: BmiCategory::from_bmi(raw_bmi),
                }
            }
            Err(err) => {
                debug!("BMI unavailable: {}", err);
                FitnessClassification::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// BMI = weight (kg) / height (m)^2
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
