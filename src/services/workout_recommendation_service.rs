use std::collections::HashMap;
use tracing::debug;

use crate::models::{
    ExercisePlan, ExerciseTag, FitnessClassification, FitnessGoal, FitnessLevel, QuickOverview,
    RecommendationProfile, TargetRange, WorkoutRecommendation,
};

pub const MISSING_MEASUREMENTS_TIP: &str =
    "Add your height and weight to your profile to get recommendations tailored to your body.";

const MAX_SESSIONS_PER_WEEK: u32 = 6;
const BEGINNER_MAX_SESSIONS: u32 = 4;
const BEGINNER_MAX_MINUTES: u32 = 45;

/// Fixed plan content for one recommendation profile
#[derive(Debug, Clone)]
struct WorkoutTemplate {
    focus: &'static str,
    sessions_per_week: TargetRange,
    session_minutes: TargetRange,
    primary: Vec<ExerciseTag>,
    secondary: Vec<ExerciseTag>,
    supplementary: Vec<ExerciseTag>,
    tips: Vec<&'static str>,
}

/// Workout recommendation engine keyed by BMI-derived profile
#[derive(Debug, Clone)]
pub struct WorkoutRecommendationService {
    workout_templates: HashMap<RecommendationProfile, WorkoutTemplate>,
    fallback_template: WorkoutTemplate,
}

impl Default for WorkoutRecommendationService {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutRecommendationService {
    /// Create a new WorkoutRecommendationService
    pub fn new() -> Self {
        Self {
            workout_templates: Self::load_workout_templates(),
            fallback_template: Self::fallback_template(),
        }
    }

    /// Build the plan for a classification, goal and experience level.
    ///
    /// Deterministic: the same inputs always yield the same plan.
    pub fn generate(
        &self,
        classification: &FitnessClassification,
        goal: Option<FitnessGoal>,
        experience: Option<FitnessLevel>,
    ) -> WorkoutRecommendation {
        let profile = RecommendationProfile::for_category(classification.category());
        let template = self.template(profile);
        let level = experience.unwrap_or(FitnessLevel::Beginner);

        let mut sessions = template.sessions_per_week;
        let mut minutes = template.session_minutes;
        let mut exercises = ExercisePlan {
            primary: template.primary.clone(),
            secondary: template.secondary.clone(),
            supplementary: template.supplementary.clone(),
        };
        let mut tips: Vec<String> = template.tips.iter().map(|t| t.to_string()).collect();

        if profile == RecommendationProfile::General {
            tips.push(MISSING_MEASUREMENTS_TIP.to_string());
        }

        if let Some(goal) = goal {
            Self::apply_goal(profile, goal, &mut exercises, &mut tips);
        }

        match level {
            FitnessLevel::Beginner => {
                sessions.max = sessions.max.min(BEGINNER_MAX_SESSIONS);
                minutes.max = minutes.max.min(BEGINNER_MAX_MINUTES);
                sessions.min = sessions.min.min(sessions.max);
                minutes.min = minutes.min.min(minutes.max);
                replace_tag(&mut exercises, ExerciseTag::Hiit, ExerciseTag::Cardio);
                tips.push(
                    "Focus on form first: learn each movement with light loads before progressing."
                        .to_string(),
                );
            }
            FitnessLevel::Intermediate => {}
            FitnessLevel::Advanced => {
                // Obese plans keep their conservative volume regardless of experience
                if profile != RecommendationProfile::Obese {
                    sessions.min = (sessions.min + 1).min(MAX_SESSIONS_PER_WEEK);
                    sessions.max = (sessions.max + 1).min(MAX_SESSIONS_PER_WEEK);
                }
                tips.push(
                    "Periodize your training: vary intensity week to week and deload every 4-6 weeks."
                        .to_string(),
                );
            }
        }

        debug!(?profile, ?goal, ?level, "Generated workout recommendation");

        let quick_overview = QuickOverview {
            frequency: sessions.describe("days per week"),
            duration: minutes.describe("minutes per session"),
            goal: goal.unwrap_or(FitnessGoal::GeneralFitness).label().to_string(),
            level: level.label().to_string(),
        };

        WorkoutRecommendation {
            profile,
            focus: template.focus.to_string(),
            sessions_per_week: sessions,
            session_minutes: minutes,
            exercises,
            tips,
            quick_overview,
        }
    }

    fn template(&self, profile: RecommendationProfile) -> &WorkoutTemplate {
        self.workout_templates
            .get(&profile)
            .unwrap_or(&self.fallback_template)
    }

    /// Goal-specific tip and exercise additions
    fn apply_goal(
        profile: RecommendationProfile,
        goal: FitnessGoal,
        exercises: &mut ExercisePlan,
        tips: &mut Vec<String>,
    ) {
        let (tag, tip) = match goal {
            FitnessGoal::WeightLoss => {
                if profile == RecommendationProfile::Underweight {
                    tips.push(
                        "Your BMI is below the healthy range; prioritise strength over further weight loss."
                            .to_string(),
                    );
                    return;
                }
                let tag = if profile == RecommendationProfile::Obese {
                    ExerciseTag::LowImpactCardio
                } else {
                    ExerciseTag::Hiit
                };
                (tag, "Combine training with a moderate calorie deficit for steady fat loss.")
            }
            // Obese plans stay low impact whatever the goal
            FitnessGoal::MuscleGain if profile == RecommendationProfile::Obese => (
                ExerciseTag::ResistanceBands,
                "Build strength with light bands and bodyweight moves before adding heavier loads.",
            ),
            FitnessGoal::MuscleGain => (
                ExerciseTag::ProgressiveOverload,
                "Increase weight or reps gradually and eat enough protein to support muscle growth.",
            ),
            FitnessGoal::Endurance if profile == RecommendationProfile::Obese => (
                ExerciseTag::LowImpactCardio,
                "Extend your walking or water sessions a few minutes at a time to build stamina.",
            ),
            FitnessGoal::Endurance => (
                ExerciseTag::Cycling,
                "Build aerobic base with longer, steady sessions and extend duration by about 10% per week.",
            ),
            FitnessGoal::Flexibility => (
                ExerciseTag::Yoga,
                "Stretch after every session while muscles are warm and hold each stretch 20-30 seconds.",
            ),
            FitnessGoal::GeneralFitness => (
                ExerciseTag::Mobility,
                "Mix strength, cardio and mobility work across the week to stay well rounded.",
            ),
            FitnessGoal::Rehabilitation => (
                ExerciseTag::Mobility,
                "Follow your physiotherapist's guidance and stop any exercise that causes pain.",
            ),
        };

        if !exercises.contains(tag) {
            exercises.supplementary.push(tag);
        }
        tips.push(tip.to_string());
    }

    /// Load the four canonical category profiles
    fn load_workout_templates() -> HashMap<RecommendationProfile, WorkoutTemplate> {
        let mut templates = HashMap::new();

        templates.insert(
            RecommendationProfile::Underweight,
            WorkoutTemplate {
                focus: "Muscle building and healthy weight gain",
                sessions_per_week: TargetRange::new(4, 5),
                session_minutes: TargetRange::new(45, 60),
                primary: vec![ExerciseTag::CompoundLifts, ExerciseTag::ProgressiveOverload],
                secondary: vec![ExerciseTag::StrengthTraining, ExerciseTag::CoreWork],
                supplementary: vec![ExerciseTag::Stretching, ExerciseTag::Walking],
                tips: vec![
                    "Eat in a calorie surplus of 300-500 kcal per day.",
                    "Aim for 1.6-2.2 g of protein per kg of body weight.",
                    "Keep cardio short so it does not eat into your surplus.",
                    "Rest each muscle group 48 hours between heavy sessions.",
                ],
            },
        );

        templates.insert(
            RecommendationProfile::NormalWeight,
            WorkoutTemplate {
                focus: "Balanced strength and cardiovascular fitness",
                sessions_per_week: TargetRange::new(3, 5),
                session_minutes: TargetRange::new(45, 60),
                primary: vec![ExerciseTag::StrengthTraining, ExerciseTag::Cardio],
                secondary: vec![ExerciseTag::Hiit, ExerciseTag::CoreWork],
                supplementary: vec![ExerciseTag::Yoga, ExerciseTag::Mobility],
                tips: vec![
                    "Alternate strength and cardio days to recover between sessions.",
                    "Maintain a balanced diet to support your current weight.",
                    "Track your workouts to keep progressing.",
                ],
            },
        );

        templates.insert(
            RecommendationProfile::Overweight,
            WorkoutTemplate {
                focus: "Fat loss with low-impact cardio and bodyweight strength",
                sessions_per_week: TargetRange::new(4, 5),
                session_minutes: TargetRange::new(40, 60),
                primary: vec![ExerciseTag::LowImpactCardio, ExerciseTag::BodyweightStrength],
                secondary: vec![ExerciseTag::Cycling, ExerciseTag::Swimming],
                supplementary: vec![ExerciseTag::Walking, ExerciseTag::Stretching],
                tips: vec![
                    "Keep a moderate calorie deficit of 300-500 kcal per day.",
                    "Accumulate at least 150 minutes of cardio per week.",
                    "Choose low-impact options to protect your joints.",
                    "Increase intensity gradually as your fitness improves.",
                ],
            },
        );

        templates.insert(
            RecommendationProfile::Obese,
            WorkoutTemplate {
                focus: "Safe, gentle movement and building a consistent routine",
                sessions_per_week: TargetRange::new(3, 5),
                session_minutes: TargetRange::new(20, 30),
                primary: vec![ExerciseTag::Walking, ExerciseTag::WaterAerobics],
                secondary: vec![ExerciseTag::ChairExercises, ExerciseTag::ResistanceBands],
                supplementary: vec![ExerciseTag::Stretching, ExerciseTag::BalanceTraining],
                tips: vec![
                    "Get medical clearance before starting a new exercise program.",
                    "Start with 10-minute sessions and build up gradually.",
                    "Stop and rest if you feel pain, dizziness or shortness of breath.",
                    "Stay hydrated before, during and after exercise.",
                ],
            },
        );

        templates
    }

    /// Generic plan used when no classification is available
    fn fallback_template() -> WorkoutTemplate {
        WorkoutTemplate {
            focus: "General fitness foundation",
            sessions_per_week: TargetRange::new(3, 4),
            session_minutes: TargetRange::new(30, 45),
            primary: vec![ExerciseTag::StrengthTraining, ExerciseTag::Cardio],
            secondary: vec![ExerciseTag::CoreWork],
            supplementary: vec![ExerciseTag::Stretching],
            tips: vec![
                "Warm up for 5-10 minutes before every session.",
                "Combine strength and cardio work during the week.",
            ],
        }
    }
}

/// Swap `from` for `to` in place, dropping it instead when `to` is already planned
fn replace_tag(exercises: &mut ExercisePlan, from: ExerciseTag, to: ExerciseTag) {
    let already_planned = exercises.contains(to);
    for list in [
        &mut exercises.primary,
        &mut exercises.secondary,
        &mut exercises.supplementary,
    ] {
        if already_planned {
            list.retain(|t| *t != from);
        } else if let Some(slot) = list.iter_mut().find(|t| **t == from) {
            *slot = to;
        }
    }
}
