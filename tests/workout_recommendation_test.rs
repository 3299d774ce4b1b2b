mod common;

use common::MockDataGenerator;
use gym_dashboard::models::{
    BmiCategory, ExerciseTag, FitnessClassification, FitnessGoal, FitnessLevel,
    RecommendationProfile, TargetRange,
};
use gym_dashboard::services::workout_recommendation_service::MISSING_MEASUREMENTS_TIP;
use gym_dashboard::services::{
    ExerciseLibrary, FitnessClassificationService, WorkoutRecommendationService,
};
use pretty_assertions::assert_eq;

fn available(category: BmiCategory, bmi: f64) -> FitnessClassification {
    FitnessClassification::Available { bmi, category }
}

fn unavailable() -> FitnessClassification {
    FitnessClassification::Unavailable {
        reason: "height_cm is not recorded".to_string(),
    }
}

#[test]
fn test_recommendation_is_deterministic() {
    let service = WorkoutRecommendationService::new();
    let classification = available(BmiCategory::Overweight, 27.2);

    let first = service.generate(&classification, Some(FitnessGoal::WeightLoss), Some(FitnessLevel::Intermediate));
    let second = service.generate(&classification, Some(FitnessGoal::WeightLoss), Some(FitnessLevel::Intermediate));

    assert_eq!(first, second);
}

#[test]
fn test_unavailable_classification_uses_general_plan() {
    let service = WorkoutRecommendationService::new();
    let recommendation = service.generate(&unavailable(), None, Some(FitnessLevel::Intermediate));

    assert_eq!(recommendation.profile, RecommendationProfile::General);
    assert!(recommendation
        .tips
        .iter()
        .any(|tip| tip == MISSING_MEASUREMENTS_TIP));
    assert_eq!(recommendation.sessions_per_week, TargetRange::new(3, 4));
}

#[test]
fn test_obese_classes_share_one_profile() {
    let service = WorkoutRecommendationService::new();

    let class_one = service.generate(&available(BmiCategory::ObeseClassI, 32.0), None, None);
    let class_two = service.generate(&available(BmiCategory::ObeseClassII, 37.0), None, None);
    let class_three = service.generate(&available(BmiCategory::ObeseClassIII, 42.0), None, None);

    assert_eq!(class_one.profile, RecommendationProfile::Obese);
    assert_eq!(class_one, class_two);
    assert_eq!(class_two, class_three);
    assert!(class_one.tips[0].contains("medical clearance"));
}

#[test]
fn test_profiles_follow_classification() {
    let service = WorkoutRecommendationService::new();
    let member = MockDataGenerator::member(170.0, 53.5);
    let classification = FitnessClassificationService::new().classify_bmi(&member.measurements());

    let recommendation = service.generate(&classification, None, Some(FitnessLevel::Intermediate));

    assert_eq!(recommendation.profile, RecommendationProfile::NormalWeight);
    assert_eq!(recommendation.quick_overview.frequency, "3-5 days per week");
    assert_eq!(recommendation.quick_overview.duration, "45-60 minutes per session");
    assert_eq!(recommendation.quick_overview.goal, "General Fitness");
    assert_eq!(recommendation.quick_overview.level, "Intermediate");
}

#[test]
fn test_beginner_caps_volume_and_drops_hiit() {
    let service = WorkoutRecommendationService::new();
    let classification = available(BmiCategory::NormalWeight, 22.0);

    let intermediate = service.generate(&classification, None, Some(FitnessLevel::Intermediate));
    assert!(intermediate.exercises.contains(ExerciseTag::Hiit));

    let beginner = service.generate(&classification, None, Some(FitnessLevel::Beginner));
    assert!(!beginner.exercises.contains(ExerciseTag::Hiit));
    assert!(beginner.exercises.contains(ExerciseTag::Cardio));
    assert_eq!(beginner.sessions_per_week, TargetRange::new(3, 4));
    assert_eq!(beginner.session_minutes, TargetRange::new(45, 45));
    assert_eq!(beginner.quick_overview.duration, "45 minutes per session");
}

#[test]
fn test_missing_experience_treated_as_beginner() {
    let service = WorkoutRecommendationService::new();
    let classification = available(BmiCategory::Underweight, 17.0);

    let unknown = service.generate(&classification, None, None);
    let beginner = service.generate(&classification, None, Some(FitnessLevel::Beginner));

    assert_eq!(unknown, beginner);
}

#[test]
fn test_advanced_adds_session_except_obese() {
    let service = WorkoutRecommendationService::new();

    let overweight = service.generate(&available(BmiCategory::Overweight, 27.0), None, Some(FitnessLevel::Advanced));
    assert_eq!(overweight.sessions_per_week, TargetRange::new(5, 6));

    let obese = service.generate(&available(BmiCategory::ObeseClassI, 31.0), None, Some(FitnessLevel::Advanced));
    assert_eq!(obese.sessions_per_week, TargetRange::new(3, 5));
}

#[test]
fn test_goal_adds_exercise_and_tip() {
    let service = WorkoutRecommendationService::new();
    let classification = available(BmiCategory::Overweight, 27.0);

    let base = service.generate(&classification, None, Some(FitnessLevel::Intermediate));
    let flexible = service.generate(&classification, Some(FitnessGoal::Flexibility), Some(FitnessLevel::Intermediate));

    assert!(!base.exercises.contains(ExerciseTag::Yoga));
    assert!(flexible.exercises.contains(ExerciseTag::Yoga));
    assert_eq!(flexible.tips.len(), base.tips.len() + 1);
    assert_eq!(flexible.quick_overview.goal, "Flexibility");
}

#[test]
fn test_obese_goals_stay_low_impact() {
    let service = WorkoutRecommendationService::new();
    let classification = available(BmiCategory::ObeseClassII, 37.0);
    let high_impact = [
        ExerciseTag::ProgressiveOverload,
        ExerciseTag::CompoundLifts,
        ExerciseTag::Cycling,
        ExerciseTag::Hiit,
    ];

    let muscle = service.generate(&classification, Some(FitnessGoal::MuscleGain), Some(FitnessLevel::Advanced));
    assert!(muscle.exercises.contains(ExerciseTag::ResistanceBands));

    let endurance = service.generate(&classification, Some(FitnessGoal::Endurance), Some(FitnessLevel::Advanced));
    assert!(endurance.exercises.supplementary.contains(&ExerciseTag::LowImpactCardio));

    for recommendation in [&muscle, &endurance] {
        for tag in high_impact {
            assert!(!recommendation.exercises.contains(tag), "{:?} in obese plan", tag);
        }
    }
}

#[test]
fn test_weight_loss_goal_when_underweight_warns() {
    let service = WorkoutRecommendationService::new();
    let recommendation = service.generate(
        &available(BmiCategory::Underweight, 17.5),
        Some(FitnessGoal::WeightLoss),
        Some(FitnessLevel::Intermediate),
    );

    assert!(!recommendation.exercises.contains(ExerciseTag::Hiit));
    assert!(recommendation
        .tips
        .iter()
        .any(|tip| tip.contains("below the healthy range")));
}

#[test]
fn test_every_recommended_tag_has_library_entry() {
    let service = WorkoutRecommendationService::new();
    let library = ExerciseLibrary::new();
    let classifications = [
        available(BmiCategory::Underweight, 17.0),
        available(BmiCategory::NormalWeight, 22.0),
        available(BmiCategory::Overweight, 27.0),
        available(BmiCategory::ObeseClassII, 37.0),
        unavailable(),
    ];
    let goals = [
        None,
        Some(FitnessGoal::WeightLoss),
        Some(FitnessGoal::MuscleGain),
        Some(FitnessGoal::Endurance),
        Some(FitnessGoal::Flexibility),
        Some(FitnessGoal::GeneralFitness),
        Some(FitnessGoal::Rehabilitation),
    ];
    let levels = [FitnessLevel::Beginner, FitnessLevel::Intermediate, FitnessLevel::Advanced];

    for classification in &classifications {
        for goal in goals {
            for level in levels {
                let recommendation = service.generate(classification, goal, Some(level));
                assert!(!recommendation.tips.is_empty());
                for tag in recommendation.exercises.all() {
                    let detail = library.detail(*tag);
                    assert_eq!(detail.tag, *tag);
                    assert_eq!(library.lookup(tag.key()).map(|d| d.tag), Some(*tag));
                }
            }
        }
    }
}
