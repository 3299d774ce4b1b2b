// Dashboard computation services

pub mod dashboard_service;
pub mod data_provider;
pub mod engagement_scoring_service;
pub mod exercise_library;
pub mod fitness_classification_service;
pub mod membership_status_service;
pub mod snapshot_provider;
pub mod trainer_matching_service;
pub mod workout_recommendation_service;

pub use dashboard_service::DashboardService;
pub use data_provider::{DataCapabilities, DataProvider};
pub use engagement_scoring_service::EngagementScoringService;
pub use exercise_library::ExerciseLibrary;
pub use fitness_classification_service::FitnessClassificationService;
pub use membership_status_service::MembershipStatusService;
pub use snapshot_provider::{DashboardSnapshot, SnapshotDataProvider};
pub use trainer_matching_service::TrainerMatchingService;
pub use workout_recommendation_service::WorkoutRecommendationService;
