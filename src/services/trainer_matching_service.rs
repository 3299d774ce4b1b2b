use std::cmp::Ordering;
use tracing::debug;

use crate::models::{
    ActivityLevel, FitnessGoal, FitnessLevel, MatchBreakdown, MatchProfile, Trainer, TrainerMatch,
    TrainerStatus,
};

// Component weights; they sum to 100
const GOAL_WEIGHT: f64 = 40.0;
const EXPERIENCE_WEIGHT: f64 = 15.0;
const RATING_WEIGHT: f64 = 25.0;
const AVAILABILITY_WEIGHT: f64 = 15.0;
const INTENSITY_WEIGHT: f64 = 5.0;

/// Ratings are shrunk toward this prior until a trainer has enough reviews
const RATING_PRIOR: f64 = 3.0;
const RATING_PRIOR_WEIGHT: f64 = 2.0;
const MAX_RATING: f64 = 5.0;

/// Ranks trainers by affinity with a member's derived fitness profile
#[derive(Debug, Clone, Default)]
pub struct TrainerMatchingService;

impl TrainerMatchingService {
    pub fn new() -> Self {
        Self
    }

    /// Score every trainer and sort best first.
    ///
    /// Ties on match score go to the trainer with more feedback, then to the
    /// alphabetically first name, ignoring case.
    pub fn rank(&self, profile: &MatchProfile, trainers: &[Trainer]) -> Vec<TrainerMatch> {
        let mut matches: Vec<TrainerMatch> = trainers
            .iter()
            .map(|trainer| {
                let breakdown = self.score_components(profile, trainer);
                let match_score = round_to_tenth(breakdown.total().clamp(0.0, 100.0));
                TrainerMatch {
                    trainer: trainer.clone(),
                    match_score,
                    breakdown,
                }
            })
            .collect();

        matches.sort_by(compare_matches);
        debug!(trainers = matches.len(), "Ranked trainers");
        matches
    }

    /// Top `count` trainers from the ranking that are not inactive
    pub fn recommended(
        &self,
        profile: &MatchProfile,
        trainers: &[Trainer],
        count: usize,
    ) -> Vec<TrainerMatch> {
        Self::top_available(self.rank(profile, trainers), count)
    }

    /// Pick recommendations out of an existing ranking
    pub fn top_available(ranked: Vec<TrainerMatch>, count: usize) -> Vec<TrainerMatch> {
        ranked
            .into_iter()
            .filter(|m| m.trainer.status != TrainerStatus::Inactive)
            .take(count)
            .collect()
    }

    pub fn score_components(&self, profile: &MatchProfile, trainer: &Trainer) -> MatchBreakdown {
        let specializations = trainer.specializations();
        let goal = profile.goal.unwrap_or(FitnessGoal::GeneralFitness);

        let goal_affinity = specializations
            .iter()
            .map(|s| s.goal_affinity(goal))
            .fold(0.0, f64::max)
            * GOAL_WEIGHT;

        let intensity_fit = specializations
            .iter()
            .map(|s| intensity_similarity(s.intensity(), profile.activity_level))
            .fold(0.0, f64::max)
            * INTENSITY_WEIGHT;

        MatchBreakdown {
            goal_affinity,
            experience_fit: experience_fit(profile.fitness_level, trainer.experience_years)
                * EXPERIENCE_WEIGHT,
            rating: adjusted_rating(trainer) / MAX_RATING * RATING_WEIGHT,
            availability: availability(trainer.status) * AVAILABILITY_WEIGHT,
            intensity_fit,
        }
    }
}

/// Years of experience a trainer needs for full credit at each member level
fn required_experience_years(level: FitnessLevel) -> u32 {
    match level {
        FitnessLevel::Beginner => 1,
        FitnessLevel::Intermediate => 3,
        FitnessLevel::Advanced => 5,
    }
}

fn experience_fit(level: FitnessLevel, experience_years: u32) -> f64 {
    let required = f64::from(required_experience_years(level));
    (f64::from(experience_years) / required).min(1.0)
}

/// Rating shrunk toward the prior by review count
fn adjusted_rating(trainer: &Trainer) -> f64 {
    let reviews = f64::from(trainer.feedback_count);
    let rating = trainer.rating.clamp(0.0, MAX_RATING);
    (rating * reviews + RATING_PRIOR * RATING_PRIOR_WEIGHT) / (reviews + RATING_PRIOR_WEIGHT)
}

fn availability(status: TrainerStatus) -> f64 {
    match status {
        TrainerStatus::Active => 1.0,
        TrainerStatus::OnLeave => 1.0 / 3.0,
        TrainerStatus::Inactive => 0.0,
    }
}

fn intensity_similarity(trainer: ActivityLevel, member: ActivityLevel) -> f64 {
    let distance = (trainer as i32 - member as i32).abs();
    match distance {
        0 => 1.0,
        1 => 0.5,
        _ => 0.0,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Total order used for the ranking
pub fn compare_matches(a: &TrainerMatch, b: &TrainerMatch) -> Ordering {
    b.match_score
        .total_cmp(&a.match_score)
        .then_with(|| b.trainer.feedback_count.cmp(&a.trainer.feedback_count))
        .then_with(|| {
            a.trainer
                .name
                .to_lowercase()
                .cmp(&b.trainer.name.to_lowercase())
        })
        .then_with(|| a.trainer.name.cmp(&b.trainer.name))
        .then_with(|| a.trainer.id.cmp(&b.trainer.id))
}
