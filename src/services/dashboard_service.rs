use chrono::{DateTime, Datelike, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::errors::ProviderError;
use crate::models::{
    ActivityAggregate, ActivityLevel, DashboardSection, DashboardView, LookbackWindow,
    MatchProfile, Member, MembershipState, MembershipStatus,
};
use crate::services::{
    DataProvider, EngagementScoringService, FitnessClassificationService, MembershipStatusService,
    TrainerMatchingService, WorkoutRecommendationService,
};

/// Runs one dashboard computation pass for a member
#[derive(Debug, Clone)]
pub struct DashboardService {
    config: DashboardConfig,
    engagement_service: EngagementScoringService,
    fitness_service: FitnessClassificationService,
    recommendation_service: WorkoutRecommendationService,
    trainer_service: TrainerMatchingService,
    membership_service: MembershipStatusService,
}

impl DashboardService {
    /// Create a new DashboardService
    pub fn new(config: DashboardConfig) -> Self {
        let membership_service =
            MembershipStatusService::new(config.expiring_soon_days, config.qr_min_plan_days);

        Self {
            config,
            engagement_service: EngagementScoringService::new(),
            fitness_service: FitnessClassificationService::new(),
            recommendation_service: WorkoutRecommendationService::new(),
            trainer_service: TrainerMatchingService::new(),
            membership_service,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Build the dashboard for `member_id` as of `now`.
    ///
    /// Provider failures degrade the affected section to defaults and are
    /// listed in `degraded_sections`; only an unknown member is an error.
    pub async fn build<P>(
        &self,
        provider: &P,
        member_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<DashboardView, ProviderError>
    where
        P: DataProvider + ?Sized,
    {
        info!("Building dashboard for member {}", member_id);

        let capabilities = provider.capabilities();
        let mut degraded_sections = Vec::new();

        let member = match provider.member_profile(member_id).await {
            Ok(member) => member,
            Err(ProviderError::MemberNotFound(id)) => return Err(ProviderError::MemberNotFound(id)),
            Err(err) => {
                warn!("Profile unavailable for member {}: {}", member_id, err);
                degraded_sections.push(DashboardSection::Profile);
                Member::unknown(member_id)
            }
        };
        let member = capabilities.mask_member(member);

        let window = LookbackWindow::new(now, self.config.lookback_days);
        let aggregate = match provider.activity_aggregate(member_id, window).await {
            Ok(aggregate) => capabilities.mask(aggregate),
            Err(err) => {
                warn!("Activity unavailable for member {}: {}", member_id, err);
                degraded_sections.push(DashboardSection::Activity);
                ActivityAggregate::default()
            }
        };

        let engagement = self.engagement_service.score(&aggregate, window.days);
        let fitness = self.fitness_service.classify(&member.measurements());

        let fitness_level = member.fitness_level();
        let recommendation = self.recommendation_service.generate(
            &fitness.classification,
            member.fitness_goal,
            Some(fitness_level),
        );

        let trainers = match provider.trainers().await {
            Ok(trainers) => trainers,
            Err(err) => {
                warn!("Trainer list unavailable: {}", err);
                degraded_sections.push(DashboardSection::Trainers);
                Vec::new()
            }
        };
        let match_profile = MatchProfile {
            fitness_level,
            goal: member.fitness_goal,
            activity_level: ActivityLevel::from_visits(aggregate.visit_count),
        };
        let ranked_trainers = self.trainer_service.rank(&match_profile, &trainers);
        let recommended_trainers = TrainerMatchingService::top_available(
            ranked_trainers.clone(),
            self.config.recommended_trainer_count,
        );

        let membership = match self.membership(provider, member_id, now).await {
            Ok(status) => status,
            Err(err) => {
                warn!("Membership data unavailable for member {}: {}", member_id, err);
                degraded_sections.push(DashboardSection::Membership);
                MembershipStatus::without_plan(MembershipState::NoPlan)
            }
        };

        let mut rng = StdRng::seed_from_u64(self.tip_seed(member_id, now));
        let tip_of_the_day = tip_of_the_day(&recommendation.tips, &mut rng);

        info!(
            score = engagement.score,
            membership = ?membership.state,
            degraded = degraded_sections.len(),
            "Dashboard ready for member {}",
            member_id
        );

        Ok(DashboardView {
            member_id,
            member_name: member.name,
            generated_at: now,
            engagement,
            fitness,
            recommendation,
            recommended_trainers,
            ranked_trainers,
            membership,
            tip_of_the_day,
            degraded_sections,
        })
    }

    async fn membership<P>(
        &self,
        provider: &P,
        member_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<MembershipStatus, ProviderError>
    where
        P: DataProvider + ?Sized,
    {
        let current = provider.current_plan_payment(member_id).await?;
        let latest = provider.latest_payment(member_id).await?;
        Ok(self
            .membership_service
            .evaluate(current.as_ref(), latest.as_ref(), now))
    }

    /// Configured seed, or one that is stable for a member within a day
    fn tip_seed(&self, member_id: Uuid, now: DateTime<Utc>) -> u64 {
        self.config.tip_seed.unwrap_or_else(|| {
            let day = now.date_naive().num_days_from_ce() as u64;
            (member_id.as_u128() as u64) ^ day
        })
    }
}

/// Pick one tip to feature; presentation only, the tip list itself is unchanged
pub fn tip_of_the_day<R: Rng + ?Sized>(tips: &[String], rng: &mut R) -> Option<String> {
    tips.choose(rng).cloned()
}
