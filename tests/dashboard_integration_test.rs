mod common;

use assert_matches::assert_matches;
use async_trait::async_trait;
use common::{init_test_logging, reference_now, MockDataGenerator};
use gym_dashboard::config::DashboardConfig;
use gym_dashboard::errors::ProviderError;
use gym_dashboard::models::{
    ActivityAggregate, BmiCategory, DashboardSection, EngagementLevel, LookbackWindow,
    MembershipState, Member, PaymentRecord, PlanPayment, RecommendationProfile, Trainer,
};
use gym_dashboard::services::{
    DashboardService, DataCapabilities, DataProvider, SnapshotDataProvider,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use uuid::Uuid;

/// Provider whose every source except the profile is down
struct FlakyProvider {
    member: Option<Member>,
}

#[async_trait]
impl DataProvider for FlakyProvider {
    async fn member_profile(&self, member_id: Uuid) -> Result<Member, ProviderError> {
        self.member
            .clone()
            .ok_or_else(|| ProviderError::Unavailable(format!("profile store for {}", member_id)))
    }

    async fn activity_aggregate(
        &self,
        _member_id: Uuid,
        _window: LookbackWindow,
    ) -> Result<ActivityAggregate, ProviderError> {
        Err(ProviderError::Unavailable("activity log".to_string()))
    }

    async fn current_plan_payment(
        &self,
        _member_id: Uuid,
    ) -> Result<Option<PlanPayment>, ProviderError> {
        Err(ProviderError::Unavailable("payments".to_string()))
    }

    async fn latest_payment(&self, _member_id: Uuid) -> Result<Option<PaymentRecord>, ProviderError> {
        Err(ProviderError::Unavailable("payments".to_string()))
    }

    async fn trainers(&self) -> Result<Vec<Trainer>, ProviderError> {
        Err(ProviderError::Unavailable("trainer roster".to_string()))
    }
}

#[tokio::test]
async fn test_complete_dashboard_flow() {
    init_test_logging();
    let now = reference_now();
    let (snapshot, member_id) = MockDataGenerator::snapshot(now);
    let provider = SnapshotDataProvider::new(snapshot);
    let service = DashboardService::new(DashboardConfig::default());

    let view = service.build(&provider, member_id, now).await.unwrap();

    assert_eq!(view.member_id, member_id);
    assert_eq!(view.member_name, "Test Member");
    assert!(view.degraded_sections.is_empty());

    assert_eq!(view.engagement.score, 100);
    assert_eq!(view.engagement.level, EngagementLevel::Excellent);
    assert_eq!(view.engagement.metrics.visit_count, 15);
    assert_eq!(view.engagement.window_days, 30);

    assert_eq!(view.fitness.category(), Some(BmiCategory::NormalWeight));
    assert_eq!(view.fitness.classification.bmi(), Some(22.5));
    assert!(view.fitness.body_fat.is_some());
    assert!(view.fitness.waist_hip.is_some());
    assert!(view.fitness.muscle_mass.is_none());

    assert_eq!(view.recommendation.profile, RecommendationProfile::NormalWeight);
    assert_eq!(view.recommendation.quick_overview.goal, "Muscle Gain");
    assert_eq!(view.recommendation.quick_overview.level, "Intermediate");

    let ranked: Vec<&str> = view
        .ranked_trainers
        .iter()
        .map(|m| m.trainer.name.as_str())
        .collect();
    assert_eq!(ranked, vec!["Alex", "Blair", "Casey"]);
    assert_eq!(view.recommended_trainers.len(), 3);

    assert_eq!(view.membership.state, MembershipState::Active);
    assert_eq!(view.membership.days_remaining, Some(20));
    assert!(view.membership.qr_eligible);

    let tip = view.tip_of_the_day.expect("tip selected");
    assert!(view.recommendation.tips.contains(&tip));
}

#[tokio::test]
async fn test_unknown_member_is_an_error() {
    let now = reference_now();
    let (snapshot, _) = MockDataGenerator::snapshot(now);
    let provider = SnapshotDataProvider::new(snapshot);
    let service = DashboardService::new(DashboardConfig::default());
    let missing = Uuid::new_v4();

    let result = service.build(&provider, missing, now).await;

    assert_matches!(result, Err(ProviderError::MemberNotFound(id)) if id == missing);
}

#[tokio::test]
async fn test_provider_failures_degrade_sections() {
    init_test_logging();
    let member = MockDataGenerator::member(180.0, 81.0);
    let member_id = member.id;
    let provider = FlakyProvider {
        member: Some(member),
    };
    let service = DashboardService::new(DashboardConfig::default());

    let view = service
        .build(&provider, member_id, reference_now())
        .await
        .unwrap();

    assert_eq!(
        view.degraded_sections,
        vec![
            DashboardSection::Activity,
            DashboardSection::Trainers,
            DashboardSection::Membership,
        ]
    );
    assert_eq!(view.engagement.score, 0);
    assert_eq!(view.fitness.category(), Some(BmiCategory::NormalWeight));
    assert!(view.ranked_trainers.is_empty());
    assert!(view.recommended_trainers.is_empty());
    assert_eq!(view.membership.state, MembershipState::NoPlan);
    assert!(!view.membership.qr_eligible);
}

#[tokio::test]
async fn test_profile_failure_falls_back_to_general_plan() {
    let provider = FlakyProvider { member: None };
    let service = DashboardService::new(DashboardConfig::default());
    let member_id = Uuid::new_v4();

    let view = service
        .build(&provider, member_id, reference_now())
        .await
        .unwrap();

    assert_eq!(view.degraded_sections[0], DashboardSection::Profile);
    assert_eq!(view.member_name, "Member");
    assert_eq!(view.fitness.category(), None);
    assert_eq!(view.recommendation.profile, RecommendationProfile::General);
}

#[tokio::test]
async fn test_missing_capabilities_are_masked() {
    let now = reference_now();
    let (mut snapshot, member_id) = MockDataGenerator::snapshot(now);
    snapshot.capabilities = Some(DataCapabilities {
        class_enrollment: false,
        body_measurements: false,
        ..DataCapabilities::all()
    });
    let provider = SnapshotDataProvider::new(snapshot);
    let service = DashboardService::new(DashboardConfig::default());

    let view = service.build(&provider, member_id, now).await.unwrap();

    assert_eq!(view.engagement.breakdown.class_enrollment, 0);
    assert_eq!(view.engagement.score, 80);
    assert_eq!(view.fitness.category(), None);
    assert!(view.fitness.body_fat.is_none());
    assert!(view.degraded_sections.is_empty());
}

#[tokio::test]
async fn test_lookback_window_limits_activity() {
    let now = reference_now();
    let (snapshot, member_id) = MockDataGenerator::snapshot(now);
    let provider = SnapshotDataProvider::new(snapshot);
    let later = now + chrono::Duration::days(31);

    let view = DashboardService::new(DashboardConfig::default())
        .build(&provider, member_id, later)
        .await
        .unwrap();

    assert_eq!(view.engagement.metrics, ActivityAggregate::default());
    assert_eq!(view.membership.state, MembershipState::Expired);
}

#[tokio::test]
async fn test_seeded_tip_is_reproducible() {
    let now = reference_now();
    let (snapshot, member_id) = MockDataGenerator::snapshot(now);
    let provider = SnapshotDataProvider::new(snapshot);
    let config = DashboardConfig {
        tip_seed: Some(42),
        ..DashboardConfig::default()
    };
    let service = DashboardService::new(config);

    let first = service.build(&provider, member_id, now).await.unwrap();
    let second = service
        .build(&provider, member_id, now + chrono::Duration::days(1))
        .await
        .unwrap();

    assert_eq!(first.tip_of_the_day, second.tip_of_the_day);
    assert_eq!(first.recommendation.tips, second.recommendation.tips);
}

#[tokio::test]
async fn test_snapshot_loaded_from_file() {
    let now = reference_now();
    let (snapshot, member_id) = MockDataGenerator::snapshot(now);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&snapshot).unwrap().as_bytes())
        .unwrap();

    let provider = SnapshotDataProvider::load(file.path()).await.unwrap();
    let view = DashboardService::new(DashboardConfig::default())
        .build(&provider, member_id, now)
        .await
        .unwrap();

    assert_eq!(provider.snapshot().members.len(), 1);
    assert_eq!(view.engagement.score, 100);
}

#[tokio::test]
async fn test_malformed_snapshot_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"members\": 42}").unwrap();

    let result = SnapshotDataProvider::load(file.path()).await;
    assert_matches!(result, Err(ProviderError::SnapshotFormat(_)));

    let missing = SnapshotDataProvider::load(std::path::Path::new("/nonexistent/snapshot.json")).await;
    assert_matches!(missing, Err(ProviderError::SnapshotIo(_)));
}

#[tokio::test]
async fn test_oversized_window_and_plan_do_not_abort() {
    let now = reference_now();
    let (mut snapshot, member_id) = MockDataGenerator::snapshot(now);
    snapshot.plans[0].duration_days = u32::MAX;
    let provider = SnapshotDataProvider::new(snapshot);
    let config = DashboardConfig {
        lookback_days: u32::MAX,
        ..DashboardConfig::default()
    };

    let view = DashboardService::new(config)
        .build(&provider, member_id, now)
        .await
        .unwrap();

    assert_eq!(view.engagement.metrics.visit_count, 15);
    assert_eq!(view.membership.state, MembershipState::Active);
    assert_eq!(view.membership.expiry_date, None);
    assert!(view.degraded_sections.is_empty());
}

#[test]
fn test_window_start_clamped_to_earliest_instant() {
    let window = LookbackWindow::new(reference_now(), u32::MAX);

    assert_eq!(window.start(), chrono::DateTime::<chrono::Utc>::MIN_UTC);
    assert!(window.contains(reference_now() - chrono::Duration::days(36_500)));
}
