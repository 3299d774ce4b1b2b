#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use gym_dashboard::models::*;
use gym_dashboard::services::DashboardSnapshot;
use std::sync::Once;
use uuid::Uuid;

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Fixed evaluation instant so date arithmetic is reproducible
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 18, 0, 0).unwrap()
}

/// Mock data generators
pub struct MockDataGenerator;

impl MockDataGenerator {
    /// Generate a member with height and weight set
    pub fn member(height_cm: f64, weight_kg: f64) -> Member {
        Member {
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            ..Member::new(Uuid::new_v4(), "Test Member")
        }
    }

    pub fn aggregate(
        visits: u32,
        total_payments: u32,
        completed_payments: u32,
        classes: u32,
        equipment: u32,
        feedback: u32,
    ) -> ActivityAggregate {
        ActivityAggregate {
            visit_count: visits,
            total_payments,
            completed_payments,
            enrolled_classes: classes,
            equipment_usage_count: equipment,
            feedback_count: feedback,
        }
    }

    pub fn trainer(
        name: &str,
        specialization: &str,
        experience_years: u32,
        rating: f64,
        feedback_count: u32,
        status: TrainerStatus,
    ) -> Trainer {
        Trainer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            specialization: specialization.to_string(),
            experience_years,
            rating,
            feedback_count,
            status,
        }
    }

    pub fn plan(name: &str, duration_days: u32) -> MembershipPlan {
        MembershipPlan {
            id: Uuid::new_v4(),
            name: name.to_string(),
            duration_days,
            price: f64::from(duration_days) * 1.5,
        }
    }

    pub fn payment(
        member_id: Uuid,
        plan: &MembershipPlan,
        status: PaymentStatus,
        payment_date: DateTime<Utc>,
    ) -> PaymentRecord {
        PaymentRecord {
            id: Uuid::new_v4(),
            member_id,
            plan_id: plan.id,
            status,
            payment_date,
            amount: plan.price,
        }
    }

    pub fn plan_payment(duration_days: u32, days_ago: i64, now: DateTime<Utc>) -> PlanPayment {
        let plan = Self::plan("Monthly", duration_days);
        let payment = Self::payment(
            Uuid::new_v4(),
            &plan,
            PaymentStatus::Approved,
            now - Duration::days(days_ago),
        );
        PlanPayment { payment, plan }
    }

    /// Records of one kind spread one hour apart ending at `end`
    pub fn records(member_id: Uuid, kind: ActivityKind, count: u32, end: DateTime<Utc>) -> Vec<ActivityRecord> {
        (0..count)
            .map(|i| ActivityRecord {
                member_id,
                occurred_at: end - Duration::hours(i64::from(i) + 1),
                kind,
            })
            .collect()
    }

    /// Snapshot with one fully engaged member, a 30-day plan and three trainers
    pub fn snapshot(now: DateTime<Utc>) -> (DashboardSnapshot, Uuid) {
        let member = Member {
            fitness_goal: Some(FitnessGoal::MuscleGain),
            experience_level: Some(FitnessLevel::Intermediate),
            body_fat_pct: Some(18.0),
            waist_cm: Some(80.0),
            hip_cm: Some(100.0),
            ..Self::member(170.0, 65.0)
        };
        let member_id = member.id;

        let mut activity = Vec::new();
        activity.extend(Self::records(member_id, ActivityKind::Visit, 15, now));
        activity.extend(Self::records(
            member_id,
            ActivityKind::Payment {
                status: PaymentStatus::Completed,
            },
            2,
            now,
        ));
        activity.extend(Self::records(member_id, ActivityKind::ClassEnrollment, 3, now));
        activity.extend(Self::records(member_id, ActivityKind::EquipmentUsage, 10, now));
        activity.extend(Self::records(member_id, ActivityKind::Feedback, 2, now));

        let plan = Self::plan("Monthly", 30);
        let payments = vec![Self::payment(
            member_id,
            &plan,
            PaymentStatus::Approved,
            now - Duration::days(10),
        )];

        let trainers = vec![
            Self::trainer("Alex", "Strength Training, Bodybuilding", 6, 4.8, 20, TrainerStatus::Active),
            Self::trainer("Blair", "Yoga, Pilates", 8, 4.9, 30, TrainerStatus::Active),
            Self::trainer("Casey", "Cardio", 2, 4.0, 5, TrainerStatus::OnLeave),
        ];

        let snapshot = DashboardSnapshot {
            members: vec![member],
            activity,
            plans: vec![plan],
            payments,
            trainers,
            trainer_feedback: Vec::new(),
            capabilities: None,
        };

        (snapshot, member_id)
    }
}
