use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ProviderError;
use crate::models::{ActivityAggregate, LookbackWindow, Member, PaymentRecord, PlanPayment, Trainer};

/// Which optional data sources the provider actually has.
///
/// Callers declare these up front instead of the core probing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCapabilities {
    pub class_enrollment: bool,
    pub equipment_usage: bool,
    pub feedback: bool,
    pub body_measurements: bool,
}

impl Default for DataCapabilities {
    fn default() -> Self {
        Self::all()
    }
}

impl DataCapabilities {
    pub fn all() -> Self {
        Self {
            class_enrollment: true,
            equipment_usage: true,
            feedback: true,
            body_measurements: true,
        }
    }

    /// Zero the counts for sources the provider does not track
    pub fn mask(&self, aggregate: ActivityAggregate) -> ActivityAggregate {
        ActivityAggregate {
            enrolled_classes: if self.class_enrollment { aggregate.enrolled_classes } else { 0 },
            equipment_usage_count: if self.equipment_usage {
                aggregate.equipment_usage_count
            } else {
                0
            },
            feedback_count: if self.feedback { aggregate.feedback_count } else { 0 },
            ..aggregate
        }
    }

    /// Strip body measurements when the provider does not store them
    pub fn mask_member(&self, mut member: Member) -> Member {
        if !self.body_measurements {
            member.height_cm = None;
            member.weight_kg = None;
            member.body_fat_pct = None;
            member.muscle_mass_pct = None;
            member.waist_cm = None;
            member.hip_cm = None;
        }
        member
    }
}

/// Source of member-scoped records consumed by the dashboard.
///
/// Implementations own all I/O; everything downstream is pure computation.
#[async_trait]
pub trait DataProvider: Send + Sync {
    fn capabilities(&self) -> DataCapabilities {
        DataCapabilities::all()
    }

    async fn member_profile(&self, member_id: Uuid) -> Result<Member, ProviderError>;

    async fn activity_aggregate(
        &self,
        member_id: Uuid,
        window: LookbackWindow,
    ) -> Result<ActivityAggregate, ProviderError>;

    /// Latest approved payment joined with its plan
    async fn current_plan_payment(&self, member_id: Uuid)
        -> Result<Option<PlanPayment>, ProviderError>;

    /// Most recent payment of any status
    async fn latest_payment(&self, member_id: Uuid) -> Result<Option<PaymentRecord>, ProviderError>;

    async fn trainers(&self) -> Result<Vec<Trainer>, ProviderError>;
}
