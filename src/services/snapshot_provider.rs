use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::ProviderError;
use crate::models::{
    ActivityAggregate, ActivityRecord, LookbackWindow, Member, MembershipPlan, PaymentRecord,
    PaymentStatus, PlanPayment, Trainer, TrainerFeedback,
};
use crate::services::data_provider::{DataCapabilities, DataProvider};

/// Point-in-time export of the gym's records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub activity: Vec<ActivityRecord>,
    #[serde(default)]
    pub plans: Vec<MembershipPlan>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
    #[serde(default)]
    pub trainers: Vec<Trainer>,
    #[serde(default)]
    pub trainer_feedback: Vec<TrainerFeedback>,
    #[serde(default)]
    pub capabilities: Option<DataCapabilities>,
}

/// DataProvider backed by an in-memory snapshot
#[derive(Debug, Clone)]
pub struct SnapshotDataProvider {
    snapshot: DashboardSnapshot,
}

impl SnapshotDataProvider {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a JSON snapshot from disk
    pub async fn load(path: &Path) -> Result<Self, ProviderError> {
        let contents = tokio::fs::read_to_string(path).await?;
        let snapshot: DashboardSnapshot = serde_json::from_str(&contents)?;
        info!(
            members = snapshot.members.len(),
            trainers = snapshot.trainers.len(),
            records = snapshot.activity.len(),
            "Loaded dashboard snapshot from {}",
            path.display()
        );
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    fn member_payments(&self, member_id: Uuid) -> impl Iterator<Item = &PaymentRecord> {
        self.snapshot
            .payments
            .iter()
            .filter(move |p| p.member_id == member_id)
    }
}

#[async_trait]
impl DataProvider for SnapshotDataProvider {
    fn capabilities(&self) -> DataCapabilities {
        self.snapshot.capabilities.unwrap_or_default()
    }

    async fn member_profile(&self, member_id: Uuid) -> Result<Member, ProviderError> {
        self.snapshot
            .members
            .iter()
            .find(|m| m.id == member_id)
            .cloned()
            .ok_or(ProviderError::MemberNotFound(member_id))
    }

    async fn activity_aggregate(
        &self,
        member_id: Uuid,
        window: LookbackWindow,
    ) -> Result<ActivityAggregate, ProviderError> {
        let records = self
            .snapshot
            .activity
            .iter()
            .filter(|r| r.member_id == member_id);
        Ok(ActivityAggregate::from_records(records, &window))
    }

    async fn current_plan_payment(
        &self,
        member_id: Uuid,
    ) -> Result<Option<PlanPayment>, ProviderError> {
        let Some(payment) = self
            .member_payments(member_id)
            .filter(|p| p.status == PaymentStatus::Approved)
            .max_by_key(|p| p.payment_date)
        else {
            return Ok(None);
        };

        match self.snapshot.plans.iter().find(|plan| plan.id == payment.plan_id) {
            Some(plan) => Ok(Some(PlanPayment {
                payment: payment.clone(),
                plan: plan.clone(),
            })),
            None => {
                warn!(
                    "Approved payment {} references unknown plan {}",
                    payment.id, payment.plan_id
                );
                Ok(None)
            }
        }
    }

    async fn latest_payment(&self, member_id: Uuid) -> Result<Option<PaymentRecord>, ProviderError> {
        Ok(self
            .member_payments(member_id)
            .max_by_key(|p| p.payment_date)
            .cloned())
    }

    async fn trainers(&self) -> Result<Vec<Trainer>, ProviderError> {
        let feedback = &self.snapshot.trainer_feedback;
        Ok(self
            .snapshot
            .trainers
            .iter()
            .map(|trainer| {
                // Stored ratings stand when there is no raw feedback to recompute from
                if feedback.iter().any(|f| f.trainer_id == trainer.id) {
                    trainer.clone().with_feedback(feedback)
                } else {
                    trainer.clone()
                }
            })
            .collect())
    }
}
