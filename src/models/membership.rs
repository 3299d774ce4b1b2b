use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Purchasable membership plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub id: Uuid,
    pub name: String,
    pub duration_days: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Failed,
    Completed,
}

impl PaymentStatus {
    /// Whether the payment counts as completed for reliability scoring
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Approved | PaymentStatus::Completed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub member_id: Uuid,
    pub plan_id: Uuid,
    pub status: PaymentStatus,
    pub payment_date: DateTime<Utc>,
    pub amount: f64,
}

/// Latest approved payment joined with the plan it bought
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanPayment {
    pub payment: PaymentRecord,
    pub plan: MembershipPlan,
}

/// Membership lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipState {
    NoPlan,
    PendingPayment,
    PaymentFailed,
    Active,
    ExpiringSoon,
    Expired,
}

impl MembershipState {
    /// Whether the member may currently use the gym
    pub fn is_usable(&self) -> bool {
        matches!(self, MembershipState::Active | MembershipState::ExpiringSoon)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MembershipState::NoPlan => "No active plan",
            MembershipState::PendingPayment => "Payment pending approval",
            MembershipState::PaymentFailed => "Payment failed",
            MembershipState::Active => "Active",
            MembershipState::ExpiringSoon => "Expiring soon",
            MembershipState::Expired => "Expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipStatus {
    pub state: MembershipState,
    pub plan_name: Option<String>,
    pub days_remaining: Option<i64>, // Negative once expired
    pub expiry_date: Option<DateTime<Utc>>,
    pub qr_eligible: bool,
}

impl MembershipStatus {
    pub fn without_plan(state: MembershipState) -> Self {
        Self {
            state,
            plan_name: None,
            days_remaining: None,
            expiry_date: None,
            qr_eligible: false,
        }
    }

    /// Days remaining clamped at zero for display
    pub fn display_days_remaining(&self) -> i64 {
        self.days_remaining.unwrap_or(0).max(0)
    }
}
