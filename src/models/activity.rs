use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PaymentStatus;

/// Default trailing window for activity aggregates
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

/// Raw timestamped record owned by a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub member_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityKind {
    Visit,
    Payment { status: PaymentStatus },
    ClassEnrollment,
    EquipmentUsage,
    Feedback,
}

/// Trailing time span ending at `end`, covering `(end - days, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackWindow {
    pub end: DateTime<Utc>,
    pub days: u32,
}

impl LookbackWindow {
    pub fn new(end: DateTime<Utc>, days: u32) -> Self {
        Self { end, days }
    }

    pub fn ending_now(days: u32) -> Self {
        Self::new(Utc::now(), days)
    }

    /// Window start, clamped to the earliest representable instant
    pub fn start(&self) -> DateTime<Utc> {
        Duration::try_days(i64::from(self.days))
            .and_then(|span| self.end.checked_sub_signed(span))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at > self.start() && at <= self.end
    }
}

/// Activity counts over one lookback window. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAggregate {
    pub visit_count: u32,
    pub total_payments: u32,
    pub completed_payments: u32,
    pub enrolled_classes: u32,
    pub equipment_usage_count: u32,
    pub feedback_count: u32,
}

impl ActivityAggregate {
    /// Count a member's raw records that fall inside the window
    pub fn from_records<'a, I>(records: I, window: &LookbackWindow) -> Self
    where
        I: IntoIterator<Item = &'a ActivityRecord>,
    {
        let mut aggregate = Self::default();

        for record in records.into_iter().filter(|r| window.contains(r.occurred_at)) {
            match record.kind {
                ActivityKind::Visit => aggregate.visit_count += 1,
                ActivityKind::Payment { status } => {
                    aggregate.total_payments += 1;
                    if status.is_settled() {
                        aggregate.completed_payments += 1;
                    }
                }
                ActivityKind::ClassEnrollment => aggregate.enrolled_classes += 1,
                ActivityKind::EquipmentUsage => aggregate.equipment_usage_count += 1,
                ActivityKind::Feedback => aggregate.feedback_count += 1,
            }
        }

        aggregate
    }

    /// Completed share of payments as a percentage, if any payments exist
    pub fn payment_reliability_pct(&self) -> Option<f64> {
        if self.total_payments == 0 {
            return None;
        }
        let completed = self.completed_payments.min(self.total_payments);
        Some(f64::from(completed) / f64::from(self.total_payments) * 100.0)
    }
}

/// Coarse activity level derived from the attendance tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub fn from_visits(visit_count: u32) -> Self {
        match visit_count {
            v if v >= 15 => ActivityLevel::High,
            v if v >= 5 => ActivityLevel::Moderate,
            _ => ActivityLevel::Low,
        }
    }
}
