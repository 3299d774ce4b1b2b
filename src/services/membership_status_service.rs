use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::models::{MembershipState, MembershipStatus, PaymentRecord, PaymentStatus, PlanPayment};

const SECONDS_PER_DAY: i64 = 86_400;

/// Derives membership lifecycle state from payments and plan data
#[derive(Debug, Clone)]
pub struct MembershipStatusService {
    expiring_soon_days: i64,
    qr_min_plan_days: u32,
}

impl Default for MembershipStatusService {
    fn default() -> Self {
        Self::new(7, 30)
    }
}

impl MembershipStatusService {
    pub fn new(expiring_soon_days: i64, qr_min_plan_days: u32) -> Self {
        Self {
            expiring_soon_days,
            qr_min_plan_days,
        }
    }

    /// Evaluate the membership at `now`.
    ///
    /// `current` is the latest approved payment joined with its plan;
    /// `latest` is the member's most recent payment of any status, used only
    /// when nothing has been approved.
    pub fn evaluate(
        &self,
        current: Option<&PlanPayment>,
        latest: Option<&PaymentRecord>,
        now: DateTime<Utc>,
    ) -> MembershipStatus {
        let Some(PlanPayment { payment, plan }) = current else {
            let state = match latest.map(|p| p.status) {
                Some(PaymentStatus::Pending) => MembershipState::PendingPayment,
                Some(PaymentStatus::Failed) => MembershipState::PaymentFailed,
                _ => MembershipState::NoPlan,
            };
            return MembershipStatus::without_plan(state);
        };

        let Some(expiry_date) = expiry_date(payment.payment_date, plan.duration_days) else {
            // Expiry is past the representable calendar; the plan never runs out
            warn!(
                plan = %plan.name,
                duration_days = plan.duration_days,
                "Plan expiry out of range, treating as non-expiring"
            );
            return MembershipStatus {
                state: MembershipState::Active,
                plan_name: Some(plan.name.clone()),
                days_remaining: None,
                expiry_date: None,
                qr_eligible: plan.duration_days >= self.qr_min_plan_days,
            };
        };
        let days_remaining = days_until(expiry_date, now);

        let state = if days_remaining <= 0 {
            MembershipState::Expired
        } else if days_remaining <= self.expiring_soon_days {
            MembershipState::ExpiringSoon
        } else {
            MembershipState::Active
        };

        let qr_eligible = state.is_usable() && plan.duration_days >= self.qr_min_plan_days;

        debug!(
            plan = %plan.name,
            days_remaining,
            ?state,
            qr_eligible,
            "Evaluated membership status"
        );

        MembershipStatus {
            state,
            plan_name: Some(plan.name.clone()),
            days_remaining: Some(days_remaining),
            expiry_date: Some(expiry_date),
            qr_eligible,
        }
    }
}

/// Payment date plus the plan duration, or `None` when that overflows
pub fn expiry_date(payment_date: DateTime<Utc>, duration_days: u32) -> Option<DateTime<Utc>> {
    Duration::try_days(i64::from(duration_days))
        .and_then(|duration| payment_date.checked_add_signed(duration))
}

/// Whole days from `now` until `expiry`, rounded up; negative once past
pub fn days_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (expiry - now).num_seconds();
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_days_until_rounds_up() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(days_until(now + Duration::hours(1), now), 1);
        assert_eq!(days_until(now + Duration::days(3), now), 3);
        assert_eq!(days_until(now, now), 0);
    }

    #[test]
    fn test_expiry_date_overflow_is_none() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(expiry_date(now, 30), Some(now + Duration::days(30)));
        assert_eq!(expiry_date(now, u32::MAX), None);
    }

    #[test]
    fn test_days_until_negative_after_expiry() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(days_until(now - Duration::hours(1), now), 0);
        assert_eq!(days_until(now - Duration::days(2), now), -2);
        assert_eq!(days_until(now - Duration::hours(36), now), -1);
    }
}
