use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::FeaturedStatus;

/// A paid promotion request: the seller transfers the fee out of band,
/// uploads the transfer proof, and an admin approves or rejects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedPayment {
    pub id: String,
    pub product_id: String,
    pub seller_id: String,
    pub amount: f64,
    pub duration_days: u32,
    #[serde(default)]
    pub payment_date: String,
    pub transfer_proof_image_url: String,
    pub status: FeaturedStatus,
}

impl FeaturedPayment {
    /// End of the promotion window, when the payment date parses.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let start = DateTime::parse_from_rfc3339(&self.payment_date).ok()?;
        Some(start.with_timezone(&Utc) + Duration::days(self.duration_days as i64))
    }

    /// True while an approved promotion is inside its window. Used only for
    /// the client-side "one active feature per product" pre-check; the
    /// backend remains the authority.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        if self.status != FeaturedStatus::Approved {
            return false;
        }
        match self.expires_at() {
            Some(end) => now < end,
            None => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeaturedPaymentDto {
    pub product_id: String,
    pub seller_id: String,
    pub amount: f64,
    pub duration_days: u32,
    pub transfer_proof_image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn payment(status: FeaturedStatus, payment_date: &str, days: u32) -> FeaturedPayment {
        FeaturedPayment {
            id: "fp-1".into(),
            product_id: "p-1".into(),
            seller_id: "s-1".into(),
            amount: 25_000.0,
            duration_days: days,
            payment_date: payment_date.into(),
            transfer_proof_image_url: "https://assets.example/proof.png".into(),
            status,
        }
    }

    #[test]
    fn test_live_inside_window() {
        let p = payment(FeaturedStatus::Approved, "2026-01-01T00:00:00Z", 7);
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        assert!(p.is_live(now));
    }

    #[test]
    fn test_not_live_after_window_or_unapproved() {
        let p = payment(FeaturedStatus::Approved, "2026-01-01T00:00:00Z", 7);
        let after = Utc.with_ymd_and_hms(2026, 1, 9, 0, 0, 0).unwrap();
        assert!(!p.is_live(after));

        let pending = payment(FeaturedStatus::Pending, "2026-01-01T00:00:00Z", 7);
        let inside = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
        assert!(!pending.is_live(inside));
    }

    #[test]
    fn test_unparseable_date_never_live() {
        let p = payment(FeaturedStatus::Approved, "yesterday", 7);
        assert!(!p.is_live(Utc::now()));
    }
}
