use serde::{Deserialize, Serialize};

/// Lifecycle of a featured-listing payment: created PENDING by the seller,
/// moved to APPROVED or REJECTED by an admin confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeaturedStatus {
    Pending,
    Approved,
    Rejected,
}

impl FeaturedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeaturedStatus::Pending => "PENDING",
            FeaturedStatus::Approved => "APPROVED",
            FeaturedStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(s: &str) -> Option<FeaturedStatus> {
        match s {
            "PENDING" => Some(FeaturedStatus::Pending),
            "APPROVED" => Some(FeaturedStatus::Approved),
            "REJECTED" => Some(FeaturedStatus::Rejected),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeaturedStatus::Pending => "Awaiting review",
            FeaturedStatus::Approved => "Approved",
            FeaturedStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for FeaturedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
