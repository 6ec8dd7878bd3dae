//! Status presentation: one mapping from a status value to label, style
//! and description, shared by the buyer view, the seller view, and the
//! admin table.

use contracts::enums::{OrderStatus, PaymentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub css_class: &'static str,
    pub description: &'static str,
}

/// Neutral badge for any status string this client does not recognize.
/// The backend may grow new statuses; rendering must not break when it does.
pub const FALLBACK_BADGE: StatusBadge = StatusBadge {
    label: "Unknown",
    css_class: "badge badge-gray",
    description: "Status not recognized by this version of the app",
};

/// Badge for an order status as reported on the wire.
pub fn status_badge(raw: &str) -> StatusBadge {
    match OrderStatus::parse(raw) {
        Some(OrderStatus::Pending) => StatusBadge {
            label: "Pending",
            css_class: "badge badge-yellow",
            description: "Waiting for the payment to be confirmed",
        },
        Some(OrderStatus::Processing) => StatusBadge {
            label: "Processing",
            css_class: "badge badge-blue",
            description: "Payment confirmed, seller is preparing the package",
        },
        Some(OrderStatus::Shipped) => StatusBadge {
            label: "Shipped",
            css_class: "badge badge-indigo",
            description: "Package handed to the courier",
        },
        Some(OrderStatus::Delivered) => StatusBadge {
            label: "Delivered",
            css_class: "badge badge-green",
            description: "Buyer confirmed receipt",
        },
        Some(OrderStatus::Cancelled) => StatusBadge {
            label: "Cancelled",
            css_class: "badge badge-red",
            description: "Order was cancelled",
        },
        None => FALLBACK_BADGE,
    }
}

/// Badge for a payment status as reported on the wire.
pub fn payment_badge(raw: &str) -> StatusBadge {
    match PaymentStatus::parse(raw) {
        Some(PaymentStatus::Unpaid) => StatusBadge {
            label: "Unpaid",
            css_class: "badge badge-red",
            description: "No payment proof submitted yet",
        },
        Some(PaymentStatus::Pending) => StatusBadge {
            label: "Payment pending",
            css_class: "badge badge-yellow",
            description: "Payment proof awaiting admin confirmation",
        },
        Some(PaymentStatus::Paid) => StatusBadge {
            label: "Paid",
            css_class: "badge badge-green",
            description: "Payment confirmed by admin",
        },
        Some(PaymentStatus::Refunded) => StatusBadge {
            label: "Refunded",
            css_class: "badge badge-gray",
            description: "Payment returned to the buyer",
        },
        None => FALLBACK_BADGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_badge() {
        for status in OrderStatus::ALL {
            let badge = status_badge(status.as_str());
            assert!(!badge.label.is_empty());
            assert!(badge.css_class.starts_with("badge badge-"));
            assert_ne!(badge, FALLBACK_BADGE);
        }
    }

    #[test]
    fn test_every_payment_status_has_a_badge() {
        for status in PaymentStatus::ALL {
            let badge = payment_badge(status.as_str());
            assert!(!badge.label.is_empty());
            assert!(badge.css_class.starts_with("badge badge-"));
        }
    }

    #[test]
    fn test_unrecognized_status_falls_back() {
        assert_eq!(status_badge("ON_HOLD"), FALLBACK_BADGE);
        assert_eq!(status_badge(""), FALLBACK_BADGE);
        assert_eq!(payment_badge("DISPUTED"), FALLBACK_BADGE);
    }
}
