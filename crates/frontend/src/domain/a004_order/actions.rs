//! Role-gated action set for an order page.
//!
//! Given the (status, payment status, viewer role) tuple, decides which
//! buttons the page renders. This is display logic only: the backend
//! re-validates every requested transition and may reject it.

use contracts::enums::{OrderStatus, PaymentStatus, UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Seller uploads a package photo, then requests PROCESSING -> SHIPPED.
    ConfirmShipment,
    /// Buyer uploads a receipt photo, then requests SHIPPED -> DELIVERED.
    ConfirmDelivery,
    /// Open the chat overlay with the admin (refund discussion).
    ChatWithAdmin,
    /// Admin sets the order status directly via dropdown.
    OverrideStatus,
    /// Admin confirms or refunds the payment.
    SetPaymentStatus,
}

/// Actions available to `role` for an order in the given state.
///
/// Unparseable statuses (None) gate everything except the admin override:
/// a stuck order must stay fixable from the back office.
pub fn actions_for(
    status: Option<OrderStatus>,
    _payment_status: Option<PaymentStatus>,
    role: UserRole,
) -> Vec<OrderAction> {
    let mut actions = Vec::new();

    if role == UserRole::Admin {
        actions.push(OrderAction::OverrideStatus);
        actions.push(OrderAction::SetPaymentStatus);
    }

    match (status, role) {
        (Some(OrderStatus::Processing), UserRole::Seller) => {
            actions.push(OrderAction::ConfirmShipment);
        }
        (Some(OrderStatus::Shipped), UserRole::Buyer) => {
            actions.push(OrderAction::ConfirmDelivery);
        }
        (Some(OrderStatus::Delivered), _) => {
            actions.push(OrderAction::ChatWithAdmin);
        }
        _ => {}
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(actions: &[OrderAction], action: OrderAction) -> bool {
        actions.contains(&action)
    }

    #[test]
    fn test_seller_may_ship_while_processing() {
        let actions = actions_for(
            Some(OrderStatus::Processing),
            Some(PaymentStatus::Paid),
            UserRole::Seller,
        );
        assert!(has(&actions, OrderAction::ConfirmShipment));
        assert!(!has(&actions, OrderAction::ConfirmDelivery));
    }

    #[test]
    fn test_buyer_may_confirm_delivery_when_shipped() {
        let actions = actions_for(
            Some(OrderStatus::Shipped),
            Some(PaymentStatus::Paid),
            UserRole::Buyer,
        );
        assert!(has(&actions, OrderAction::ConfirmDelivery));
        assert!(!has(&actions, OrderAction::ConfirmShipment));
    }

    #[test]
    fn test_roles_do_not_cross() {
        // A buyer can never trigger the seller's step and vice versa.
        let buyer = actions_for(Some(OrderStatus::Processing), None, UserRole::Buyer);
        assert!(buyer.is_empty());

        let seller = actions_for(Some(OrderStatus::Shipped), None, UserRole::Seller);
        assert!(seller.is_empty());
    }

    #[test]
    fn test_delivered_opens_admin_chat_for_everyone() {
        for role in [UserRole::Buyer, UserRole::Seller, UserRole::Admin] {
            let actions = actions_for(Some(OrderStatus::Delivered), None, role);
            assert!(has(&actions, OrderAction::ChatWithAdmin));
        }
    }

    #[test]
    fn test_admin_always_has_override() {
        for status in OrderStatus::ALL {
            let actions = actions_for(Some(status), None, UserRole::Admin);
            assert!(has(&actions, OrderAction::OverrideStatus));
            assert!(has(&actions, OrderAction::SetPaymentStatus));
        }
        // Even for a status this client cannot parse.
        let actions = actions_for(None, None, UserRole::Admin);
        assert!(has(&actions, OrderAction::OverrideStatus));
    }

    #[test]
    fn test_unknown_status_gates_lifecycle_actions() {
        assert!(actions_for(None, None, UserRole::Seller).is_empty());
        assert!(actions_for(None, None, UserRole::Buyer).is_empty());
    }
}
