use contracts::domain::a003_cart::CartItem;

/// Why a cart cannot be checked out as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    EmptyCart,
    /// Orders are per-seller; a mixed cart has to be split by the buyer.
    MultipleSellers,
    MissingShippingAddress,
}

impl CheckoutError {
    pub fn message(&self) -> &'static str {
        match self {
            CheckoutError::EmptyCart => "Your cart is empty",
            CheckoutError::MultipleSellers => {
                "Your cart contains items from more than one seller. Please order them separately."
            }
            CheckoutError::MissingShippingAddress => "Enter a shipping address",
        }
    }
}

/// Client-side pre-flight for order creation. The backend revalidates; this
/// only catches what can be seen from the cart snapshot alone.
pub fn validate_checkout(items: &[CartItem], shipping_address: &str) -> Result<(), CheckoutError> {
    let mut sellers = items.iter().map(|item| item.seller_id.as_str());
    let Some(first) = sellers.next() else {
        return Err(CheckoutError::EmptyCart);
    };
    if sellers.any(|s| s != first) {
        return Err(CheckoutError::MultipleSellers);
    }
    if shipping_address.trim().is_empty() {
        return Err(CheckoutError::MissingShippingAddress);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, seller_id: &str) -> CartItem {
        CartItem {
            product_id: product_id.into(),
            product_name: "item".into(),
            product_image: None,
            seller_id: seller_id.into(),
            price: 10.0,
            quantity: 1,
        }
    }

    #[test]
    fn test_empty_cart_rejected() {
        assert_eq!(
            validate_checkout(&[], "12 Main St"),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn test_mixed_sellers_rejected() {
        let items = vec![item("p1", "seller-a"), item("p2", "seller-b")];
        assert_eq!(
            validate_checkout(&items, "12 Main St"),
            Err(CheckoutError::MultipleSellers)
        );
    }

    #[test]
    fn test_single_seller_accepted() {
        let items = vec![item("p1", "seller-a"), item("p2", "seller-a")];
        assert_eq!(validate_checkout(&items, "12 Main St"), Ok(()));
    }

    #[test]
    fn test_blank_address_rejected() {
        let items = vec![item("p1", "seller-a")];
        assert_eq!(
            validate_checkout(&items, "   "),
            Err(CheckoutError::MissingShippingAddress)
        );
    }
}
