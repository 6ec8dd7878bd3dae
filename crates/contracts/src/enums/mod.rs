pub mod featured_status;
pub mod order_status;
pub mod payment_status;
pub mod user_role;

pub use featured_status::FeaturedStatus;
pub use order_status::OrderStatus;
pub use payment_status::PaymentStatus;
pub use user_role::UserRole;
