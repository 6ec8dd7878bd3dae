pub mod admin;
pub mod details;
pub mod list;

pub use admin::AdminOrdersPage;
pub use details::OrderDetailsPage;
pub use list::{OrderScope, OrdersListPage};
