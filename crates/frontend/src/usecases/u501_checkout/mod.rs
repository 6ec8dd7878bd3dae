pub mod validate;
pub mod view;

pub use view::CheckoutPage;
