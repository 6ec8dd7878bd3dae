pub mod admin;
pub mod request;

pub use admin::AdminFeaturedPage;
pub use request::FeaturedRequestPage;
