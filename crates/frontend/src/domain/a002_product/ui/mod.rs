pub mod admin;
pub mod catalog;
pub mod details;
pub mod my_listings;

pub use admin::AdminProductsPage;
pub use catalog::CatalogPage;
pub use details::ProductDetailsPage;
pub use my_listings::MyListingsPage;
