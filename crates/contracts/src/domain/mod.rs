pub mod a001_category;
pub mod a002_product;
pub mod a003_cart;
pub mod a004_order;
pub mod a005_message;
pub mod a006_featured_payment;
pub mod a007_wishlist;
