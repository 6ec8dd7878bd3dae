pub mod actions;
pub mod api;
pub mod fulfillment;
pub mod presentation;
pub mod ui;
