pub mod api_utils;
pub mod date_utils;
pub mod http;
pub mod list_utils;
pub mod money;
pub mod upload;
