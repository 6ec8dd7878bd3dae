pub mod inbox;
pub mod overlay;

pub use inbox::MessagesPage;
pub use overlay::ChatOverlay;
