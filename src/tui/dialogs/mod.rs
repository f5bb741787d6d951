//! Popup dialogs

pub mod confirm;
pub mod summary;
