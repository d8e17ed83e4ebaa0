pub mod detector;
pub mod entry;
pub mod store;
