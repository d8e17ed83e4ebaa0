pub mod client;
pub mod telegram;
pub mod types;
