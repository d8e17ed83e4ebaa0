pub mod api;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod dialogs;
pub mod utils;
