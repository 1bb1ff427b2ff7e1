//! Module provides various helper functionality.

pub mod analyze;
pub mod config;
pub mod table;
