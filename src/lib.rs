pub mod config;
pub mod directory;
pub mod error;
pub mod ipc;
pub mod records;
pub mod search;
pub mod sheets;
pub mod store;
