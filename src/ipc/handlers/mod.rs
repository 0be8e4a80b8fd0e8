pub mod batches;
pub mod core;
pub mod search;
pub mod students;
