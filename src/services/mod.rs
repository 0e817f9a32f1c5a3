pub mod command;
pub mod worker;

pub use command::{ApiCommand, ApiResponse, EventFetch};
pub use worker::{execute, spawn_worker};
