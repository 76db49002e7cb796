pub mod user_service;
pub mod memory_store;

pub use user_service::*;
pub use memory_store::*;
