pub mod core;

pub use crate::core::queue::{ConcurrentQueue, SafeQueue};
