pub mod harness;
pub mod log;
pub mod queue;
