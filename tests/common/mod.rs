#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
pub mod logs;

// Re-export commonly used test utilities
pub use harness::MockUpstream;
pub use logs::CapturedLogs;
