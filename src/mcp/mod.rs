pub mod error;
pub mod server;
pub mod tools;

pub use error::ToolError;
pub use server::{run_mcp_server, MalServer};
pub use tools::TOOL_NAMES;
