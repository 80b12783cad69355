//! Drawing host adapters.

mod memory;
mod script;

pub use memory::{ArtItem, ArtboardFit, HostOp, MemoryHost};
pub use script::ScriptHost;
