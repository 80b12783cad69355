//! Source directory scanners.

mod local;
mod memory;

pub use local::LocalScanner;
pub use memory::MemoryScanner;
