//! Width module orchestrator.

mod utils;

pub use utils::{WidthFn, byte_width, display_width};
