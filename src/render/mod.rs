//! Render module orchestrator.
//!
//! The recursive painter and the renderer front end live in the private
//! `core` module.

mod core;

pub use core::{RendererSettings, TextRenderer, render_to_string, render_to_string_with};
