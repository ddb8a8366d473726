use thiserror::Error;

/// Unified result type for the blockprint crate.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors surfaced by the shape builders and the output sink.
///
/// Structural problems are rejected by the builder API before a tree ever
/// reaches the painter, so the render path itself can only fail on I/O.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("tree node requires at least one child")]
    EmptyTree,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
