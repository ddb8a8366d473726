//! blockprint renders trees of layout primitives into flat fixed-width text.
//!
//! Application code assembles a [`Shape`] tree through [`shape::build`],
//! then hands it to [`render_to_string`] or a [`TextRenderer`]. Sizing walks
//! the tree bottom-up with a memoized bounding box per node; painting writes
//! glyphs onto a sparse [`Canvas`] which serializes itself into linear text,
//! reconstructing line breaks and gaps from position deltas.
//!
//! ```
//! use blockprint::{render_to_string, shape::build};
//!
//! let framed = build::frame(build::line("ab"));
//! assert_eq!(render_to_string(&framed), "+--+\n|ab|\n+--+");
//! ```

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod measure;
pub mod metrics;
pub mod render;
pub mod shape;
pub mod width;

pub use canvas::{Atom, Canvas};
pub use error::{RenderError, Result};
pub use geometry::{ORIGIN, Pos, Size};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use measure::{GridTracks, grid_tracks};
pub use metrics::{MetricSnapshot, RenderMetrics};
pub use render::{RendererSettings, TextRenderer, render_to_string, render_to_string_with};
pub use shape::{GridStyle, Shape, ShapeKind};
pub use width::{WidthFn, byte_width, display_width};
