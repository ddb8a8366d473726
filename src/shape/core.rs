use std::cell::OnceCell;

use crate::geometry::Size;
use crate::measure;
use crate::width::WidthFn;

/// Separator style for [`ShapeKind::Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStyle {
    /// `+`, `-`, `|` rules between cells.
    Bars,
    /// Cells abut directly.
    None,
}

/// A layout primitive plus its memoized bounding box.
///
/// Sizes of ancestor shapes query child sizes repeatedly, so each node
/// computes its own at most once. The cached value depends on the injected
/// width function; use one width function consistently for a given tree.
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    size: OnceCell<Size>,
}

/// The closed set of layout primitives.
///
/// Trees of these are assembled by the [`build`](crate::shape::build)
/// module, which also enforces the structural invariants (rectangular grid
/// matrices, non-empty tree children) the painter relies on.
#[derive(Debug, Clone)]
pub enum ShapeKind {
    /// Zero-size placeholder.
    Empty,
    /// Lines of text; no entry contains a line break.
    Text { lines: Vec<String> },
    /// One-cell border on all four sides of the inner shape.
    Frame { inner: Box<Shape> },
    /// `dx` blank columns left and right, `dy` blank rows above and below.
    Pad {
        dx: usize,
        dy: usize,
        inner: Box<Shape>,
    },
    /// Rectangular matrix of cells rendered as a table.
    Grid {
        style: GridStyle,
        cells: Vec<Vec<Shape>>,
    },
    /// Labeled node with children drawn below, joined by connector glyphs.
    /// `indent` is the horizontal offset reserved for the connector column.
    Tree {
        indent: usize,
        node: Box<Shape>,
        children: Vec<Shape>,
    },
}

impl Shape {
    pub(crate) fn from_kind(kind: ShapeKind) -> Self {
        Self {
            kind,
            size: OnceCell::new(),
        }
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Bounding box of this shape under `width`, computed once and cached.
    pub fn size(&self, width: WidthFn) -> Size {
        *self.size.get_or_init(|| measure::measure(&self.kind, width))
    }
}
