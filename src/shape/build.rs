//! Constructors for shape trees.
//!
//! The painter assumes structurally valid input; everything that can be
//! malformed is checked here, fail-fast, before a tree reaches the core.

use crate::error::{RenderError, Result};
use crate::shape::{GridStyle, Shape, ShapeKind};

/// Zero-size placeholder.
pub fn empty() -> Shape {
    Shape::from_kind(ShapeKind::Empty)
}

/// Single line of text.
///
/// # Panics
/// Panics if `text` contains a line break; use [`text`] for multi-line
/// input.
pub fn line(text: impl Into<String>) -> Shape {
    let text = text.into();
    assert!(!text.contains('\n'), "line must not contain a line break");
    Shape::from_kind(ShapeKind::Text { lines: vec![text] })
}

/// Text block split on line breaks.
pub fn text(text: impl AsRef<str>) -> Shape {
    let lines = text.as_ref().split('\n').map(str::to_string).collect();
    Shape::from_kind(ShapeKind::Text { lines })
}

/// Text block from pre-split lines.
///
/// # Panics
/// Panics if any entry contains a line break.
pub fn lines<I, S>(lines: I) -> Shape
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
    assert!(
        lines.iter().all(|l| !l.contains('\n')),
        "lines must not contain line breaks"
    );
    Shape::from_kind(ShapeKind::Text { lines })
}

/// One-cell border around `inner`.
pub fn frame(inner: Shape) -> Shape {
    Shape::from_kind(ShapeKind::Frame {
        inner: Box::new(inner),
    })
}

/// One blank cell of padding on every side.
pub fn pad(inner: Shape) -> Shape {
    pad_xy(1, 1, inner)
}

/// `dx` blank columns left and right, `dy` blank rows above and below.
pub fn pad_xy(dx: usize, dy: usize, inner: Shape) -> Shape {
    Shape::from_kind(ShapeKind::Pad {
        dx,
        dy,
        inner: Box::new(inner),
    })
}

/// Rectangular matrix of cells; rejects ragged rows.
pub fn grid(style: GridStyle, cells: Vec<Vec<Shape>>) -> Result<Shape> {
    if let Some(first) = cells.first() {
        let expected = first.len();
        for (row, row_cells) in cells.iter().enumerate().skip(1) {
            if row_cells.len() != expected {
                return Err(RenderError::RaggedGrid {
                    row,
                    expected,
                    found: row_cells.len(),
                });
            }
        }
    }
    Ok(Shape::from_kind(ShapeKind::Grid { style, cells }))
}

/// Grid of text cells.
pub fn grid_text<S: AsRef<str>>(style: GridStyle, cells: Vec<Vec<S>>) -> Result<Shape> {
    grid(
        style,
        cells
            .into_iter()
            .map(|row| row.into_iter().map(text).collect())
            .collect(),
    )
}

/// Vertical list: an n-by-1 grid without separators.
pub fn vlist(shapes: Vec<Shape>) -> Shape {
    let cells = shapes.into_iter().map(|s| vec![s]).collect();
    Shape::from_kind(ShapeKind::Grid {
        style: GridStyle::None,
        cells,
    })
}

/// Vertical list with bar separators.
pub fn vlist_bars(shapes: Vec<Shape>) -> Shape {
    let cells = shapes.into_iter().map(|s| vec![s]).collect();
    Shape::from_kind(ShapeKind::Grid {
        style: GridStyle::Bars,
        cells,
    })
}

/// Horizontal list: a 1-by-n grid without separators.
pub fn hlist(shapes: Vec<Shape>) -> Shape {
    Shape::from_kind(ShapeKind::Grid {
        style: GridStyle::None,
        cells: vec![shapes],
    })
}

/// Horizontal list with bar separators.
pub fn hlist_bars(shapes: Vec<Shape>) -> Shape {
    Shape::from_kind(ShapeKind::Grid {
        style: GridStyle::Bars,
        cells: vec![shapes],
    })
}

/// Labeled node over its children; rejects an empty child list.
pub fn tree(indent: usize, node: Shape, children: Vec<Shape>) -> Result<Shape> {
    if children.is_empty() {
        return Err(RenderError::EmptyTree);
    }
    Ok(Shape::from_kind(ShapeKind::Tree {
        indent,
        node: Box::new(node),
        children,
    }))
}

/// [`tree`] with the conventional connector indent of 1.
pub fn tree1(node: Shape, children: Vec<Shape>) -> Result<Shape> {
    tree(1, node, children)
}
