use crate::geometry::Size;
use crate::shape::{GridStyle, Shape, ShapeKind};
use crate::width::WidthFn;

/// Bottom-up bounding box for one shape node.
///
/// Child sizes come through [`Shape::size`] so every node is measured at
/// most once no matter how often ancestors ask.
pub(crate) fn measure(kind: &ShapeKind, width: WidthFn) -> Size {
    match kind {
        ShapeKind::Empty => Size::new(0, 0),
        ShapeKind::Text { lines } => {
            let widest = lines.iter().map(|line| width(line)).max().unwrap_or(0);
            Size::new(widest, lines.len())
        }
        ShapeKind::Frame { inner } => {
            let inner = inner.size(width);
            Size::new(inner.width + 2, inner.height + 2)
        }
        ShapeKind::Pad { dx, dy, inner } => {
            let inner = inner.size(width);
            Size::new(inner.width + 2 * dx, inner.height + 2 * dy)
        }
        ShapeKind::Grid { style, cells } => grid_tracks(cells, *style, width).size(),
        ShapeKind::Tree {
            indent,
            node,
            children,
        } => {
            let node = node.size(width);
            let widest_child = children
                .iter()
                .map(|child| child.size(width).width)
                .max()
                .unwrap_or(0);
            let children_height: usize =
                children.iter().map(|child| child.size(width).height).sum();
            Size::new(
                node.width.max(indent + 3 + widest_child),
                node.height + children_height,
            )
        }
    }
}

/// Cumulative track offsets for a grid.
///
/// `col_start[i]` is the column where cell column `i` begins, including one
/// boundary column per internal bar; `col_start[ncols]` overshoots by the
/// trailing boundary, which [`size`](Self::size) trims off. `row_start` is
/// the same for rows and heights. The painter consumes the same arrays, so
/// painting can never disagree with the computed size.
#[derive(Debug)]
pub struct GridTracks {
    pub col_start: Vec<usize>,
    pub row_start: Vec<usize>,
    bars: bool,
}

pub fn grid_tracks(cells: &[Vec<Shape>], style: GridStyle, width: WidthFn) -> GridTracks {
    let rows = cells.len();
    let cols = cells.first().map(Vec::len).unwrap_or(0);
    let bar = matches!(style, GridStyle::Bars) as usize;

    let mut col_max = vec![0usize; cols];
    let mut row_max = vec![0usize; rows];
    for (j, row) in cells.iter().enumerate() {
        for (i, cell) in row.iter().enumerate() {
            let size = cell.size(width);
            col_max[i] = col_max[i].max(size.width);
            row_max[j] = row_max[j].max(size.height);
        }
    }

    let mut col_start = vec![0usize; cols + 1];
    for i in 0..cols {
        col_start[i + 1] = col_start[i] + col_max[i] + bar;
    }
    let mut row_start = vec![0usize; rows + 1];
    for j in 0..rows {
        row_start[j + 1] = row_start[j] + row_max[j] + bar;
    }

    GridTracks {
        col_start,
        row_start,
        bars: bar == 1,
    }
}

impl GridTracks {
    /// Total grid size: the last cumulative offset minus the boundary unit
    /// that was added past the final column/row.
    pub fn size(&self) -> Size {
        let trim = self.bars as usize;
        let total = |starts: &[usize]| starts.last().map_or(0, |end| end.saturating_sub(trim));
        Size::new(total(&self.col_start), total(&self.row_start))
    }
}
