use std::io::Write;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::{ORIGIN, Pos, Size};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::measure::grid_tracks;
use crate::metrics::RenderMetrics;
use crate::shape::{GridStyle, Shape, ShapeKind};
use crate::width::{WidthFn, byte_width};

/// Renderer runtime parameters: the crate's whole configuration surface.
#[derive(Debug, Clone, Copy)]
pub struct RendererSettings {
    /// Fixed left margin prepended to every output line.
    pub indent: usize,
    /// String measurement used for sizing and serialization.
    pub width: WidthFn,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            indent: 0,
            width: byte_width,
        }
    }
}

/// Flat-text renderer writing shape trees to an append-only sink.
pub struct TextRenderer {
    settings: RendererSettings,
    metrics: RenderMetrics,
    logger: Option<Logger>,
}

impl TextRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            metrics: RenderMetrics::new(),
            logger: None,
        }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    /// Paint `shape` at the origin and serialize the canvas into `writer`.
    pub fn render(&mut self, shape: &Shape, writer: &mut impl Write) -> Result<()> {
        let width = self.settings.width;
        let mut canvas = Canvas::new();
        let nodes = paint(&mut canvas, shape, ORIGIN, ORIGIN, None, width);
        let atoms = canvas.len();
        self.metrics.record_render(nodes, atoms);

        canvas.write_to(writer, self.settings.indent, width)?;
        writer.flush()?;

        if let Some(logger) = &self.logger {
            let size = shape.size(width);
            let event = event_with_fields(
                LogLevel::Debug,
                "render",
                "shape_rendered",
                [
                    json_kv("nodes", nodes),
                    json_kv("atoms", atoms),
                    json_kv("width", size.width),
                    json_kv("height", size.height),
                ],
            );
            let _ = logger.log_event(event);
        }

        Ok(())
    }
}

/// Render a shape with default settings into a `String`.
pub fn render_to_string(shape: &Shape) -> String {
    render_to_string_with(shape, RendererSettings::default())
}

/// Render a shape with explicit settings into a `String`.
pub fn render_to_string_with(shape: &Shape, settings: RendererSettings) -> String {
    let mut canvas = Canvas::new();
    paint(&mut canvas, shape, ORIGIN, ORIGIN, None, settings.width);
    canvas.to_text(settings.indent, settings.width)
}

/// Recursive painter.
///
/// `offset` accumulates the displacement of consecutive `Pad` ancestors and
/// resets at every other boundary; grids subtract it so their bar rules line
/// up with the outermost padded edge. `expected` is the extent the parent
/// allotted to this shape: pads pass their own size down, grids pass each
/// cell's track span, and a bar-style grid stretches its rules to whichever
/// of the two reaches it. Returns the number of nodes painted.
fn paint(
    canvas: &mut Canvas,
    shape: &Shape,
    pos: Pos,
    offset: Pos,
    expected: Option<Size>,
    width: WidthFn,
) -> usize {
    match shape.kind() {
        ShapeKind::Empty => 1,
        ShapeKind::Text { lines } => {
            for (i, line) in lines.iter().enumerate() {
                canvas.put_str(pos.move_y(i as i32), line.clone());
            }
            1
        }
        ShapeKind::Frame { inner } => {
            let size = inner.size(width);
            let (w, h) = (size.width as i32, size.height as i32);
            canvas.put_char(pos, '+');
            canvas.put_char(pos.move_by(w + 1, 0), '+');
            canvas.put_char(pos.move_by(0, h + 1), '+');
            canvas.put_char(pos.move_by(w + 1, h + 1), '+');
            canvas.hline(pos.move_x(1), size.width);
            canvas.hline(pos.move_by(1, h + 1), size.width);
            canvas.vline(pos.move_y(1), size.height);
            canvas.vline(pos.move_by(w + 1, 1), size.height);
            1 + paint(canvas, inner, pos.move_by(1, 1), ORIGIN, None, width)
        }
        ShapeKind::Pad { dx, dy, inner } => {
            let own = shape.size(width);
            let delta = Pos::new(*dy as i32, *dx as i32);
            1 + paint(
                canvas,
                inner,
                pos.add(delta),
                offset.add(delta),
                Some(own),
                width,
            )
        }
        ShapeKind::Grid { style, cells } => {
            let tracks = grid_tracks(cells, *style, width);
            let mut nodes = 1;
            for (j, row) in cells.iter().enumerate() {
                for (i, cell) in row.iter().enumerate() {
                    let cell_pos =
                        pos.move_by(tracks.col_start[i] as i32, tracks.row_start[j] as i32);
                    let cell_span = Size::new(
                        tracks.col_start[i + 1] - tracks.col_start[i],
                        tracks.row_start[j + 1] - tracks.row_start[j],
                    );
                    nodes += paint(canvas, cell, cell_pos, ORIGIN, Some(cell_span), width);
                }
            }

            if matches!(style, GridStyle::Bars) {
                let Size {
                    width: rule_w,
                    height: rule_h,
                } = expected.unwrap_or_else(|| shape.size(width));
                let rows = cells.len();
                let cols = cells.first().map(Vec::len).unwrap_or(0);
                for j in 1..rows {
                    let at = Pos::new(pos.row + tracks.row_start[j] as i32 - 1, pos.col - offset.col);
                    canvas.hline(at, rule_w);
                }
                for i in 1..cols {
                    let at = Pos::new(pos.row - offset.row, pos.col + tracks.col_start[i] as i32 - 1);
                    canvas.vline(at, rule_h);
                }
                for j in 1..rows {
                    for i in 1..cols {
                        canvas.put_char(
                            pos.move_by(
                                tracks.col_start[i] as i32 - 1,
                                tracks.row_start[j] as i32 - 1,
                            ),
                            '+',
                        );
                    }
                }
            }
            nodes
        }
        ShapeKind::Tree {
            indent,
            node,
            children,
        } => {
            let mut nodes = 1 + paint(canvas, node, pos, ORIGIN, None, width);
            let node_size = node.size(width);
            let mut cursor = pos.move_by(*indent as i32, node_size.height as i32);
            canvas.put_char(cursor.move_x(-1), '`');
            for (idx, child) in children.iter().enumerate() {
                canvas.put_str(cursor, "+- ");
                let child_height = child.size(width).height;
                if idx + 1 < children.len() {
                    canvas.vline(cursor.move_y(1), child_height.saturating_sub(1));
                }
                nodes += paint(canvas, child, cursor.move_x(3), ORIGIN, None, width);
                cursor = cursor.move_y(child_height as i32);
            }
            nodes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use crate::shape::build;
    use crate::width::display_width;
    use serde_json::json;

    #[test]
    fn frame_wraps_text_in_a_border() {
        let shape = build::frame(build::line("ab"));
        assert_eq!(shape.size(byte_width), Size::new(4, 3));
        assert_eq!(render_to_string(&shape), "+--+\n|ab|\n+--+");
    }

    #[test]
    fn zero_padding_renders_identically() {
        let padded = build::pad_xy(0, 0, build::frame(build::text("a\nbb")));
        let bare = build::frame(build::text("a\nbb"));
        assert_eq!(render_to_string(&padded), render_to_string(&bare));
    }

    #[test]
    fn plain_grid_abuts_cells() {
        let shape = build::grid_text(GridStyle::None, vec![vec!["x", "yy"]]).unwrap();
        assert_eq!(shape.size(byte_width), Size::new(3, 1));
        assert_eq!(render_to_string(&shape), "xyy");
    }

    #[test]
    fn bars_grid_separates_cells_with_rules() {
        let shape = build::grid_text(GridStyle::Bars, vec![vec!["x", "yy"]]).unwrap();
        assert_eq!(shape.size(byte_width), Size::new(4, 1));
        assert_eq!(render_to_string(&shape), "x|yy");
    }

    #[test]
    fn bars_grid_draws_full_junctions() {
        let shape =
            build::grid_text(GridStyle::Bars, vec![vec!["a", "b"], vec!["c", "d"]]).unwrap();
        assert_eq!(render_to_string(&shape), "a|b\n-+-\nc|d");
    }

    #[test]
    fn tree_draws_connectors_below_the_node() {
        let shape = build::tree(
            2,
            build::line("N"),
            vec![build::line("a"), build::line("b")],
        )
        .unwrap();
        assert_eq!(render_to_string(&shape), "N\n `+- a\n  +- b");
    }

    #[test]
    fn tree_rules_join_tall_siblings() {
        let shape = build::tree1(
            build::line("root"),
            vec![build::text("a\na2"), build::line("b")],
        )
        .unwrap();
        assert_eq!(
            render_to_string(&shape),
            "root\n`+- a\n |  a2\n +- b"
        );
    }

    #[test]
    fn padded_grid_rules_reach_the_enclosing_frame() {
        let grid =
            build::grid_text(GridStyle::Bars, vec![vec!["a", "b"], vec!["c", "d"]]).unwrap();
        let shape = build::frame(build::pad(grid));
        assert_eq!(
            render_to_string(&shape),
            "+-----+\n|  |  |\n| a|b |\n|--+--|\n| c|d |\n|  |  |\n+-----+"
        );
    }

    #[test]
    fn indent_applies_to_every_line() {
        let shape = build::frame(build::line("a"));
        let settings = RendererSettings {
            indent: 3,
            ..RendererSettings::default()
        };
        assert_eq!(
            render_to_string_with(&shape, settings),
            "   +-+\n   |a|\n   +-+"
        );
    }

    #[test]
    fn width_function_flows_into_sizing_and_serialization() {
        // One tree per width function; a size memoized under one policy must
        // not be reused under another.
        let byte_shape = build::hlist(vec![build::line("héllo"), build::line("!")]);
        let display_shape = build::hlist(vec![build::line("héllo"), build::line("!")]);
        let display_settings = RendererSettings {
            width: display_width,
            ..RendererSettings::default()
        };

        // The accented e is two bytes wide but one cell wide.
        assert_eq!(byte_shape.size(byte_width), Size::new(7, 1));
        assert_eq!(display_shape.size(display_width), Size::new(6, 1));

        // Under a consistent width function either policy yields seamless text.
        assert_eq!(render_to_string(&byte_shape), "héllo!");
        assert_eq!(
            render_to_string_with(&display_shape, display_settings),
            "héllo!"
        );
    }

    #[test]
    fn renderer_tallies_metrics_and_logs() {
        let sink = MemorySink::new();
        let mut renderer = TextRenderer::with_default().with_logger(Logger::new(sink.clone()));
        let shape = build::frame(build::line("hi"));

        let mut output = Vec::new();
        renderer.render(&shape, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "+--+\n|hi|\n+--+");
        let snapshot = renderer.metrics().snapshot();
        assert_eq!(snapshot.renders, 1);
        assert_eq!(snapshot.nodes_painted, 2);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].target, "render");
        assert_eq!(events[0].fields.get("width"), Some(&json!(4)));
    }
}
