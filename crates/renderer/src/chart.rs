use crate::geometry::{index_to_x, Padding, Surface};
use crate::scene::{LineCap, LinearGradient, Scene, Shape};
use iced::{Point, Size};
use pulse_core::ThemeMode;
use pulse_theme::Palette;

/// Distance of the baseline from the bottom edge.
const BASELINE_OFFSET: f32 = 20.0;
/// Vertical space not used for plotting (baseline offset plus top margin).
const VERTICAL_MARGIN: f32 = 28.0;
const GRID_TOP: f32 = 20.0;
const GRID_ROWS: usize = 5;
const LINE_WIDTH: f32 = 2.0;
const GUIDE_TOP: f32 = 8.0;
const GUIDE_BOTTOM_OFFSET: f32 = 12.0;
const HOVER_RADIUS: f32 = 4.0;

/// Vertical scale for a series: `max(10, max(samples ∪ {100}))`.
///
/// The fixed 100 keeps the chart from rescaling while values stay small.
pub fn max_y(samples: &[f64]) -> f64 {
    samples.iter().copied().fold(100.0, f64::max).max(10.0)
}

/// Padded line/area chart with gridlines and an optional hover highlight.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    surface: Surface,
    padding: Padding,
    hover:   Option<usize>,
    scene:   Scene,
}

impl ChartRenderer {
    pub fn new(layout: Size, scale_factor: f32, padding: Padding) -> Self {
        let surface = Surface::new(layout, scale_factor);
        Self {
            scene: Scene::new(surface.draw_size(), layout),
            surface,
            padding,
            hover: None,
        }
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    /// Current drawing width, as used by the hover resolver.
    pub fn width(&self) -> f32 {
        self.surface.draw_size().width
    }

    /// Hover index used by the most recent draw.
    pub fn hover_index(&self) -> Option<usize> {
        self.hover
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Resize and redraw from `samples`, keeping the current hover index.
    pub fn resize(&mut self, layout: Size, scale_factor: f32, samples: &[f64], mode: ThemeMode) {
        if self.surface.resize(layout, scale_factor) {
            self.draw(samples, self.hover, mode);
        }
    }

    /// Full redraw.  A hover index beyond `samples` is dropped.
    pub fn draw(&mut self, samples: &[f64], hover: Option<usize>, mode: ThemeMode) {
        let palette = Palette::for_mode(mode);
        let size = self.surface.draw_size();
        let (w, h) = (size.width, size.height);
        let mut scene = Scene::new(size, self.surface.layout());

        self.hover = hover.filter(|&i| i < samples.len());

        let baseline = h - BASELINE_OFFSET;
        scene.stroke(
            Shape::Line {
                from: Point::new(0.0, baseline),
                to:   Point::new(w, baseline),
            },
            palette.axis,
            1.0,
            LineCap::Butt,
        );

        let points = self.points(samples, size);

        if points.len() > 1 {
            let ramp = LinearGradient {
                start: Point::new(0.0, 0.0),
                end:   Point::new(0.0, h),
                stops: palette.chart_ramp.clone(),
            };
            scene.stroke(Shape::Polyline(points.clone()), ramp, LINE_WIDTH, LineCap::Butt);
        }

        if !points.is_empty() {
            let mut area = points.clone();
            area.push(Point::new(w - self.padding.right, baseline));
            area.push(Point::new(self.padding.left, baseline));
            scene.fill(Shape::Polygon(area), palette.chart_fill);
        }

        for row in 0..GRID_ROWS {
            let y = GRID_TOP + (row as f32 / (GRID_ROWS - 1) as f32) * (h - VERTICAL_MARGIN);
            scene.stroke(
                Shape::Line {
                    from: Point::new(0.0, y),
                    to:   Point::new(w, y),
                },
                palette.grid,
                1.0,
                LineCap::Butt,
            );
        }

        if let Some(point) = self.hover.map(|i| points[i]) {
            scene.stroke(
                Shape::Line {
                    from: Point::new(point.x, GUIDE_TOP),
                    to:   Point::new(point.x, h - GUIDE_BOTTOM_OFFSET),
                },
                palette.guide,
                1.0,
                LineCap::Butt,
            );
            scene.fill(
                Shape::Circle {
                    center: point,
                    radius: HOVER_RADIUS,
                },
                palette.marker,
            );
        }

        self.scene = scene;
    }

    fn points(&self, samples: &[f64], size: Size) -> Vec<Point> {
        let top = max_y(samples);
        let plot_height = size.height - VERTICAL_MARGIN;
        let len = samples.len();

        samples
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Point::new(
                    index_to_x(i, len, size.width, self.padding),
                    size.height - BASELINE_OFFSET - (v / top) as f32 * plot_height,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Command, Paint};

    const PAD: Padding = Padding::new(8.0, 8.0);

    fn chart() -> ChartRenderer {
        ChartRenderer::new(Size::new(416.0, 180.0), 1.0, PAD)
    }

    fn lines(scene: &Scene) -> usize {
        scene
            .commands()
            .iter()
            .filter(|c| matches!(c.shape(), Shape::Line { .. }))
            .count()
    }

    #[test]
    fn max_y_keeps_floor_of_one_hundred() {
        assert_eq!(max_y(&[]), 100.0);
        assert_eq!(max_y(&[3.0, 7.0]), 100.0);
        assert_eq!(max_y(&[250.0]), 250.0);
    }

    #[test]
    fn empty_series_draws_axis_and_grid_only() {
        let mut c = chart();
        c.draw(&[], Some(0), ThemeMode::Light);
        assert_eq!(c.scene().commands().len(), 1 + GRID_ROWS);
        assert_eq!(c.hover_index(), None);
    }

    #[test]
    fn draw_order_is_axis_line_fill_grid_hover() {
        let mut c = chart();
        c.draw(&[10.0, 50.0, 30.0], Some(1), ThemeMode::Dark);
        let cmds = c.scene().commands();
        assert!(matches!(cmds[0].shape(), Shape::Line { .. }));
        assert!(matches!(
            &cmds[1],
            Command::Stroke { shape: Shape::Polyline(_), paint: Paint::Linear(_), .. }
        ));
        assert!(matches!(cmds[2], Command::Fill { shape: Shape::Polygon(_), .. }));
        for cmd in &cmds[3..3 + GRID_ROWS] {
            assert!(matches!(cmd.shape(), Shape::Line { .. }));
        }
        assert!(matches!(cmds[3 + GRID_ROWS].shape(), Shape::Line { .. }));
        assert!(matches!(cmds[4 + GRID_ROWS].shape(), Shape::Circle { .. }));
        assert_eq!(cmds.len(), 5 + GRID_ROWS);
    }

    #[test]
    fn samples_map_to_padded_area() {
        let mut c = chart();
        c.draw(&[0.0, 100.0], None, ThemeMode::Light);
        let Shape::Polyline(points) = c.scene().commands()[1].shape() else {
            panic!("expected polyline");
        };
        assert_eq!(points[0], Point::new(8.0, 160.0));
        assert_eq!(points[1], Point::new(408.0, 8.0));
    }

    #[test]
    fn single_sample_sits_left_and_fills() {
        let mut c = chart();
        c.draw(&[50.0], Some(0), ThemeMode::Light);
        let cmds = c.scene().commands();
        let Shape::Polygon(area) = cmds[1].shape() else {
            panic!("expected area fill");
        };
        assert_eq!(area[0].x, 8.0);
        assert!(!c.scene().has_non_finite());
        assert_eq!(c.hover_index(), Some(0));
    }

    #[test]
    fn stale_hover_index_is_dropped() {
        let mut c = chart();
        c.draw(&[1.0, 2.0, 3.0], Some(2), ThemeMode::Light);
        assert_eq!(lines(c.scene()), 1 + GRID_ROWS + 1);
        c.draw(&[1.0, 2.0], Some(2), ThemeMode::Light);
        assert_eq!(c.hover_index(), None);
        assert_eq!(lines(c.scene()), 1 + GRID_ROWS);
    }

    #[test]
    fn gridlines_are_evenly_spaced() {
        let mut c = chart();
        c.draw(&[], None, ThemeMode::Light);
        let ys: Vec<f32> = c.scene().commands()[1..]
            .iter()
            .filter_map(|cmd| match cmd.shape() {
                Shape::Line { from, .. } => Some(from.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![20.0, 58.0, 96.0, 134.0, 172.0]);
    }

    #[test]
    fn resize_keeps_hover_and_uses_new_width() {
        let mut c = chart();
        c.draw(&[5.0, 6.0], Some(1), ThemeMode::Light);
        c.resize(Size::new(216.0, 180.0), 1.0, &[5.0, 6.0], ThemeMode::Light);
        assert_eq!(c.hover_index(), Some(1));
        assert_eq!(c.width(), 216.0);
        let marker = c.scene().commands().last().unwrap();
        assert!(matches!(marker.shape(), Shape::Circle { center, .. } if center.x == 208.0));
    }
}
